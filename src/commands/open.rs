use anyhow::{Context, Result};
use std::path::PathBuf;
use termshell::{Config, Shell, ShellRegistry};

pub async fn cmd_open(path: Option<PathBuf>, label: Option<&str>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let path = path
        .canonicalize()
        .with_context(|| format!("No such path: {}", path.display()))?;

    let shell = match label {
        Some(label) => {
            let shell = Shell::parse(label);
            if shell.label() != label {
                eprintln!("Unknown shell {label:?}, using {shell}");
            }
            shell
        }
        None => Config::load()?.shell.preferred,
    };

    let registry = ShellRegistry::new();
    if !registry.is_installed(shell).await {
        eprintln!("Warning: {shell} does not appear to be installed");
    }

    registry.launch(shell, &path).await?;
    eprintln!("Opened {} in {shell}", path.display());
    Ok(())
}
