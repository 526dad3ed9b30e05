use anyhow::Result;
use termshell::{Shell, ShellRegistry};

pub async fn cmd_list(all: bool) -> Result<()> {
    let registry = ShellRegistry::new();

    if !all {
        let shells = registry.available_shells().await;
        if shells.is_empty() {
            eprintln!("No supported terminal apps found.");
        }
        for shell in shells {
            println!("{shell}");
        }
        return Ok(());
    }

    let installed = registry.available_shells().await;
    for shell in Shell::ALL {
        let status = if installed.contains(&shell) { "installed" } else { "not installed" };
        println!("{:<10} {:<24} {status}", shell.label(), shell.bundle_identifier());
    }
    Ok(())
}
