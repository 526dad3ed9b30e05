use anyhow::Result;
use clap::Subcommand;
use termshell::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the preferred shell and where the config lives
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
    /// Set a value; the only key is shell.preferred (Terminal, Hyper, or iTerm2)
    Set { key: String, value: String },
    /// Get a value, e.g. shell.preferred
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("Config file:     {}", Config::path()?.display());
            print!("{}", describe(&config));
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init => {
            Config::default().save()?;
            println!("Wrote default config to {}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            let stored = config.get_value(&key)?;
            if stored != value {
                eprintln!("{value:?} is not a known shell label");
            }
            println!("Set {key} = {stored}");
        }
        ConfigAction::Get { key } => println!("{}", Config::load()?.get_value(&key)?),
    }
    Ok(())
}

fn describe(config: &Config) -> String {
    let shell = config.shell.preferred;
    format!(
        "Preferred shell: {shell} ({})\n",
        shell.bundle_identifier()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use termshell::Shell;

    #[test]
    fn test_describe_labels_preferred_shell() {
        let mut config = Config::default();
        config.shell.preferred = Shell::ITerm2;
        assert_eq!(
            describe(&config),
            "Preferred shell: iTerm2 (com.googlecode.iterm2)\n"
        );
    }

    #[test]
    fn test_describe_default_config() {
        assert_eq!(
            describe(&Config::default()),
            "Preferred shell: Terminal (com.apple.Terminal)\n"
        );
    }
}
