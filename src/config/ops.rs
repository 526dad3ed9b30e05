use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::shell::Shell;

impl Config {
    /// Location of the config file.
    ///
    /// # Errors
    /// Fails if the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("termshell").join("config.toml"))
    }

    /// Load from [`Config::path`], or defaults if the file does not exist.
    ///
    /// # Errors
    /// Fails if the home directory is unknown or the file cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::path`].
    ///
    /// # Errors
    /// Fails if the home directory is unknown or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Fails if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    /// Fails on an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "shell.preferred" => Ok(self.shell.preferred.to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    /// Fails on an unknown key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "shell.preferred" => self.shell.preferred = Shell::parse(value),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
