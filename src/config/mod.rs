//! Persistent settings stored as TOML under `~/.config/termshell`.

mod ops;

use serde::{Deserialize, Serialize};

use crate::shell::Shell;

/// Contents of `~/.config/termshell/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shell selection.
    pub shell: ShellConfig,
}

/// The `[shell]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Shell opened when none is given on the command line.
    /// Unknown labels read back as [`Shell::DEFAULT`].
    pub preferred: Shell,
}
