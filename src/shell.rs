//! The supported terminal applications and their bundle identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A terminal application that can be opened at a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Shell {
    /// Terminal.app, shipped with macOS.
    Terminal,
    /// Hyper.
    Hyper,
    /// iTerm2.
    #[serde(rename = "iTerm2")]
    ITerm2,
}

impl Shell {
    /// The shell used when a label is not recognised.
    pub const DEFAULT: Self = Self::Terminal;

    /// Every supported shell, in declaration order.
    pub const ALL: [Self; 3] = [Self::Terminal, Self::Hyper, Self::ITerm2];

    /// Parse a label such as `"iTerm2"`.
    ///
    /// Matching is exact. Anything else, including differently-cased labels,
    /// yields [`Shell::DEFAULT`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|shell| shell.label() == label)
            .unwrap_or(Self::DEFAULT)
    }

    /// The label this shell parses from and displays as.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::Hyper => "Hyper",
            Self::ITerm2 => "iTerm2",
        }
    }

    /// The macOS bundle identifier used to look up and launch the application.
    #[must_use]
    pub const fn bundle_identifier(self) -> &'static str {
        match self {
            Self::Terminal => "com.apple.Terminal",
            Self::Hyper => "co.zeit.hyper",
            Self::ITerm2 => "com.googlecode.iterm2",
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Shell {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<String> for Shell {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

#[cfg(test)]
mod tests;
