//! Probe for installed shells and open a directory in one of them.

use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::locator::{AppLocator, Spotlight};
use crate::shell::Shell;
use crate::spawner::{ProcessSpawner, Spawner};

/// Probes for installed shells and launches them.
#[derive(Debug, Clone, Default)]
pub struct ShellRegistry<L = Spotlight, S = ProcessSpawner> {
    locator: L,
    spawner: S,
}

impl ShellRegistry {
    /// A registry backed by Spotlight lookups and real process spawning.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locator: Spotlight,
            spawner: ProcessSpawner,
        }
    }
}

impl<L: AppLocator, S: Spawner> ShellRegistry<L, S> {
    /// A registry using the given lookup and spawn backends.
    #[must_use]
    pub const fn with_backends(locator: L, spawner: S) -> Self {
        Self { locator, spawner }
    }

    /// Whether `shell` resolves to a non-empty install path.
    /// Lookup errors count as not installed.
    pub async fn is_installed(&self, shell: Shell) -> bool {
        let bundle_id = shell.bundle_identifier();
        match self.locator.app_path(bundle_id).await {
            Ok(path) if !path.as_os_str().is_empty() => {
                debug!(%shell, bundle_id, path = %path.display(), "shell installed");
                true
            }
            Ok(_) => {
                debug!(%shell, bundle_id, "lookup returned an empty path");
                false
            }
            Err(e) => {
                debug!(%shell, bundle_id, error = %e, "shell not installed");
                false
            }
        }
    }

    /// Probe every shell concurrently and return the installed ones in
    /// [`Shell::ALL`] order.
    pub async fn available_shells(&self) -> Vec<Shell> {
        let installed = join_all(Shell::ALL.map(|shell| self.is_installed(shell))).await;
        Shell::ALL
            .into_iter()
            .zip(installed)
            .filter_map(|(shell, ok)| ok.then_some(shell))
            .collect()
    }

    /// Open `path` in `shell`.
    ///
    /// # Errors
    /// Fails only if `open` could not be started; the launched process is
    /// not waited on.
    pub async fn launch(&self, shell: Shell, path: &Path) -> Result<()> {
        info!(%shell, path = %path.display(), "launching shell");
        self.spawner
            .spawn(launch_command(shell, path))
            .await
            .with_context(|| format!("Failed to launch {shell}"))
    }
}

/// Build `open -b <bundle-id> <path>` for `shell`.
#[must_use]
pub fn launch_command(shell: Shell, path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg("-b").arg(shell.bundle_identifier()).arg(path);
    command
}
