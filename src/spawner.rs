//! Start external processes without waiting for them.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::{Command, Stdio};

/// Starts a prepared command.
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Spawn `command`. Returns once the process has started; its exit status
    /// is never observed.
    ///
    /// # Errors
    /// Fails if the process could not be started.
    async fn spawn(&self, command: Command) -> Result<()>;
}

/// Spawns real OS processes with stdio detached.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

#[async_trait]
impl Spawner for ProcessSpawner {
    async fn spawn(&self, mut command: Command) -> Result<()> {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let program = command.get_program().to_string_lossy().into_owned();
        tokio::process::Command::from(command)
            .spawn()
            .with_context(|| format!("Failed to spawn {program}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_missing_program_errors() {
        let err = ProcessSpawner
            .spawn(Command::new("termshell-no-such-program"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("termshell-no-such-program"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_does_not_wait_for_exit_status() {
        ProcessSpawner.spawn(Command::new("false")).await.unwrap();
    }
}
