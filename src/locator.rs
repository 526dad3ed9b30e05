//! Resolve a bundle identifier to the path of the installed application.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Looks up where an application is installed.
#[async_trait]
pub trait AppLocator: Send + Sync {
    /// Return the installed path of the application with `bundle_id`.
    ///
    /// # Errors
    /// Fails if no application is registered for `bundle_id` or the lookup
    /// itself could not run.
    async fn app_path(&self, bundle_id: &str) -> Result<PathBuf>;
}

/// Queries the Spotlight index via `mdfind`.
///
/// Hosts without `mdfind` fail every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spotlight;

#[async_trait]
impl AppLocator for Spotlight {
    async fn app_path(&self, bundle_id: &str) -> Result<PathBuf> {
        let output = Command::new("mdfind")
            .arg(bundle_query(bundle_id))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .context("Failed to run mdfind")?;

        if !output.status.success() {
            bail!("mdfind exited with status {:?}", output.status.code());
        }

        first_path(&String::from_utf8_lossy(&output.stdout))
            .with_context(|| format!("No application registered for bundle identifier {bundle_id}"))
    }
}

fn bundle_query(bundle_id: &str) -> String {
    let escaped = bundle_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("kMDItemCFBundleIdentifier == '{escaped}'")
}

fn first_path(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_query() {
        assert_eq!(
            bundle_query("com.apple.Terminal"),
            "kMDItemCFBundleIdentifier == 'com.apple.Terminal'"
        );
    }

    #[test]
    fn test_bundle_query_escapes_quotes() {
        assert_eq!(
            bundle_query("a'b"),
            "kMDItemCFBundleIdentifier == 'a\\'b'"
        );
    }

    #[test]
    fn test_first_path_skips_blank_lines() {
        let out = "\n  \n/Applications/iTerm.app\n/Volumes/Backup/iTerm.app\n";
        assert_eq!(first_path(out), Some(PathBuf::from("/Applications/iTerm.app")));
    }

    #[test]
    fn test_first_path_empty_output() {
        assert_eq!(first_path(""), None);
        assert_eq!(first_path("\n\n"), None);
    }

    #[cfg(not(target_os = "macos"))]
    #[tokio::test]
    async fn test_spotlight_fails_without_mdfind() {
        let err = Spotlight.app_path("com.apple.Terminal").await.unwrap_err();
        assert!(err.to_string().contains("mdfind"));
    }
}
