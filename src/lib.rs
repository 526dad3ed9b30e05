//! Detect which terminal applications are installed on macOS and open one at a
//! directory.

pub mod config;
pub mod locator;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod spawner;

pub use config::Config;
pub use registry::ShellRegistry;
pub use shell::Shell;
