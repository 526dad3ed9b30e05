//! `termshell` command-line interface.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigAction;
use termshell::logging::init_logging;

#[derive(Parser)]
#[command(name = "termshell", about = "Find installed terminal apps and open one at a directory")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed terminal apps
    List {
        /// Show every supported app with its bundle identifier and status
        #[arg(long)]
        all: bool,
    },

    /// Open a directory in a terminal app
    Open {
        /// Directory to open (defaults to the current directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Terminal app label: Terminal, Hyper, or iTerm2 (defaults to config)
        #[arg(long, value_name = "LABEL")]
        shell: Option<String>,
    },

    /// Manage termshell configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { all } => commands::list::cmd_list(all).await?,
        Commands::Open { path, shell } => commands::open::cmd_open(path, shell.as_deref()).await?,
        Commands::Config { action } => commands::config::cmd_config(action)?,
    }

    Ok(())
}
