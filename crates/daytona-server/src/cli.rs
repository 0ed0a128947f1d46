//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daytona-server")]
#[command(version, about = "Daytona server configuration and workspace log maintenance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server config directory (defaults to <user-config-dir>/daytona/server)
    #[arg(long, env = "DAYTONA_SERVER_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Make sure a config exists and report the paths in use
    Init,

    /// Inspect or reset the server config
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Workspace and project logs
    #[command(subcommand)]
    Logs(LogsCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the config
    Show,

    /// Print the config file path
    Path,

    /// Overwrite the config with defaults
    Reset,
}

#[derive(Subcommand)]
pub enum LogsCommand {
    /// Print a log file path, creating its directory
    Path(LogTarget),

    /// Show the last lines of a log
    Tail(TailArgs),

    /// Append a timestamped line to a log
    Append(AppendArgs),

    /// List workspaces that have logs
    List,

    /// Delete all logs of a workspace
    Delete {
        /// Workspace id
        workspace: String,
    },
}

#[derive(Args)]
pub struct LogTarget {
    /// Workspace id
    pub workspace: String,

    /// Project id within the workspace
    #[arg(short, long)]
    pub project: Option<String>,
}

#[derive(Args)]
pub struct TailArgs {
    #[command(flatten)]
    pub target: LogTarget,

    /// Number of lines to show
    #[arg(short = 'n', long, default_value = "20")]
    pub lines: usize,
}

#[derive(Args)]
pub struct AppendArgs {
    #[command(flatten)]
    pub target: LogTarget,

    /// Line to append
    pub message: String,
}
