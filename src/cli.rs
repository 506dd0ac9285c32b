//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// SmartStock inventory server
#[derive(Debug, Parser)]
#[command(name = "smartstock-server", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment; selects `config/<env>.toml`
    #[arg(short, long, env = "SMARTSTOCK_ENV", default_value = "development")]
    pub env: String,

    /// Directory holding the configuration files
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// The command to run.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
