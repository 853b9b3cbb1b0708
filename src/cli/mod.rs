//! Command-line interface definitions.

pub mod check;
pub mod run;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tumbler - Whirlpool CoinJoin wallet client.
#[derive(Parser, Debug)]
#[command(name = "tumbler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the wallet client (foreground, interactive)
    Run(RunArgs),

    /// Query a running instance over its local API
    Status(StatusArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `tumbler check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Test coordinator and backend connectivity
    Connection(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "tumbler.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "tumbler.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Override the main API listen port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Force clear-net routing even when the config enables Tor
    #[arg(long)]
    pub no_tor: bool,

    /// Path to the wallet state file
    #[arg(long, default_value = "tumbler-state.json")]
    pub state_file: PathBuf,
}

/// Arguments for the `status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Port of the local API to query
    #[arg(long, default_value = "8899")]
    pub port: u16,
}
