//! Command-line surface.

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_STATE_FILE;

pub mod commands;
pub mod output;

pub use commands::Commands;

/// Manage local proactive share-offer state for chat agent flows.
#[derive(Parser, Debug)]
#[command(name = "share-offer", version, about, long_about = None)]
pub struct Cli {
    /// Path to local state JSON file
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_STATE_FILE)]
    pub state_file: String,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
