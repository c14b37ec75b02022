//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Multisend sender - dispatches one message to many endpoints via the OApp
#[derive(Parser, Debug)]
#[command(
    name = "oapp-sender",
    author,
    version,
    about = "Send one message to several LayerZero endpoints in one batch",
    long_about = "Resolves the multisend dispatcher deployment, quotes the \n\
                  aggregate delivery fee, submits the batch with the quoted \n\
                  payment attached, and waits for confirmation."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "OAPP_SENDER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "OAPP_SENDER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote, send and confirm one batch
    Send(SendArgs),
}

/// Arguments for the `send` command
#[derive(Parser, Debug, Clone)]
pub struct SendArgs {
    /// Comma-separated destination endpoint ids
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub destinations: Vec<u32>,

    /// Message delivered to every destination
    #[arg(short, long)]
    pub message: String,

    /// Hex-encoded execution options appended to each destination's enforced options
    #[arg(long, default_value = "")]
    pub options: String,

    /// Network whose dispatcher deployment is used
    #[arg(long, default_value = "sim", env = "OAPP_NETWORK")]
    pub network: String,

    /// Per-phase timeout in seconds
    #[arg(long, default_value = "60", env = "OAPP_SENDER_TIMEOUT")]
    pub timeout: u64,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}
