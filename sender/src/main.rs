//! # Multisend sender CLI
//!
//! Entry point for the orchestration driver.
//!
//! Provides:
//! - Argument parsing and validation
//! - One-shot quote/send/confirm runs with per-phase timeouts
//! - Ctrl-C cancellation

mod cli;
mod error;
mod ledger;
mod orchestrator;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::Layer;

use cli::{Cli, Commands, SendArgs};
use error::SENT_VIA_OAPP;
use ledger::SimLedger;
use orchestrator::{cancellation, Orchestrator, SendRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on CLI options
    init_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "oapp-sender starting"
    );

    // Execute command
    let result = match &cli.command {
        Commands::Send(args) => run_send(args).await,
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

async fn run_send(args: &SendArgs) -> Result<()> {
    let request = SendRequest {
        network: args.network.clone(),
        destinations: args.destinations.clone(),
        message: args.message.clone(),
        options: parse_hex_options(&args.options)?,
    };

    let orchestrator = Orchestrator::new(SimLedger::new(), Duration::from_secs(args.timeout));

    // Ctrl-C aborts the in-flight phase and the whole run with it.
    let (handle, token) = cancellation();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    let receipt = orchestrator.run(&request, &token).await?;

    println!("{} {}", SENT_VIA_OAPP, serde_json::to_string(&receipt)?);
    Ok(())
}

/// Decodes the `--options` argument: empty, or hex with an optional 0x prefix.
fn parse_hex_options(options: &str) -> Result<Vec<u8>> {
    let trimmed = options.strip_prefix("0x").unwrap_or(options);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    hex::decode(trimmed).with_context(|| format!("invalid hex options '{options}'"))
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else {
        let default_level = match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    let fmt_layer = match cli.log_format {
        cli::LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        cli::LogFormat::Pretty => fmt::layer().pretty().boxed(),
        cli::LogFormat::Compact => fmt::layer().compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
