//! Hotseat - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use hotseat_tui::{Cli, TuiConfig, run_tui};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_tracing(&config)?;
    run_tui(&config)
}

/// Sends logs to a file so they never draw over the board.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize tracing")
}
