//! Command-line interface for the hotseat binary.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Hotseat - two-player tic-tac-toe on one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Builds the effective configuration: file settings, then CLI overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };

        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }

        Ok(config)
    }
}
