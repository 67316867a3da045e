//! File logging for the demo.
//!
//! The TUI owns stdout, so log records go to `DemoConfig::log_file`.
//! `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Install the global subscriber, appending to the configured log file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &DemoConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .wrap_err_with(|| format!("opening log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("installing tracing subscriber: {}", e))?;

    tracing::info!(log_file = %config.log_file.display(), "logging initialized");
    Ok(())
}
