//! Tracing setup.
//!
//! The terminal is in alternate-screen mode while the app runs, so events are
//! written to a log file instead of stderr.

use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `path` - Log file, appended to and created if missing
/// * `level` - Default filter directive; `RUST_LOG` takes precedence
///
/// # Returns
/// * `Result<()>` - Error if the file cannot be opened or a subscriber is already set
pub fn init_tracing(path: &Path, level: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}
