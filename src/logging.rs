//! Log file setup.
//!
//! The menu owns the terminal, so logs always go to a file.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{APP_DIR, LogConfig};

pub const LOG_FILE: &str = "retro-menu.log";

/// Directory logs are written to.
pub fn log_dir(config: &LogConfig) -> Option<PathBuf> {
    config
        .directory
        .clone()
        .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR)))
}

/// `RUST_LOG` takes precedence over the configured level.
fn env_filter(config: &LogConfig) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns None when no log directory is available or it cannot be created;
/// the program then runs without logs. Keep the guard alive for the process
/// lifetime so buffered lines are flushed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let dir = log_dir(config)?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()
        .ok()?;

    Some(guard)
}
