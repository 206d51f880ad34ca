//! Structured logging
//!
//! The terminal belongs to the TUI, so events are written to
//! `~/.scenario-desk/scenario-desk.log` instead of stderr.
//!
//! Priority: RUST_LOG env var > config `log_level` > "info".

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "scenario-desk.log";

fn build_filter(config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// Logging is skipped silently when the log file cannot be opened; the
/// application still runs.
pub fn init(config_level: Option<&str>) {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            app = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
            "Logging initialised"
        );
    }
}
