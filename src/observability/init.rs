//! Tracing initialization and subscriber setup.
//!
//! The UI owns stdout, so trace output goes to a file instead. Everything in
//! here is optional: if the log directory cannot be created or a subscriber
//! is already installed, the application runs without tracing.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Initializes the tracing subscriber with file output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// The level string is an `EnvFilter` directive, so per-module filters like
/// `"kinolog::fetch=trace"` work too.
///
/// # File Location
///
/// Log lines are appended to `kinolog.log` under the data directory
/// ([`crate::infrastructure::paths::data_dir`]).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it does not exist
/// - Silently does nothing if the directory or file cannot be created
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join("kinolog.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
