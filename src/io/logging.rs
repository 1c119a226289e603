//! File-backed tracing setup.
//!
//! The TUI owns stdout/stderr while running, so log output only ever goes
//! to a file, and only when one is configured.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Error type for log setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log level {level:?}: {message}")]
    InvalidLevel { level: String, message: String },
    #[error("logging already initialized")]
    AlreadyInitialized,
}

/// Build the filter for a level string such as `debug` or `todo_tui=trace`
pub fn level_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|e| LogError::InvalidLevel {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Install a global subscriber appending to `path`
pub fn init_file_logging(path: &Path, level: &str) -> Result<(), LogError> {
    let filter = level_filter(level)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)
}
