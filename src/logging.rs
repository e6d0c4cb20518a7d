//! Logging setup on top of `tracing-subscriber`
//!
//! `RUST_LOG` takes precedence over the configured level, e.g.
//! `RUST_LOG=study_progress=trace`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config yields a valid filter
pub const FALLBACK_LEVEL: &str = "warn";

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log file could not be opened for appending
    #[error("cannot open log file {path}: {source}")]
    File {
        /// Configured log file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A global subscriber is already set
    #[error("a logger is already installed")]
    AlreadyInstalled,
}

/// Build the filter: `RUST_LOG` first, then `level`, then [`FALLBACK_LEVEL`]
#[must_use]
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install the global subscriber.
///
/// # Arguments
/// * `level` - Configured level (`error`, `warn`, `info`, `debug`, `trace`)
/// * `log_file` - Append to this file instead of writing to stderr
/// * `verbose` - Include targets and line numbers in each event
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is already installed.
pub fn init(level: &str, log_file: Option<&Path>, verbose: bool) -> Result<(), LoggingError> {
    let builder = fmt()
        .with_env_filter(filter_for(level))
        .with_target(verbose)
        .with_line_number(verbose);

    let installed = if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::File {
                path: path.to_path_buf(),
                source,
            })?;
        builder
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    installed.map_err(|_| LoggingError::AlreadyInstalled)
}

/// Debug-level logging routed through the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
