// Log setup for the terminal UI
//
// The UI owns the terminal, so logs only go to a file. Without a log file no
// subscriber is installed and tracing macros are no-ops.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "sortty=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("logging already initialized")]
    AlreadyInitialized,
}

/// Install a file-backed subscriber when `log_file` is set
pub fn init(log_file: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| LoggingError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_unwritable_path() {
        let result = init(Some(Path::new("/nonexistent-dir/sortty.log")));
        assert!(matches!(result, Err(LoggingError::Io { .. })));
    }
}
