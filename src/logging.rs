use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tracing subscriber already installed")]
    AlreadyInstalled,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to
/// `config.file`; without a file nothing is installed and `Ok(false)` is
/// returned.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LoggingError::OpenError {
            path: path.clone(),
            source: e,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::OpenError {
            path: path.clone(),
            source: e,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        let config = LoggingConfig::default();
        assert!(!init_tracing(&config).unwrap());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            // A directory cannot be opened as a log file.
            file: Some(dir.path().to_path_buf()),
        };
        assert!(matches!(
            init_tracing(&config),
            Err(LoggingError::OpenError { .. })
        ));
    }
}
