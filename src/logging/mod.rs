//! Tracing subscriber initialization.
//!
//! Logs always go to a file. The full-screen interface owns the terminal and
//! pipe mode owns stdout/stderr, so nothing is ever written to the console.
//! Follow the log with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Why the log file could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that was being created.
        path: PathBuf,
        /// What the filesystem reported.
        #[source]
        source: std::io::Error,
    },

    /// The configured path names no file.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Another global subscriber got there first.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory and file name the appender wants.
///
/// A bare file name logs into the current directory.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name.to_string()))
}

/// Send tracing output to `log_path`.
///
/// `RUST_LOG` picks the filter, falling back to [`DEFAULT_FILTER`]. The
/// directory is created on demand and the file is appended to, never rotated.
///
/// # Errors
///
/// Fails if the path has no file name, the directory cannot be created, or a
/// global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, &file_name);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn split_log_path_separates_directory_and_name() {
        let (dir, name) = split_log_path(Path::new("/var/log/terminote/terminote.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/terminote"));
        assert_eq!(name, "terminote.log");
    }

    #[test]
    fn split_log_path_bare_name_uses_current_directory() {
        let (dir, name) = split_log_path(Path::new("terminote.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "terminote.log");
    }

    #[test]
    fn split_log_path_rejects_path_without_file_name() {
        let result = split_log_path(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("nested").join("logs");
        let log_file = log_dir.join("terminote.log");

        // May fail if another test already installed the subscriber; the
        // directory is created first either way.
        let _ = init(&log_file);

        assert!(log_dir.exists(), "Log directory should be created: {:?}", log_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let temp = TempDir::new().unwrap();
        let log_file = temp.path().join("terminote.log");

        let _ = init(&log_file);
        let second = init(&log_file);
        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    }

    #[test]
    fn logging_error_display_names_the_path() {
        let err = LoggingError::InvalidPath(PathBuf::from("/"));
        assert!(err.to_string().contains("Invalid log file path"));
    }
}
