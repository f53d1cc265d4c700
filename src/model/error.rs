//! Error types for terminote.
//!
//! A small taxonomy built on `thiserror`. Errors compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned by the entry points
//!   - [`StoreError`] - a requested note does not exist
//!   - [`PersistError`] - the data file could not be read or written
//!   - [`ConfigError`](crate::config::ConfigError) - bad config or no home directory
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery Strategy
//!
//! Only path resolution at startup and terminal/persistence I/O are fatal.
//! [`StoreError`] and [`InputError`] are reported to the user and the session
//! carries on. [`MalformedRecord`] is not an error at all from the caller's
//! point of view: the codec collects them while loading everything else.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// A note-level miss escaped to the top level.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading or writing the data file failed.
    #[error("Storage error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration could not be loaded, or no data path could be derived.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Terminal or stdio failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A note lookup or deletion missed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No note holds the requested number (including the root position 0).
    #[error("Note {number} not found")]
    NotFound {
        /// The number that was asked for.
        number: usize,
    },

    /// The operation needs at least one note.
    #[error("No notes stored")]
    Empty,
}

/// Problems with text typed or piped in as a note body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input exceeded the size limit; the stored body was truncated.
    #[error("Note is {actual} characters long, truncated to {limit}")]
    TooLarge {
        /// Maximum accepted length in characters.
        limit: usize,
        /// Length of the input before truncation.
        actual: usize,
    },

    /// Nothing but whitespace was supplied.
    #[error("Nothing to append")]
    NoInput,
}

/// Failure reading or writing the data file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem error at `path`.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A note could not be encoded.
    #[error("Failed to encode note {number}: {source}")]
    Encode {
        /// Number of the note that failed.
        number: usize,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// A record in the data file that could not be decoded. Skipped on load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Skipped malformed record at line {line}: {reason}")]
pub struct MalformedRecord {
    /// 1-based line in the data file where the record starts.
    pub line: usize,
    /// Why it was rejected.
    pub reason: String,
}

/// Zero is not a valid sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid note number {0}: numbers start at 1")]
pub struct InvalidSequenceNumber(pub usize);

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn store_error_not_found_display() {
        let err = StoreError::NotFound { number: 4 };
        assert_eq!(err.to_string(), "Note 4 not found");
    }

    #[test]
    fn input_error_too_large_mentions_both_lengths() {
        let err = InputError::TooLarge {
            limit: 10,
            actual: 25,
        };
        let msg = err.to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn malformed_record_display_has_line() {
        let err = MalformedRecord {
            line: 12,
            reason: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn persist_error_io_display_has_path() {
        let err = PersistError::Io {
            path: PathBuf::from("/tmp/terminote.data"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/terminote.data"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_store_is_transparent() {
        let app_err: AppError = StoreError::Empty.into();
        assert_eq!(app_err.to_string(), "No notes stored");
    }
}
