//! Annotation store error types
//!
//! This module defines the errors surfaced by saving and loading annotation
//! files. Every failure is reported to the immediate caller; nothing is
//! retried internally.
//!
//! # Error Types
//!
//! - **`NotFound`**: The annotation file to load does not exist
//! - **`MalformedData`**: The file has no header row, a row without columns,
//!   or content the CSV reader rejects (e.g. invalid UTF-8)
//! - **`IoFailure`**: The file could not be opened, written or read
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use std::path::PathBuf;
use thiserror::Error;

/// Annotation store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Annotation file missing on load
    #[error("Annotation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Row shape or encoding violates the annotation format
    #[error("Malformed annotation file {}: {reason}", path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// Reading or writing the annotation file failed
    #[error("I/O failure on {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }

    /// Classify an error raised by the CSV reader.
    ///
    /// I/O problems stay I/O failures; everything else the reader rejects
    /// (bad UTF-8, broken quoting) is malformed data.
    #[must_use]
    pub fn from_read(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        if matches!(err.kind(), csv::ErrorKind::Io(_)) {
            Self::io(path, err.into())
        } else {
            Self::malformed(path, err.to_string())
        }
    }

    /// Path of the annotation file the error refers to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::MalformedData { path, .. }
            | Self::IoFailure { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
