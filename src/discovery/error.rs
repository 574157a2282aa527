use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while enumerating images
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Root to scan is missing or not a directory
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Root cannot be expressed as a glob pattern
    #[error("Invalid scan pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DiscoveryError {
    #[must_use]
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
