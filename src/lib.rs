//! Imgann - image dataset annotation files and a sequential browser
//!
//! This library persists a discovered set of image paths as an ordered
//! annotation file (CSV with absolute and relative paths), loads it back in
//! the same order, and walks it either once in batch mode or interactively
//! with saturating previous/next navigation.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod output;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use browse::{BrowseSession, Dataset};
pub use store::{AnnotationRecord, AnnotationStore, StoreError};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ImgannError {
    /// Annotation store error
    #[error("{0}")]
    Store(#[from] store::StoreError),
    /// Image discovery error
    #[error("Discovery error: {0}")]
    Discovery(#[from] discovery::DiscoveryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
