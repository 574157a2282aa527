//! Unit tests for discovery error types

use super::DiscoveryError;
use std::error::Error;

#[test]
fn test_not_a_directory_display() {
    let error = DiscoveryError::NotADirectory {
        path: "photos/cats".into(),
    };
    assert_eq!(error.to_string(), "Not a directory: photos/cats");
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_pattern_helper() {
    let error = DiscoveryError::invalid_pattern("imgs/[", "invalid range pattern");

    match &error {
        DiscoveryError::InvalidPattern { pattern, reason } => {
            assert_eq!(pattern, "imgs/[");
            assert_eq!(reason, "invalid range pattern");
        }
        other => panic!("Expected InvalidPattern, got {other:?}"),
    }
    assert!(error.to_string().contains("Invalid scan pattern 'imgs/['"));
}

#[test]
fn test_wraps_into_crate_error() {
    let error: crate::ImgannError = DiscoveryError::NotADirectory {
        path: "x".into(),
    }
    .into();
    assert_eq!(error.to_string(), "Discovery error: Not a directory: x");
}
