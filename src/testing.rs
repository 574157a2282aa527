//! Testing utilities for imgann
//!
//! This module provides fixture helpers for writing tests: fake image files
//! and hand-written annotation files inside a test-owned directory.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::store::AnnotationStore;

/// Create a file at `path` with the provided content
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_test_file_with_content(path: impl AsRef<Path>, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    Ok(())
}

/// Create placeholder image files named `names` inside `dir`
///
/// Returns the created paths in the order given. The files only carry a
/// few marker bytes; nothing in the crate decodes image content.
///
/// # Panics
/// Panics if a file cannot be created.
pub fn touch_images(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            create_test_file_with_content(&path, b"\x89IMG").expect("Failed to create test image");
            path
        })
        .collect()
}

/// Write a raw annotation file, bypassing the store's writer
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_annotation(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    create_test_file_with_content(&path, content.as_bytes())
        .expect("Failed to write test annotation");
    path
}

/// A temporary directory holding images and a saved annotation file
///
/// Everything is removed when the value is dropped.
pub struct TestDataset {
    dir: TempDir,
    images: Vec<PathBuf>,
    store: AnnotationStore,
}

impl TestDataset {
    /// Create `names` as images and save them, in that order, to
    /// `annotation.csv` in the same directory
    ///
    /// # Panics
    /// Panics if the directory, images or annotation file cannot be created.
    pub fn new(names: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let images = touch_images(dir.path(), names);
        let store = AnnotationStore::new(dir.path().join("annotation.csv"));
        store.save(&images).expect("Failed to save test annotation");
        Self { dir, images, store }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    #[must_use]
    pub const fn store(&self) -> &AnnotationStore {
        &self.store
    }

    #[must_use]
    pub fn annotation_path(&self) -> &Path {
        self.store.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_images_creates_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = touch_images(dir.path(), &["b.jpg", "a.jpg"]);

        assert_eq!(paths, vec![dir.path().join("b.jpg"), dir.path().join("a.jpg")]);
        assert!(paths.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_write_annotation_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_annotation(dir.path(), "a.csv", "abs_path,rel_path\n");

        assert_eq!(fs::read_to_string(path).unwrap(), "abs_path,rel_path\n");
    }

    #[test]
    fn test_dataset_cleanup() {
        let dir;
        {
            let dataset = TestDataset::new(&["x.png"]);
            dir = dataset.dir().to_path_buf();
            assert!(dataset.annotation_path().exists());
            assert_eq!(dataset.images().len(), 1);
        }

        assert!(!dir.exists());
    }
}
