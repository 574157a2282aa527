//! Loaded image sequence and its one-pass iterator

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use super::session::BrowseSession;
use crate::store::{self, AnnotationStore};

/// Ordered image paths loaded from one annotation file
///
/// The sequence is read once and shared by every traversal over it: each
/// [`Dataset::iter`] and [`Dataset::session`] call hands out an independent
/// cursor borrowing the same paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    source: Option<PathBuf>,
    paths: Vec<String>,
}

impl Dataset {
    /// Load the dataset stored in the annotation file at `source`
    ///
    /// # Errors
    ///
    /// Propagates the `StoreError` from [`AnnotationStore::load`].
    pub fn load(source: impl AsRef<Path>) -> store::Result<Self> {
        let store = AnnotationStore::new(source.as_ref());
        let paths = store.load()?;
        Ok(Self {
            source: Some(store.path().to_path_buf()),
            paths,
        })
    }

    /// Wrap an in-memory sequence (no backing file)
    #[must_use]
    pub const fn from_paths(paths: Vec<String>) -> Self {
        Self {
            source: None,
            paths,
        }
    }

    /// Annotation file the dataset was loaded from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Start a one-pass traversal from the first image
    ///
    /// The iterator yields every path once and then reports completion. It
    /// never restarts; call `iter` again for another pass.
    #[must_use]
    pub fn iter(&self) -> ImagePaths<'_> {
        ImagePaths {
            remaining: self.paths.iter(),
        }
    }

    /// Start an interactive session positioned on the first image
    #[must_use]
    pub fn session(&self) -> BrowseSession<'_> {
        BrowseSession::new(&self.paths)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a str;
    type IntoIter = ImagePaths<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Batch-mode cursor over a [`Dataset`]
#[derive(Debug, Clone)]
pub struct ImagePaths<'a> {
    remaining: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for ImagePaths<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl ExactSizeIterator for ImagePaths<'_> {}

impl FusedIterator for ImagePaths<'_> {}
