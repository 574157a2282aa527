//! Directory scan discovery
//!
//! Enumerates image files below a root directory with `glob`. Results come
//! back in the order `glob` produces them (alphabetical within a
//! directory), which keeps repeated scans of an unchanged tree identical.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::{DiscoveryError, ImageDiscovery};

/// Discovers images already present in a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDiscovery {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
}

impl DirectoryDiscovery {
    /// Scan `root` (non-recursively) for files with the given extensions
    ///
    /// Extensions are compared case-insensitively and may be given with or
    /// without a leading dot.
    #[must_use]
    pub fn new<S: AsRef<str>>(root: impl Into<PathBuf>, extensions: &[S]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions
                .iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
            recursive: false,
        }
    }

    /// Include subdirectories in the scan
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pattern(&self) -> Result<String, DiscoveryError> {
        let root = self.root.to_str().ok_or_else(|| {
            DiscoveryError::invalid_pattern(
                &self.root.to_string_lossy(),
                "directory name is not valid UTF-8",
            )
        })?;
        let escaped = Pattern::escape(root);
        let tail = if self.recursive { "**/*" } else { "*" };
        Ok(format!("{escaped}/{tail}"))
    }

    fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
    }
}

fn name_matches(path: &Path, query: &str) -> bool {
    query.is_empty()
        || path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().to_lowercase().contains(query))
}

impl ImageDiscovery for DirectoryDiscovery {
    fn discover(&self, query: &str, max: Option<usize>) -> Result<Vec<PathBuf>, DiscoveryError> {
        if !self.root.is_dir() {
            return Err(DiscoveryError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let pattern = self.pattern()?;
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let entries = glob::glob_with(&pattern, options)
            .map_err(|e| DiscoveryError::invalid_pattern(&pattern, e.msg))?;

        let query = query.trim().to_lowercase();
        let limit = max.unwrap_or(usize::MAX);

        let mut found = Vec::new();
        for entry in entries {
            if found.len() >= limit {
                break;
            }
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            if path.is_file() && self.is_image(&path) && name_matches(&path, &query) {
                found.push(path);
            }
        }

        tracing::debug!(
            "discovered {} image(s) under {}",
            found.len(),
            self.root.display()
        );
        Ok(found)
    }
}
