//! Annotation row type

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths;

/// Column names of the mandatory header row, in file order
pub const HEADER: [&str; 2] = ["abs_path", "rel_path"];

/// One persisted image entry
///
/// Identity is positional: the index of a record in the annotation file is
/// its canonical order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// Fully-resolved path at time of writing
    #[serde(rename = "abs_path")]
    pub absolute_path: String,
    /// Path relative to the annotation file's directory at time of writing
    #[serde(rename = "rel_path")]
    pub relative_path: String,
}

impl AnnotationRecord {
    #[must_use]
    pub const fn new(absolute_path: String, relative_path: String) -> Self {
        Self {
            absolute_path,
            relative_path,
        }
    }

    /// Build the record for `path` as it will be written next to an
    /// annotation file living in `base_dir`.
    ///
    /// Both `cwd` and `base_dir` must be absolute.
    #[must_use]
    pub fn resolve(path: &Path, cwd: &Path, base_dir: &Path) -> Self {
        let absolute = paths::absolutize(cwd, path);
        let relative = paths::relative_to(&absolute, base_dir);
        Self::new(
            absolute.to_string_lossy().into_owned(),
            relative.to_string_lossy().into_owned(),
        )
    }
}
