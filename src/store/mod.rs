//! Annotation store - durable, ordered image path records
//!
//! An annotation file is a UTF-8 CSV with a fixed header row followed by one
//! row per discovered image:
//!
//! ```text
//! abs_path,rel_path
//! /data/cats/0001.jpg,cats/0001.jpg
//! /data/cats/0002.jpg,cats/0002.jpg
//! ```
//!
//! Row order is the canonical dataset order and survives a save/load cycle
//! unchanged. A save always replaces the whole file; there is no in-place
//! update and no atomic replace.
//!
//! Loading skips the first row without validating it and takes the first
//! column of every following row. Extra columns are tolerated, a blank data
//! line is malformed, and a blank first line counts as the header. Whether
//! the referenced images still exist is left to the consumer.

mod error;
pub mod paths;
mod record;

pub use error::StoreError;
pub use record::{AnnotationRecord, HEADER};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Annotation store result type
pub type Result<T> = std::result::Result<T, StoreError>;

/// Handle to one annotation file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationStore {
    path: PathBuf,
}

impl AnnotationStore {
    /// Create a handle for the annotation file at `path`
    ///
    /// Nothing is read or written until `save`/`load` is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the annotation file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `images` as the new content of the annotation file
    ///
    /// Each path is stored as its absolute form and relative to the directory
    /// holding the annotation file, in input order. The parent directory must
    /// already exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IoFailure` if the file cannot be created or
    /// written. After a failure the file content is unspecified.
    pub fn save<P: AsRef<Path>>(&self, images: &[P]) -> Result<()> {
        let cwd = std::env::current_dir().map_err(|e| StoreError::io(&self.path, e))?;
        let base_dir = paths::absolutize(&cwd, self.path.parent().unwrap_or(Path::new("")));

        let write_err = |e: csv::Error| StoreError::io(&self.path, e.into());

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(write_err)?;
        wtr.write_record(HEADER).map_err(write_err)?;

        for image in images {
            let record = AnnotationRecord::resolve(image.as_ref(), &cwd, &base_dir);
            wtr.serialize(&record).map_err(write_err)?;
        }

        wtr.flush().map_err(|e| StoreError::io(&self.path, e))?;
        tracing::debug!(
            "wrote {} annotation row(s) to {}",
            images.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the image paths back, in file order
    ///
    /// Returns the first column of every row after the header.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if the file does not exist
    /// - `StoreError::MalformedData` if the file has no rows at all, a data
    ///   row is a blank line, or the content is not valid UTF-8 CSV
    /// - `StoreError::IoFailure` for other read failures
    pub fn load(&self) -> Result<Vec<String>> {
        self.read_rows(|row| row[0].to_owned())
    }

    /// Read full records (both columns), in file order
    ///
    /// A row with a single column yields an empty `relative_path`.
    ///
    /// # Errors
    ///
    /// Same as [`AnnotationStore::load`].
    pub fn load_records(&self) -> Result<Vec<AnnotationRecord>> {
        self.read_rows(|row| {
            AnnotationRecord::new(
                row[0].to_owned(),
                row.get(1).unwrap_or_default().to_owned(),
            )
        })
    }

    fn read_rows<T>(&self, mut extract: impl FnMut(&csv::StringRecord) -> T) -> Result<Vec<T>> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                path: self.path.clone(),
            },
            _ => StoreError::io(&self.path, e),
        })?;

        // The CSV reader drops blank lines, so their positions are found first
        let blank_lines = scan_blank_lines(&bytes);
        let Some(&header_blank) = blank_lines.first() else {
            return Err(StoreError::malformed(&self.path, "missing header row"));
        };
        if let Some(offset) = blank_lines[1..].iter().position(|&blank| blank) {
            return Err(StoreError::malformed(
                &self.path,
                format!("row {} has no columns", offset + 2),
            ));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());
        let mut records = rdr.records();

        // Header row is skipped, not validated. A blank header never reaches
        // the reader.
        if !header_blank
            && let Some(header) = records.next()
        {
            header.map_err(|e| StoreError::from_read(&self.path, e))?;
        }

        let mut rows = Vec::new();
        for result in records {
            let record = result.map_err(|e| StoreError::from_read(&self.path, e))?;
            rows.push(extract(&record));
        }

        tracing::debug!(
            "read {} annotation row(s) from {}",
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }
}

/// One entry per line of `bytes`, `true` where the line is blank
///
/// Newlines inside quoted fields do not end a line. A final line without a
/// terminator counts only when it has content.
fn scan_blank_lines(bytes: &[u8]) -> Vec<bool> {
    let mut lines = Vec::new();
    let mut in_quotes = false;
    let mut line_len = 0usize;

    for &byte in bytes {
        match byte {
            b'"' => {
                in_quotes = !in_quotes;
                line_len += 1;
            }
            b'\n' if !in_quotes => {
                lines.push(line_len == 0);
                line_len = 0;
            }
            // CR of a CRLF terminator is not content
            b'\r' if !in_quotes => {}
            _ => line_len += 1,
        }
    }
    if line_len > 0 {
        lines.push(false);
    }
    lines
}

/// Save `images` to the annotation file at `destination`
///
/// # Errors
///
/// See [`AnnotationStore::save`].
pub fn save<P: AsRef<Path>>(images: &[P], destination: impl AsRef<Path>) -> Result<()> {
    AnnotationStore::new(destination.as_ref()).save(images)
}

/// Load the image paths stored at `source`
///
/// # Errors
///
/// See [`AnnotationStore::load`].
pub fn load(source: impl AsRef<Path>) -> Result<Vec<String>> {
    AnnotationStore::new(source.as_ref()).load()
}

/// Load both columns of the annotation file at `source`
///
/// # Errors
///
/// See [`AnnotationStore::load`].
pub fn load_records(source: impl AsRef<Path>) -> Result<Vec<AnnotationRecord>> {
    AnnotationStore::new(source.as_ref()).load_records()
}
