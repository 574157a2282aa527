//! List command - print every image of an annotation file once, in order

use colored::Colorize;
use std::io::Write;
use std::path::Path;

use crate::{ImgannError, browse::Dataset, config::PathFormat, output};

type Result<T> = std::result::Result<T, ImgannError>;

/// Counts gathered while listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub total: usize,
    /// Images whose file is gone (only counted with `check`)
    pub missing: usize,
}

/// Execute the list command
///
/// Walks the dataset with its one-pass iterator and writes one path per
/// line to `out`. With `check`, paths are colored by existence and a
/// summary of missing files follows unless `quiet`.
///
/// # Errors
/// Returns an error if the annotation file cannot be loaded or `out`
/// cannot be written.
pub fn execute<W: Write>(
    annotation: &Path,
    check: bool,
    path_format: PathFormat,
    quiet: bool,
    out: &mut W,
) -> Result<ListSummary> {
    let dataset = Dataset::load(annotation)?;
    let mut summary = ListSummary::default();

    if dataset.is_empty() {
        if !quiet {
            writeln!(out, "No images in {}.", annotation.display())?;
        }
        return Ok(summary);
    }

    for image in &dataset {
        let path = Path::new(image);
        summary.total += 1;

        if check {
            if !path.exists() {
                summary.missing += 1;
            }
            writeln!(out, "{}", output::colorize_path(path, path_format))?;
        } else {
            writeln!(out, "{}", output::format_path(path, path_format))?;
        }
    }

    if check && !quiet {
        if summary.missing == 0 {
            writeln!(out, "\nAll {} image(s) present.", summary.total)?;
        } else {
            writeln!(
                out,
                "\n{}",
                format!(
                    "{} of {} image(s) missing.",
                    summary.missing, summary.total
                )
                .red()
            )?;
        }
    }

    Ok(summary)
}
