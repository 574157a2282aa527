//! Save command - discover images and write a new annotation file

use dialoguer::Confirm;
use std::path::Path;

use crate::{
    ImgannError,
    config::ImgannConfig,
    discovery::{DirectoryDiscovery, ImageDiscovery},
    store::AnnotationStore,
};

type Result<T> = std::result::Result<T, ImgannError>;

/// Parameters for one save run
#[derive(Debug, Clone)]
pub struct SaveRequest<'a> {
    /// Directory to scan
    pub dir: &'a Path,
    /// Annotation file to write
    pub output: &'a Path,
    pub query: &'a str,
    pub max: Option<usize>,
    /// Scan subdirectories (in addition to the configured default)
    pub recursive: bool,
    /// Replace an existing file without confirmation
    pub yes: bool,
}

/// Execute the save command
///
/// Returns the number of images written, or `None` when the user declined
/// to replace an existing annotation file.
///
/// # Errors
/// Returns an error if discovery fails, the confirmation prompt cannot be
/// shown, or the annotation file cannot be written.
pub fn execute(config: &ImgannConfig, request: &SaveRequest<'_>, quiet: bool) -> Result<Option<usize>> {
    let discovery = DirectoryDiscovery::new(request.dir, &config.extensions)
        .recursive(request.recursive || config.recursive);
    let images = discovery.discover(request.query, request.max)?;

    let store = AnnotationStore::new(request.output);
    if store.exists() && !request.yes && !quiet {
        let prompt = format!(
            "Replace existing annotation file '{}'?",
            store.path().display()
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ImgannError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("Operation cancelled.");
            return Ok(None);
        }
    }

    store.save(&images)?;

    if !quiet {
        if images.is_empty() {
            println!(
                "No images found in {}; wrote an empty annotation file.",
                request.dir.display()
            );
        } else {
            println!(
                "✓ Saved {} image(s) to {}",
                images.len(),
                store.path().display()
            );
        }
    }

    Ok(Some(images.len()))
}
