//! Browse command - interactive previous/next paging over an annotation file

use std::io;
use std::path::Path;

use crate::{
    ImgannError,
    browse::{BrowseController, BrowseOptions, Dataset, SystemViewer, TerminalKeys},
};

type Result<T> = std::result::Result<T, ImgannError>;

/// Execute the browse command
///
/// Loads the dataset once and drives a session from terminal key presses
/// until the user quits. The terminal is in raw mode only while browsing.
///
/// # Errors
/// Returns an error if the annotation file cannot be loaded, stdin is not a
/// terminal, or the terminal cannot be read or written.
pub fn execute(annotation: &Path, options: BrowseOptions, quiet: bool) -> Result<()> {
    let dataset = Dataset::load(annotation)?;

    if !quiet {
        println!(
            "Loaded {} image(s) from {}. Press 'h' for help, 'q' to quit.",
            dataset.len(),
            annotation.display()
        );
    }

    let controller = BrowseController::new(
        dataset.session(),
        TerminalKeys::new()?,
        io::stdout().lock(),
        SystemViewer,
        options,
    );
    let last = controller.run()?;

    tracing::debug!("browse ended at {last:?}");
    Ok(())
}
