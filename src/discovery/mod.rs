//! Image discovery - producing candidate paths for a new annotation file
//!
//! Discovery is the step in front of the annotation store: given a query
//! term and a result cap it returns image paths. The store does not care
//! where they come from; a web crawler that downloads into a directory and
//! a plain directory scan satisfy the same [`ImageDiscovery`] contract.

mod error;
mod local;

pub use error::DiscoveryError;
pub use local::DirectoryDiscovery;

use std::path::PathBuf;

/// Source of image paths for an annotation file
pub trait ImageDiscovery {
    /// Return up to `max` image paths matching `query`, in a stable order.
    ///
    /// `max == None` means no cap. An empty query matches every image.
    ///
    /// # Errors
    /// Returns `DiscoveryError` if the source cannot be enumerated.
    fn discover(&self, query: &str, max: Option<usize>) -> Result<Vec<PathBuf>, DiscoveryError>;
}
