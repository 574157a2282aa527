//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and executes the operation against an annotation file.

pub mod browse;
pub mod list;
pub mod save;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use list::execute as list;
pub use save::execute as save;
