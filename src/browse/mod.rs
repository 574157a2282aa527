//! Browse module - traversal over a loaded dataset
//!
//! Two ways to walk the same loaded image sequence:
//!
//! - **Batch**: [`Dataset::iter`] yields every path once, in order, and then
//!   signals completion. It does not restart.
//! - **Interactive**: [`BrowseSession`] is a cursor with `current`,
//!   `advance` and `retreat` that clamps at both ends instead of failing.
//!
//! # Architecture
//!
//! - `dataset`: The loaded sequence and the one-pass iterator
//! - `session`: Saturating bidirectional cursor
//! - `actions`: Key bindings understood by the interactive browser
//! - `input`: Key press sources (terminal raw mode or a fixed script)
//! - `ui`: Key-driven controller connecting a session to a terminal
//!
//! Cursors borrow the dataset, so any number of traversals can run over one
//! load without sharing position.

pub mod actions;
pub mod dataset;
pub mod input;
pub mod session;
pub mod ui;

pub use actions::BrowseAction;
pub use dataset::{Dataset, ImagePaths};
pub use input::{KeyInput, ScriptedKeys, TerminalKeys};
pub use session::{BrowseSession, SessionState};
pub use ui::{BrowseController, BrowseOptions, ImageViewer, SystemViewer, NO_IMAGE};
