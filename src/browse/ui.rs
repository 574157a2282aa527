//! Key-driven UI controller for the interactive browser
//!
//! This module bridges the `BrowseSession` cursor and a terminal. The
//! controller renders the current image, waits for one key press and
//! applies it to the session until the user quits or input ends.
//!
//! # Workflow
//!
//! ```text
//! ┌─→ Render current image (or "No more images")
//! │   ↓
//! │   Wait for key press
//! │   ├─ → / n / Enter → advance()   ── at end? report boundary
//! │   ├─ ← / p         → retreat()   ── at start? report boundary
//! │   ├─ Home / End    → first() / last()
//! │   ├─ o             → open in viewer
//! │   ├─ h             → help
//! │   └─ q / Esc       → exit (also when input ends)
//! ```
//!
//! Keys come from a [`KeyInput`] and images are opened through an
//! [`ImageViewer`], so the loop runs the same against a terminal or a
//! script. Lines end in `\r\n` because the terminal is in raw mode.

use crate::browse::actions::BrowseAction;
use crate::browse::input::KeyInput;
use crate::browse::session::BrowseSession;
use crate::config::PathFormat;
use crate::output;
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Placeholder shown when there is no current image
pub const NO_IMAGE: &str = "No more images";

/// Presentation collaborator that can display an image file
pub trait ImageViewer {
    /// Display the image at `path`.
    ///
    /// # Errors
    /// Returns an `io::Error` if the viewer cannot be launched.
    fn show(&mut self, path: &Path) -> io::Result<()>;
}

/// Opens images with the desktop's default application
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl ImageViewer for SystemViewer {
    fn show(&mut self, path: &Path) -> io::Result<()> {
        open::that_detached(path)
    }
}

/// Display settings for the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowseOptions {
    pub path_format: PathFormat,
    /// Open every image in the viewer as soon as it becomes current
    pub auto_open: bool,
}

/// UI controller - drives a session from key presses
pub struct BrowseController<'a, K, W, V> {
    session: BrowseSession<'a>,
    input: K,
    output: W,
    viewer: V,
    options: BrowseOptions,
}

impl<'a, K: KeyInput, W: Write, V: ImageViewer> BrowseController<'a, K, W, V> {
    #[must_use]
    pub const fn new(
        session: BrowseSession<'a>,
        input: K,
        output: W,
        viewer: V,
        options: BrowseOptions,
    ) -> Self {
        Self {
            session,
            input,
            output,
            viewer,
            options,
        }
    }

    /// Run the browser until the user quits or input is exhausted
    ///
    /// Returns the index the session ended on (`None` for an empty dataset).
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if reading keys or writing output fails.
    /// Viewer failures are reported to the user and do not end the loop.
    pub fn run(mut self) -> io::Result<Option<usize>> {
        self.show_current()?;

        while let Some(key) = self.input.next_key()? {
            let Some(action) = BrowseAction::from_key(&key) else {
                self.line("Unbound key (press 'h' for help)".dimmed())?;
                self.output.flush()?;
                continue;
            };
            tracing::debug!("browse action: {action}");

            match action {
                BrowseAction::Quit => break,
                BrowseAction::Help => self.print_help()?,
                BrowseAction::Open => self.open_current()?,
                BrowseAction::Next => {
                    let moved = self.session.advance();
                    self.after_move(moved, "Already at the last image")?;
                }
                BrowseAction::Previous => {
                    let moved = self.session.retreat();
                    self.after_move(moved, "Already at the first image")?;
                }
                BrowseAction::First => {
                    let moved = self.session.first();
                    self.after_move(moved, "Already at the first image")?;
                }
                BrowseAction::Last => {
                    let moved = self.session.last();
                    self.after_move(moved, "Already at the last image")?;
                }
            }
            self.output.flush()?;
        }

        self.output.flush()?;
        Ok(self.session.position())
    }

    fn line(&mut self, text: impl fmt::Display) -> io::Result<()> {
        write!(self.output, "{text}\r\n")
    }

    fn after_move(&mut self, moved: bool, boundary_message: &str) -> io::Result<()> {
        if moved {
            self.show_current()
        } else if self.session.is_empty() {
            self.line(NO_IMAGE)
        } else {
            self.line(boundary_message.yellow())
        }
    }

    fn show_current(&mut self) -> io::Result<()> {
        let (Some(current), Some(index)) = (self.session.current(), self.session.position())
        else {
            self.line(NO_IMAGE)?;
            return self.output.flush();
        };

        let path = Path::new(current);
        let label = output::position_label(index, self.session.len());
        let shown = output::colorize_path(path, self.options.path_format);
        self.line(format_args!("{label} {shown}"))?;
        self.output.flush()?;

        if self.options.auto_open {
            self.launch_viewer(path)?;
        }
        Ok(())
    }

    fn open_current(&mut self) -> io::Result<()> {
        match self.session.current() {
            Some(current) => self.launch_viewer(Path::new(current)),
            None => self.line(NO_IMAGE),
        }
    }

    fn launch_viewer(&mut self, path: &Path) -> io::Result<()> {
        if let Err(e) = self.viewer.show(path) {
            tracing::warn!("failed to open {}: {e}", path.display());
            let mark = "❌".red();
            self.line(format_args!("{mark} Could not open {}: {e}", path.display()))?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        self.line("Commands:")?;
        for (keys, description) in BrowseAction::help_entries() {
            self.line(format_args!("  {keys:<24} {description}"))?;
        }
        Ok(())
    }
}
