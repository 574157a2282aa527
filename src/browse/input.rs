//! Key input for the interactive browser
//!
//! The browser reacts to single key presses. [`TerminalKeys`] reads them from
//! the terminal in raw mode; [`ScriptedKeys`] replays a fixed sequence so the
//! browser can be driven without a terminal.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::collections::VecDeque;
use std::io;

/// Source of key presses
pub trait KeyInput {
    /// Block until the next key press.
    ///
    /// Returns `None` once the source is exhausted.
    ///
    /// # Errors
    /// Returns an `io::Error` if the underlying device cannot be read.
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Key presses from the controlling terminal
///
/// Raw mode is enabled on construction and restored on drop.
#[derive(Debug)]
pub struct TerminalKeys {
    _raw: (),
}

impl TerminalKeys {
    /// Switch the terminal to raw mode
    ///
    /// # Errors
    /// Returns an `io::Error` if stdin is not a terminal or raw mode cannot
    /// be enabled.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _raw: () })
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("failed to restore terminal mode: {e}");
        }
    }
}

impl KeyInput for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            // Releases and repeats are reported on some platforms; only presses count
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(Some(key));
            }
        }
    }
}

/// Replays a fixed list of key presses, then reports exhaustion
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One `KeyCode::Char` press per character of `chars`
    #[must_use]
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars().map(|c| KeyEvent::from(KeyCode::Char(c))))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeyInput for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}
