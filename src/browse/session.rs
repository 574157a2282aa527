//! Interactive browse session
//!
//! A `BrowseSession` is a cursor over a borrowed image sequence with
//! saturating bounds: moving past either end leaves the cursor where it is
//! instead of wrapping or failing, so a UI can forward every button press
//! without checking the edges first.
//!
//! # States
//!
//! ```text
//! Empty ──────────────── advance / retreat ──→ Empty
//!
//! Positioned(i) ── advance, i < len-1 ──→ Positioned(i+1)
//! Positioned(len-1) ── advance ─────────→ Positioned(len-1)
//! Positioned(i) ── retreat, i > 0 ──────→ Positioned(i-1)
//! Positioned(0) ── retreat ─────────────→ Positioned(0)
//! ```
//!
//! There is no terminal state. For a single pass that ends with a completion
//! signal use [`Dataset::iter`](super::Dataset::iter) instead.

/// Cursor state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The sequence has no items
    Empty,

    /// Pointing at the item with this index
    Positioned(usize),
}

/// Saturating bidirectional cursor over an ordered sequence of paths
#[derive(Debug, Clone)]
pub struct BrowseSession<'a> {
    items: &'a [String],
    state: SessionState,
}

impl<'a> BrowseSession<'a> {
    /// Create a session positioned on the first item, or `Empty`
    #[must_use]
    pub const fn new(items: &'a [String]) -> Self {
        let state = if items.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Positioned(0)
        };
        Self { items, state }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Current item, or `None` when the session is empty
    #[must_use]
    pub fn current(&self) -> Option<&'a str> {
        match self.state {
            SessionState::Empty => None,
            SessionState::Positioned(i) => self.items.get(i).map(String::as_str),
        }
    }

    /// Move to the next item
    ///
    /// Returns `false` (and stays put) at the last item or when empty.
    pub fn advance(&mut self) -> bool {
        match self.state {
            SessionState::Positioned(i) if i + 1 < self.items.len() => {
                self.state = SessionState::Positioned(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Move to the previous item
    ///
    /// Returns `false` (and stays put) at the first item or when empty.
    pub fn retreat(&mut self) -> bool {
        match self.state {
            SessionState::Positioned(i) if i > 0 => {
                self.state = SessionState::Positioned(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to the first item. Returns whether the cursor moved.
    pub fn first(&mut self) -> bool {
        self.jump(0)
    }

    /// Jump to the last item. Returns whether the cursor moved.
    pub fn last(&mut self) -> bool {
        self.jump(self.items.len().saturating_sub(1))
    }

    fn jump(&mut self, target: usize) -> bool {
        match self.state {
            SessionState::Positioned(i) if i != target => {
                self.state = SessionState::Positioned(target);
                true
            }
            _ => false,
        }
    }

    /// Index of the current item
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self.state {
            SessionState::Empty => None,
            SessionState::Positioned(i) => Some(i),
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn at_start(&self) -> bool {
        matches!(self.state, SessionState::Positioned(0))
    }

    #[must_use]
    pub const fn at_end(&self) -> bool {
        match self.state {
            SessionState::Positioned(i) => i + 1 == self.items.len(),
            SessionState::Empty => false,
        }
    }
}
