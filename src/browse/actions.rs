//! Browser commands and their key bindings
//!
//! Every command is a single key press. Arrow keys page through the images,
//! letters cover the rest; letters are matched case-insensitively.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// Command issued by the user while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Next,
    Previous,
    First,
    Last,
    /// Open the current image in the system viewer
    Open,
    Help,
    Quit,
}

impl BrowseAction {
    /// Every action, in help-screen order
    pub const ALL: [Self; 7] = [
        Self::Next,
        Self::Previous,
        Self::First,
        Self::Last,
        Self::Open,
        Self::Help,
        Self::Quit,
    ];

    /// Key labels bound to this action, as shown on the help screen
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Next => &["→", "↓", "n", "Space", "Enter"],
            Self::Previous => &["←", "↑", "p", "Backspace"],
            Self::First => &["f", "Home"],
            Self::Last => &["l", "End"],
            Self::Open => &["o"],
            Self::Help => &["h", "?"],
            Self::Quit => &["q", "Esc", "Ctrl-C"],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::First => "first",
            Self::Last => "last",
            Self::Open => "open",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Next => "Next image",
            Self::Previous => "Previous image",
            Self::First => "Jump to first image",
            Self::Last => "Jump to last image",
            Self::Open => "Open current image in default viewer",
            Self::Help => "Show this help",
            Self::Quit => "Quit",
        }
    }

    /// `(keys, description)` pairs for the help screen
    #[must_use]
    pub fn help_entries() -> Vec<(String, &'static str)> {
        Self::ALL
            .iter()
            .map(|action| (action.keys().join(" "), action.description()))
            .collect()
    }

    /// Map a key press to an action, `None` for unbound keys
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'C' | 'd' | 'D')).then_some(Self::Quit);
        }

        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        let action = match code {
            KeyCode::Right | KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ' | 'n') => {
                Self::Next
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Backspace | KeyCode::Char('p') => {
                Self::Previous
            }
            KeyCode::Home | KeyCode::Char('f') => Self::First,
            KeyCode::End | KeyCode::Char('l') => Self::Last,
            KeyCode::Char('o') => Self::Open,
            KeyCode::Char('h' | '?') => Self::Help,
            KeyCode::Esc | KeyCode::Char('q') => Self::Quit,
            _ => return None,
        };
        Some(action)
    }
}

impl fmt::Display for BrowseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrow_keys_navigate() {
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Right)), Some(BrowseAction::Next));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Left)), Some(BrowseAction::Previous));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Home)), Some(BrowseAction::First));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::End)), Some(BrowseAction::Last));
    }

    #[test]
    fn test_letters_are_case_insensitive() {
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('n'))), Some(BrowseAction::Next));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('N'))), Some(BrowseAction::Next));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('P'))), Some(BrowseAction::Previous));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('?'))), Some(BrowseAction::Help));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('o'))), Some(BrowseAction::Open));
    }

    #[test]
    fn test_enter_and_space_mean_next() {
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Enter)), Some(BrowseAction::Next));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char(' '))), Some(BrowseAction::Next));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('q'))), Some(BrowseAction::Quit));
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Esc)), Some(BrowseAction::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(BrowseAction::from_key(&ctrl_c), Some(BrowseAction::Quit));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Char('z'))), None);
        assert_eq!(BrowseAction::from_key(&key(KeyCode::Tab)), None);
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(BrowseAction::from_key(&ctrl_n), None);
    }

    #[test]
    fn test_key_labels_do_not_overlap() {
        let mut seen = std::collections::HashSet::new();
        for action in BrowseAction::ALL {
            for label in action.keys() {
                assert!(seen.insert(*label), "duplicate key binding: {label}");
            }
        }
    }

    #[test]
    fn test_help_entries_cover_all_actions() {
        let entries = BrowseAction::help_entries();
        assert_eq!(entries.len(), BrowseAction::ALL.len());
        assert_eq!(entries[0].1, "Next image");
        assert!(entries[0].0.contains("Enter"));
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(BrowseAction::Previous.to_string(), "previous");
        assert_eq!(BrowseAction::Quit.to_string(), "quit");
    }
}
