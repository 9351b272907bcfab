//! Key bindings for the autocomplete widget.

use crate::key::{self, Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Keys that drive the suggestion list while it is open.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Highlight the next suggestion.
    pub next: Binding,
    /// Highlight the previous suggestion.
    pub prev: Binding,
    /// Commit the highlighted suggestion.
    pub select: Binding,
    /// Close the list.
    pub dismiss: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// The default bindings: ↓/ctrl+n, ↑/ctrl+p, enter, esc.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        next: Binding::new(vec![
            KeyPress::from(KeyCode::Down),
            KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)),
        ])
        .with_help("↓/ctrl+n", "next"),
        prev: Binding::new(vec![
            KeyPress::from(KeyCode::Up),
            KeyPress::from((KeyCode::Char('p'), KeyModifiers::CONTROL)),
        ])
        .with_help("↑/ctrl+p", "previous"),
        select: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        dismiss: Binding::new(vec![KeyCode::Esc]).with_help("esc", "dismiss"),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next, &self.prev, &self.select, &self.dismiss]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.next, &self.prev], vec![&self.select, &self.dismiss]]
    }
}
