//! Location autocomplete widget.
//!
//! A single-line text field with a dropdown of matching place names. Typing
//! two or more characters opens the list; ↓/↑ move the highlight (wrapping at
//! both ends), Enter or a click picks a suggestion, Esc or a press anywhere
//! else closes the list.
//!
//! The text itself belongs to the caller. Feed it in with
//! [`Model::set_value`] and apply the edits the widget proposes through its
//! change callback:
//!
//! ```rust
//! use location_autocomplete::autocomplete::{new, KeyOutcome};
//! use location_autocomplete::Component;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use std::sync::{Arc, Mutex};
//!
//! let changes = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&changes);
//!
//! let mut to = new().with_on_change(move |v| sink.lock().unwrap().push(v));
//! let _ = to.focus();
//! to.set_value("Mu");
//!
//! let down = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! let enter = KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE };
//! assert_eq!(to.handle_key(&down), KeyOutcome::Consumed);
//! assert_eq!(to.handle_key(&enter), KeyOutcome::Committed("Mumbai".into()));
//!
//! assert_eq!(changes.lock().unwrap().as_slice(), ["Mumbai".to_string()]);
//! assert!(!to.is_open());
//! ```

pub mod keymap;
pub mod layout;
pub mod model;
pub mod state;
pub mod style;
mod view;

#[cfg(test)]
mod tests;

pub use keymap::{default_key_map, KeyMap};
pub use layout::{HitTarget, Layout};
pub use model::{new, ChangeFunc, KeyOutcome, Model, Outcome, PointerOutcome};
pub use state::InteractionState;
pub use style::{Styles, MARKER};
