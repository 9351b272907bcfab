#![warn(missing_docs)]

//! # location-autocomplete
//!
//! A place-name autocomplete field for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and styled with
//! lipgloss.
//!
//! ## Overview
//!
//! The crate provides one widget, [`Autocomplete`], made of a single-line
//! text field and a dropdown of matching place names:
//!
//! - **Prefix lookup**: two or more characters bring up at most eight places
//!   whose names start with the typed text, ignoring case, in table order.
//! - **Keyboard**: `↓`/`↑` move the highlight and wrap around, `enter` picks
//!   the highlighted place, `esc` closes the list.
//! - **Pointer**: a click on a row picks it, a press anywhere else closes the
//!   list.
//! - **Editing**: a caret with readline-style movement and deletion keys.
//! - **Controlled value**: the application owns the text. The widget proposes
//!   edits and choices through a change callback and never changes the value
//!   on its own.
//!
//! ## Usage
//!
//! ```rust
//! use location_autocomplete::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use std::sync::mpsc::{channel, Receiver};
//!
//! struct App {
//!     from: Autocomplete,
//!     changes: Receiver<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let (tx, rx) = channel();
//!         let mut from = autocomplete_new().with_on_change(move |v| {
//!             let _ = tx.send(v);
//!         });
//!         from.set_placeholder("Leaving from");
//!         let cmd = from.focus();
//!         (Self { from, changes: rx }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let cmd = self.from.update(msg);
//!         // The application owns the text: apply what the widget proposed.
//!         while let Ok(next) = self.changes.try_recv() {
//!             self.from.set_value(&next);
//!         }
//!         cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         self.from.view()
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`autocomplete`] | The widget, its interaction state, key map, layout and styles |
//! | [`suggest`] | The `SuggestionSource` trait and the static-table lookup |
//! | [`locations`] | The built-in city table |
//! | [`config`] | Lookup limits and the deduplication switch |
//! | [`field`] | Rendering and editing of the text field |
//! | [`listener`] | Registry of live outside-press listeners |
//! | [`key`] | Key bindings |

pub mod autocomplete;
pub mod config;
pub mod field;
pub mod key;
pub mod listener;
pub mod locations;
pub mod suggest;

use bubbletea_rs::Cmd;

/// Focus management shared by widgets.
///
/// A focused widget receives keyboard input and draws its cursor. Focusing
/// may return a command for the runtime to execute.
///
/// ```rust
/// use location_autocomplete::prelude::*;
///
/// let mut field = autocomplete_new();
/// assert!(!field.focused());
///
/// let _ = field.focus();
/// assert!(field.focused());
///
/// field.blur();
/// assert!(!field.focused());
/// ```
pub trait Component {
    /// Gives the widget keyboard focus.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the widget has keyboard focus.
    fn focused(&self) -> bool;
}

pub use autocomplete::{
    default_key_map as autocomplete_default_key_map, new as autocomplete_new,
    InteractionState, KeyMap as AutocompleteKeyMap, KeyOutcome, Model as Autocomplete, Outcome,
    PointerOutcome, Styles as AutocompleteStyles,
};
pub use config::{Config, ConfigError};
pub use field::TextField;
pub use key::{matches_binding, Binding, KeyMap, KeyPress};
pub use suggest::{suggest, StaticSource, SuggestionSource};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::autocomplete::{
        default_key_map as autocomplete_default_key_map, new as autocomplete_new,
        KeyMap as AutocompleteKeyMap, KeyOutcome, Model as Autocomplete, Outcome,
        PointerOutcome, Styles as AutocompleteStyles,
    };
    pub use crate::config::{Config, ConfigError};
    pub use crate::field::TextField;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::suggest::{suggest, StaticSource, SuggestionSource};
    pub use crate::Component;
}
