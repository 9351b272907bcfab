//! The autocomplete widget model.

use super::keymap::{default_key_map, KeyMap};
use super::layout::{HitTarget, Layout};
use super::state::InteractionState;
use super::style::Styles;
use crate::config::{Config, ConfigError, MIN_QUERY_LEN};
use crate::field::{Edit, TextField};
use crate::listener::ListenerGuard;
use crate::suggest::{StaticSource, SuggestionSource};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg};
use crossterm::event::{MouseButton, MouseEventKind};

/// Callback that receives the next value of the field.
///
/// It is called for every keystroke that edits the text and for every
/// committed suggestion. `Send` is required by the bubbletea-rs `Model`
/// bound.
pub type ChangeFunc = Box<dyn FnMut(String) + Send>;

/// What the widget did with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A list key was used for navigation. The host must not act on it.
    Consumed,
    /// A suggestion was committed. The host must not act on the key.
    Committed(String),
    /// The list was closed. The key is still available to the host.
    Dismissed,
    /// The key edited the text; the proposed value went to the callback.
    Edited(String),
    /// The key moved the caret without changing the text.
    Moved,
    /// The widget did nothing with the key.
    Ignored,
}

impl KeyOutcome {
    /// Whether the key's default action (form submit, focus change, ...)
    /// must be suppressed by the host.
    pub fn is_default_prevented(&self) -> bool {
        matches!(self, KeyOutcome::Consumed | KeyOutcome::Committed(_))
    }
}

/// What the widget did with a pointer press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A suggestion row was pressed and committed.
    Committed(String),
    /// The press landed outside the widget and closed the list.
    Dismissed,
    /// The press landed on the input and focused it.
    Focused,
    /// Nothing changed.
    Ignored,
}

/// What the last message passed to [`Model::update`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was a key press.
    Key(KeyOutcome),
    /// The message was a pointer press.
    Pointer(PointerOutcome),
}

impl Outcome {
    /// Whether the host must suppress the default action of the input.
    pub fn is_default_prevented(&self) -> bool {
        match self {
            Outcome::Key(outcome) => outcome.is_default_prevented(),
            Outcome::Pointer(_) => false,
        }
    }
}

/// Values owned by the caller. The widget reads them and never writes them.
#[derive(Debug, Clone, Default)]
struct Props {
    value: String,
}

/// A location field with a dropdown of matching place names.
///
/// The text is a controlled value: the caller owns it, passes it in with
/// [`Model::set_value`], and learns about edits through the change callback.
/// The widget owns only its [`InteractionState`].
///
/// # Examples
///
/// ```rust
/// use location_autocomplete::autocomplete::new;
/// use location_autocomplete::Component;
///
/// let mut from = new();
/// from.set_placeholder("Leaving from");
/// let _ = from.focus();
/// from.set_value("Pu");
///
/// assert!(from.is_open());
/// assert_eq!(from.suggestions()[0], "Pune");
/// ```
pub struct Model<S = StaticSource> {
    props: Props,
    state: InteractionState,
    source: S,
    min_query_len: usize,

    /// Presentation attributes passed through to the text field.
    pub field: TextField,
    /// Key bindings for list navigation.
    pub key_map: KeyMap,
    /// Styles of the suggestion rows.
    pub styles: Styles,

    on_change: Option<ChangeFunc>,
    // Applies proposed values directly instead of waiting for the caller.
    owns_value: bool,
    focus: bool,
    // Character index into the value.
    caret: usize,
    // The last proposed edit, until the caller echoes it back.
    pending_edit: Option<Edit>,
    last_outcome: Option<Outcome>,
    origin: Option<(u16, u16)>,
    // The last committed choice, until the caller echoes it back.
    pending_commit: Option<String>,
    listener: Option<ListenerGuard>,
}

/// Creates a widget over the built-in city table.
pub fn new() -> Model {
    Model::with_source(StaticSource::default())
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model<StaticSource> {
    /// Creates a widget over the built-in city table with `config`.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        let source = StaticSource::with_config(config)?;
        Ok(Model::with_source(source).with_min_query_len(config.min_query_len))
    }
}

impl<S: SuggestionSource> Model<S> {
    /// Creates a widget that takes suggestions from `source`.
    ///
    /// The widget registers its outside-press listener here and removes it
    /// when dropped or [unmounted](Model::unmount).
    pub fn with_source(source: S) -> Self {
        Self {
            props: Props::default(),
            state: InteractionState::new(),
            source,
            min_query_len: MIN_QUERY_LEN,
            field: TextField::default(),
            key_map: default_key_map(),
            styles: Styles::default(),
            on_change: None,
            owns_value: false,
            focus: false,
            caret: 0,
            pending_edit: None,
            last_outcome: None,
            origin: None,
            pending_commit: None,
            listener: Some(ListenerGuard::register()),
        }
    }

    /// Sets the minimum query length that opens the list.
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    /// Makes the widget own its text: every proposed value is applied at
    /// once, after the change callback has seen it. Use this when no caller
    /// keeps the value, for example when the widget runs as the whole
    /// program.
    pub fn owning_value(mut self) -> Self {
        self.owns_value = true;
        self
    }

    /// Sets the change callback.
    pub fn with_on_change(mut self, f: impl FnMut(String) + Send + 'static) -> Self {
        self.set_on_change(f);
        self
    }

    /// Sets the change callback.
    pub fn set_on_change(&mut self, f: impl FnMut(String) + Send + 'static) {
        self.on_change = Some(Box::new(f));
    }

    /// Sets the placeholder shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.field.placeholder = placeholder.into();
    }

    /// Tells the widget where its input row is drawn, in terminal cells.
    /// Pointer presses are ignored until this is known.
    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = Some((x, y));
    }

    /// Forgets the screen position, for example when the widget is hidden.
    pub fn clear_origin(&mut self) {
        self.origin = None;
    }

    /// The current value, as last set by the caller.
    pub fn value(&self) -> &str {
        &self.props.value
    }

    /// Caret position in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// What the last message passed to [`Model::update`] did, if it was a
    /// key or pointer press. Hosts that route everything through `update`
    /// read this to decide whether to suppress the key's default action.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// The interaction state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted()
    }

    /// Suggestions for the current value.
    pub fn suggestions(&self) -> &[String] {
        self.state.suggestions()
    }

    /// Whether the widget is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.listener.as_ref().is_some_and(ListenerGuard::is_active)
    }

    /// Id of the outside-press listener, while mounted.
    pub fn listener_id(&self) -> Option<usize> {
        self.listener.as_ref().map(ListenerGuard::id)
    }

    /// Tears the widget down: removes its outside-press listener and closes
    /// the list. An unmounted widget ignores key and pointer input.
    pub fn unmount(&mut self) {
        if self.listener.take().is_some() {
            self.state.dismiss();
            self.focus = false;
        }
    }

    /// Feeds a new value from the caller.
    ///
    /// This is the "value changed" hook: suggestions are recomputed, the
    /// list opens when there are any, and the highlight is cleared. Setting
    /// the value it already has does nothing. The caller echoing back a
    /// value the widget just committed recomputes without reopening.
    ///
    /// An unmounted widget stores the value but no longer looks anything up.
    pub fn set_value(&mut self, value: &str) {
        if value == self.props.value {
            return;
        }
        self.props.value = value.to_string();
        self.caret = match self.pending_edit.take() {
            Some(edit) if edit.value == value => edit.caret,
            _ => value.chars().count(),
        };
        if !self.is_mounted() {
            return;
        }
        self.state
            .query_changed(&self.props.value, &self.source, self.min_query_len);

        if self.pending_commit.take().as_deref() == Some(value) {
            self.state.close();
        }
    }

    /// Resolves a key press.
    ///
    /// List keys are only live while the list is open. Everything else goes
    /// to the text field, whose proposed value is handed to the change
    /// callback.
    pub fn handle_key(&mut self, key: &KeyMsg) -> KeyOutcome {
        if !self.focus || !self.is_mounted() {
            return KeyOutcome::Ignored;
        }

        if self.state.is_open() {
            if self.key_map.next.matches(key) {
                self.state.highlight_next();
                return KeyOutcome::Consumed;
            }
            if self.key_map.prev.matches(key) {
                self.state.highlight_prev();
                return KeyOutcome::Consumed;
            }
            if self.key_map.select.matches(key) {
                return match self.state.highlighted() {
                    Some(index) => self
                        .commit(index)
                        .map_or(KeyOutcome::Consumed, KeyOutcome::Committed),
                    None => KeyOutcome::Consumed,
                };
            }
            if self.key_map.dismiss.matches(key) {
                self.state.dismiss();
                tracing::debug!("suggestions dismissed");
                return KeyOutcome::Dismissed;
            }
        }

        match self.field.edit(&self.props.value, self.caret, key) {
            Some(edit) if edit.value == self.props.value => {
                self.caret = edit.caret;
                KeyOutcome::Moved
            }
            Some(edit) => {
                let next = edit.value.clone();
                self.pending_edit = Some(edit);
                self.emit_change(next.clone());
                KeyOutcome::Edited(next)
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Resolves a pointer press at terminal cell (`col`, `row`).
    pub fn handle_press(&mut self, col: u16, row: u16, button: MouseButton) -> PointerOutcome {
        if !self.is_mounted() {
            return PointerOutcome::Ignored;
        }
        // Without a known position nothing counts as outside.
        let Some(layout) = self.layout() else {
            return PointerOutcome::Ignored;
        };

        match layout.hit_test(col, row) {
            HitTarget::Suggestion(index) if button == MouseButton::Left => self
                .commit(index)
                .map_or(PointerOutcome::Ignored, PointerOutcome::Committed),
            HitTarget::Suggestion(_) => PointerOutcome::Ignored,
            HitTarget::Input if !self.focus => {
                self.focus_gained();
                PointerOutcome::Focused
            }
            HitTarget::Input => PointerOutcome::Ignored,
            HitTarget::Outside if self.state.is_open() => {
                self.state.close();
                tracing::debug!(col, row, "press outside closed suggestions");
                PointerOutcome::Dismissed
            }
            HitTarget::Outside => PointerOutcome::Ignored,
        }
    }

    /// Screen geometry, if the origin is known.
    pub fn layout(&self) -> Option<Layout> {
        let (x, y) = self.origin?;
        let list_rows = if self.state.is_visible() {
            self.state.suggestions().len()
        } else {
            0
        };
        Some(Layout {
            x,
            y,
            input_width: self.field.display_width(&self.props.value),
            list_width: self.list_width(),
            list_rows,
        })
    }

    /// Handles bubbletea key and mouse messages.
    ///
    /// The result is kept in [`Model::last_outcome`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.last_outcome = if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            Some(Outcome::Key(self.handle_key(key)))
        } else if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            match mouse.button {
                MouseEventKind::Down(button) => {
                    Some(Outcome::Pointer(self.handle_press(mouse.x, mouse.y, button)))
                }
                _ => None,
            }
        } else {
            None
        };
        None
    }

    fn focus_gained(&mut self) {
        self.focus = true;
        let was_open = self.state.is_open();
        if self.state.focus_gained(&self.props.value, self.min_query_len) && !was_open {
            tracing::debug!("focus reopened suggestions");
        }
    }

    fn commit(&mut self, index: usize) -> Option<String> {
        let choice = self.state.commit(index)?;
        tracing::debug!(choice = %choice, index, "suggestion committed");
        // A value that already matches is never echoed back.
        if choice != self.props.value {
            self.pending_commit = Some(choice.clone());
        }
        self.emit_change(choice.clone());
        self.focus = false;
        Some(choice)
    }

    fn emit_change(&mut self, next: String) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next.clone());
        }
        if self.owns_value {
            self.set_value(&next);
        }
    }
}

impl<S: SuggestionSource> crate::Component for Model<S> {
    fn focus(&mut self) -> Option<Cmd> {
        if self.is_mounted() {
            self.focus_gained();
        }
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Runs the widget as a whole program: it owns its value and starts
/// focused.
impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new().owning_value();
        let cmd = crate::Component::focus(&mut model);
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
