//! The text field under the suggestion list.
//!
//! [`TextField`] holds only presentation attributes and key bindings. It
//! never stores the text: [`TextField::view`] renders a value handed in by
//! the caller, and [`TextField::edit`] proposes the next value and caret for
//! a keystroke without applying them. Whoever owns the value decides whether
//! to accept it.
//!
//! The caret is a character index into the value.

use crate::key::{self, Binding, KeyPress};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Key bindings for caret movement and deletion.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the caret one character right.
    pub character_forward: Binding,
    /// Move the caret one character left.
    pub character_backward: Binding,
    /// Move the caret one word right.
    pub word_forward: Binding,
    /// Move the caret one word left.
    pub word_backward: Binding,
    /// Delete the word before the caret.
    pub delete_word_backward: Binding,
    /// Delete the word after the caret.
    pub delete_word_forward: Binding,
    /// Delete from the caret to the end.
    pub delete_after_cursor: Binding,
    /// Delete from the start to the caret.
    pub delete_before_cursor: Binding,
    /// Delete one character before the caret.
    pub delete_character_backward: Binding,
    /// Delete one character after the caret.
    pub delete_character_forward: Binding,
    /// Move the caret to the start.
    pub line_start: Binding,
    /// Move the caret to the end.
    pub line_end: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

fn ctrl(c: char) -> KeyPress {
    KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn alt(code: KeyCode) -> KeyPress {
    KeyPress::from((code, KeyModifiers::ALT))
}

/// The default readline-style bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: Binding::new(vec![KeyPress::from(KeyCode::Right), ctrl('f')])
            .with_help("→/ctrl+f", "forward"),
        character_backward: Binding::new(vec![KeyPress::from(KeyCode::Left), ctrl('b')])
            .with_help("←/ctrl+b", "back"),
        word_forward: Binding::new(vec![
            alt(KeyCode::Right),
            KeyPress::from((KeyCode::Right, KeyModifiers::CONTROL)),
            alt(KeyCode::Char('f')),
        ])
        .with_help("alt+→", "word forward"),
        word_backward: Binding::new(vec![
            alt(KeyCode::Left),
            KeyPress::from((KeyCode::Left, KeyModifiers::CONTROL)),
            alt(KeyCode::Char('b')),
        ])
        .with_help("alt+←", "word back"),
        delete_word_backward: Binding::new(vec![alt(KeyCode::Backspace), ctrl('w')])
            .with_help("ctrl+w", "delete word"),
        delete_word_forward: Binding::new(vec![alt(KeyCode::Delete), alt(KeyCode::Char('d'))])
            .with_help("alt+d", "delete next word"),
        delete_after_cursor: Binding::new(vec![ctrl('k')]).with_help("ctrl+k", "delete to end"),
        delete_before_cursor: Binding::new(vec![ctrl('u')])
            .with_help("ctrl+u", "delete to start"),
        delete_character_backward: Binding::new(vec![KeyPress::from(KeyCode::Backspace), ctrl('h')])
            .with_help("backspace", "delete"),
        delete_character_forward: Binding::new(vec![KeyPress::from(KeyCode::Delete), ctrl('d')])
            .with_help("del", "delete next"),
        line_start: Binding::new(vec![KeyPress::from(KeyCode::Home), ctrl('a')])
            .with_help("home", "start"),
        line_end: Binding::new(vec![KeyPress::from(KeyCode::End), ctrl('e')])
            .with_help("end", "end"),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.character_backward,
            &self.character_forward,
            &self.delete_character_backward,
            &self.delete_word_backward,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.word_backward,
                &self.word_forward,
                &self.line_start,
                &self.line_end,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.delete_word_backward,
                &self.delete_word_forward,
                &self.delete_before_cursor,
                &self.delete_after_cursor,
            ],
        ]
    }
}

/// A proposed value and caret position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The text after the keystroke.
    pub value: String,
    /// The caret after the keystroke, in characters.
    pub caret: usize,
}

/// Presentation attributes of a single-line text field.
#[derive(Debug, Clone)]
pub struct TextField {
    /// Text drawn before the value.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the value.
    pub text_style: Style,
    /// Style for the cursor cell.
    pub cursor_style: Style,
    /// Minimum number of cells the value area takes. 0 means fit to content.
    pub width: usize,
    /// Maximum number of characters accepted from typing. 0 means no limit.
    pub char_limit: usize,
    /// Caret movement and deletion keys.
    pub key_map: KeyMap,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            prompt: "📍 ".to_string(),
            prompt_style: Style::new().foreground(Color::from("240")),
            placeholder: String::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            text_style: Style::new(),
            cursor_style: Style::new().reverse(true),
            width: 0,
            char_limit: 0,
            key_map: default_key_map(),
        }
    }
}

impl TextField {
    /// Creates a field with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the minimum width of the value area.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the character limit.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    /// Proposes the value and caret that result from applying `key` with
    /// the caret at `caret` in `current`.
    ///
    /// Returns `None` when the key is not an editing key or would change
    /// neither the text nor the caret. A caret past the end counts as the
    /// end.
    pub fn edit(&self, current: &str, caret: usize, key: &KeyMsg) -> Option<Edit> {
        let mut chars: Vec<char> = current.chars().collect();
        let start = caret.min(chars.len());
        let km = &self.key_map;

        let pos = if km.delete_word_backward.matches(key) {
            let from = word_start(&chars, start);
            chars.drain(from..start);
            from
        } else if km.delete_character_backward.matches(key) {
            let from = start - grapheme_len_before(&chars, start);
            chars.drain(from..start);
            from
        } else if km.delete_character_forward.matches(key) {
            let to = start + grapheme_len_after(&chars, start);
            chars.drain(start..to);
            start
        } else if km.delete_word_forward.matches(key) {
            let to = word_end(&chars, start);
            chars.drain(start..to);
            start
        } else if km.delete_after_cursor.matches(key) {
            chars.truncate(start);
            start
        } else if km.delete_before_cursor.matches(key) {
            chars.drain(..start);
            0
        } else if km.word_backward.matches(key) {
            word_start(&chars, start)
        } else if km.character_backward.matches(key) {
            start - grapheme_len_before(&chars, start)
        } else if km.word_forward.matches(key) {
            word_end(&chars, start)
        } else if km.character_forward.matches(key) {
            start + grapheme_len_after(&chars, start)
        } else if km.line_start.matches(key) {
            0
        } else if km.line_end.matches(key) {
            chars.len()
        } else {
            let command = key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            match key.key {
                KeyCode::Char(c) if !command && !c.is_control() => {
                    if self.char_limit > 0 && chars.len() >= self.char_limit {
                        return None;
                    }
                    chars.insert(start, c);
                    start + 1
                }
                _ => return None,
            }
        };

        let value: String = chars.into_iter().collect();
        (value != current || pos != start).then_some(Edit { value, caret: pos })
    }

    /// Width in cells of the row [`TextField::view`] draws for `value`.
    pub fn display_width(&self, value: &str) -> usize {
        let shown = if value.is_empty() {
            &self.placeholder
        } else {
            value
        };
        // One extra cell for the cursor.
        self.prompt.width() + self.width.max(shown.width() + 1)
    }

    /// Renders the field showing `value` with the caret at `caret`.
    pub fn view(&self, value: &str, caret: usize, focused: bool) -> String {
        let mut out = self.prompt_style.render(&self.prompt);

        let used = if value.is_empty() {
            out.push_str(&self.placeholder_style.render(&self.placeholder));
            out.push_str(&self.cursor_cell(" ", focused));
            self.placeholder.width() + 1
        } else {
            let split = value
                .char_indices()
                .nth(caret)
                .map_or(value.len(), |(i, _)| i);
            let (before, rest) = value.split_at(split);
            if !before.is_empty() {
                out.push_str(&self.text_style.render(before));
            }
            match rest.graphemes(true).next() {
                Some(under) if focused => {
                    out.push_str(&self.cursor_cell(under, true));
                    let after = &rest[under.len()..];
                    if !after.is_empty() {
                        out.push_str(&self.text_style.render(after));
                    }
                    out.push(' ');
                }
                Some(_) => {
                    out.push_str(&self.text_style.render(rest));
                    out.push(' ');
                }
                None => out.push_str(&self.cursor_cell(" ", focused)),
            }
            value.width() + 1
        };

        let fill = self.width.saturating_sub(used);
        if fill > 0 {
            out.push_str(&" ".repeat(fill));
        }
        out
    }

    fn cursor_cell(&self, cell: &str, focused: bool) -> String {
        if focused {
            self.cursor_style.render(cell)
        } else {
            cell.to_string()
        }
    }
}

fn grapheme_len_before(chars: &[char], pos: usize) -> usize {
    let prefix: String = chars[..pos].iter().collect();
    prefix
        .graphemes(true)
        .next_back()
        .map_or(0, |g| g.chars().count())
}

fn grapheme_len_after(chars: &[char], pos: usize) -> usize {
    let suffix: String = chars[pos..].iter().collect();
    suffix
        .graphemes(true)
        .next()
        .map_or(0, |g| g.chars().count())
}

// Start of the word before `pos`, skipping whitespace first.
fn word_start(chars: &[char], pos: usize) -> usize {
    let mut i = pos;
    while i > 0 && chars[i - 1].is_whitespace() {
        i -= 1;
    }
    while i > 0 && !chars[i - 1].is_whitespace() {
        i -= 1;
    }
    i
}

fn word_end(chars: &[char], pos: usize) -> usize {
    let mut i = pos;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    while i < chars.len() && !chars[i].is_whitespace() {
        i += 1;
    }
    i
}
