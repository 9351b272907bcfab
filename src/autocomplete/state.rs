//! Interaction state of the autocomplete widget.
//!
//! [`InteractionState`] is the part of the widget the widget itself owns:
//! whether the list is open, which row is highlighted, and the suggestions
//! computed for the current query. The query is never stored here. Each
//! transition takes the query as an argument when it needs one.

use crate::suggest::SuggestionSource;

/// Open/closed flag, highlighted row and current suggestions.
///
/// Invariants kept by every transition:
/// - `is_open()` implies `!suggestions().is_empty()`
/// - `highlighted()` is `None` or a valid index into `suggestions()`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    open: bool,
    highlighted: Option<usize>,
    suggestions: Vec<String>,
}

impl InteractionState {
    /// Fresh, closed state with no suggestions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Suggestions for the last query.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The highlighted suggestion, if any.
    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    /// Whether the list should be drawn.
    pub fn is_visible(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    /// Recomputes suggestions for a new query, opens the list when there is
    /// something to show, and clears the highlight.
    pub fn query_changed<S>(&mut self, query: &str, source: &S, min_query_len: usize)
    where
        S: SuggestionSource + ?Sized,
    {
        self.suggestions = if query.chars().count() >= min_query_len {
            source.suggest(query)
        } else {
            Vec::new()
        };
        self.open = !self.suggestions.is_empty();
        self.highlighted = None;
        tracing::trace!(query, count = self.suggestions.len(), open = self.open, "query changed");
    }

    /// Reopens a dismissed list without recomputing it. Returns whether the
    /// list is now open.
    pub fn focus_gained(&mut self, query: &str, min_query_len: usize) -> bool {
        if query.chars().count() >= min_query_len && !self.suggestions.is_empty() {
            self.open = true;
        }
        self.open
    }

    /// Moves the highlight down one row, wrapping to the top.
    pub fn highlight_next(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Moves the highlight up one row, wrapping to the bottom.
    pub fn highlight_prev(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        });
    }

    /// Closes the list and clears the highlight.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Closes the list, keeping the highlight.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Takes the suggestion at `index` as the final choice and closes the
    /// list. Returns `None` when `index` is out of range.
    pub fn commit(&mut self, index: usize) -> Option<String> {
        let choice = self.suggestions.get(index).cloned()?;
        self.dismiss();
        Some(choice)
    }

    /// Commits the highlighted suggestion. Without a highlight nothing
    /// changes.
    pub fn commit_highlighted(&mut self) -> Option<String> {
        let index = self.highlighted?;
        self.commit(index)
    }
}
