//! Rendering for the autocomplete widget.

use super::model::Model;
use crate::suggest::SuggestionSource;
use crate::Component;
use unicode_width::UnicodeWidthStr;

impl<S: SuggestionSource> Model<S> {
    /// Renders the input row and, when open, one row per suggestion.
    pub fn view(&self) -> String {
        let mut out = self.field.view(self.value(), self.caret(), self.focused());

        if !self.state().is_visible() {
            return out;
        }

        let width = self.list_width();
        let highlighted = self.highlighted();
        for (i, label) in self.suggestions().iter().enumerate() {
            out.push('\n');
            out.push_str(&self.row_view(label, highlighted == Some(i), width));
        }
        out
    }

    /// Width in cells of every suggestion row.
    pub(super) fn list_width(&self) -> usize {
        self.suggestions()
            .iter()
            .map(|label| self.row_width(label))
            .max()
            .unwrap_or(0)
    }

    fn row_width(&self, label: &str) -> usize {
        // " {marker} {label} "
        self.styles.marker.width() + label.width() + 3
    }

    fn row_view(&self, label: &str, highlighted: bool, width: usize) -> String {
        let fill = " ".repeat(width.saturating_sub(self.row_width(label)) + 1);

        if highlighted {
            let text = format!(" {} {}{}", self.styles.marker, label, fill);
            return self.styles.highlighted.render(&text);
        }

        let mut row = self.styles.item.render(" ");
        row.push_str(&self.styles.marker_style.render(&self.styles.marker));
        row.push_str(&self.styles.item.render(&format!(" {}{}", label, fill)));
        row
    }
}
