//! Styles for the suggestion list.

use lipgloss_extras::prelude::*;

/// Location marker drawn before each suggestion.
pub const MARKER: &str = "📍";

/// Styles applied when rendering suggestion rows.
///
/// ```rust
/// use location_autocomplete::autocomplete::Styles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = Styles::default();
/// styles.highlighted = Style::new().bold(true);
/// styles.marker = "*".to_string();
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    /// Marker text, drawn before each label.
    pub marker: String,
    /// Style of the marker.
    pub marker_style: Style,
    /// Style of a plain row.
    pub item: Style,
    /// Style of the highlighted row.
    pub highlighted: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            marker: MARKER.to_string(),
            marker_style: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            highlighted: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#ffffff",
                })
                .background(AdaptiveColor {
                    Light: "#E5E5E5",
                    Dark: "#3C3C3C",
                }),
        }
    }
}
