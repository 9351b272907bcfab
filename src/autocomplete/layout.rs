//! Screen geometry of the widget, used to resolve pointer presses.
//!
//! The input occupies one row at the origin. When the list is visible,
//! suggestion `i` occupies row `origin.y + 1 + i`, and the list container is
//! exactly the block of those rows.

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The input row.
    Input,
    /// A suggestion row.
    Suggestion(usize),
    /// Neither the input nor the list.
    Outside,
}

/// Rectangle covered by the widget on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Column of the top-left cell.
    pub x: u16,
    /// Row of the input.
    pub y: u16,
    /// Width of the input row in cells.
    pub input_width: usize,
    /// Width of the list rows in cells.
    pub list_width: usize,
    /// Number of suggestion rows drawn. 0 when the list is hidden.
    pub list_rows: usize,
}

impl Layout {
    /// Resolves a press at cell (`col`, `row`).
    pub fn hit_test(&self, col: u16, row: u16) -> HitTarget {
        let (col, row) = (usize::from(col), usize::from(row));
        let (x, y) = (usize::from(self.x), usize::from(self.y));

        if col < x {
            return HitTarget::Outside;
        }
        let dx = col - x;

        if row == y && dx < self.input_width {
            return HitTarget::Input;
        }
        if row > y && row <= y + self.list_rows && dx < self.list_width {
            return HitTarget::Suggestion(row - y - 1);
        }
        HitTarget::Outside
    }
}
