//! Scroll window over reflowed lines.
//!
//! The body window shows `rows` lines starting at `offset`, with a row
//! cursor inside the window. Offsets are clamped to
//! `[0, max(0, total - rows)]` so the window never shows blank space past
//! the end of the text.
//!
//! Moving down scrolls the text first; once the last line is on screen the
//! row cursor walks toward the bottom row. Moving up walks the row cursor
//! toward the top row first; once it is there the text scrolls back.
//! When the window is taller than the text only the row cursor moves.

use std::ops::Range;

/// Vertical position within a block of display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollWindow {
    offset: usize,
    row: usize,
    rows: usize,
}

impl ScrollWindow {
    /// A window of `rows` lines at the top of the text.
    pub fn new(rows: usize) -> Self {
        Self {
            offset: 0,
            row: 0,
            rows,
        }
    }

    /// Index of the first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Cursor row within the window (0-based).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Window height in lines.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Largest offset that still fills the window.
    pub fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.rows)
    }

    /// True when `total` lines do not fit in the window.
    pub fn overflows(&self, total: usize) -> bool {
        total > self.rows
    }

    /// Line indices currently on screen.
    pub fn visible(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        start..(self.offset + self.rows).min(total)
    }

    /// Back to the top of the text. Used when the displayed text changes.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.row = 0;
    }

    /// Move down one line. Returns true if the offset changed (the visible
    /// lines must be redrawn) rather than only the row cursor.
    pub fn down(&mut self, total: usize) -> bool {
        if self.offset < self.max_offset(total) {
            self.offset += 1;
            return true;
        }
        let last_row = self.rows.min(total).saturating_sub(1);
        if self.row < last_row {
            self.row += 1;
        }
        false
    }

    /// Move up one line. Returns true if the offset changed.
    pub fn up(&mut self) -> bool {
        if self.row > 0 {
            self.row -= 1;
            return false;
        }
        if self.offset > 0 {
            self.offset -= 1;
            return true;
        }
        false
    }

    /// Adopt a new window height, keeping the current offset where possible.
    pub fn resize(&mut self, rows: usize, total: usize) {
        self.rows = rows;
        self.clamp(total);
    }

    /// Pull offset and row back into range after the text shrank or grew.
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(self.max_offset(total));
        self.row = self.row.min(self.rows.min(total).saturating_sub(1));
    }
}
