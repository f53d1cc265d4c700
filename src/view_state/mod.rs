//! View-state layer - reflow and scrolling for the body window
//!
//! Pure functions and small value types; nothing here touches the terminal.
//!
//! # Module Structure
//!
//! - `reflow`: LineSpan, reflow, slice_range, ReflowedText
//! - `scroll`: ScrollWindow - offset and row cursor over reflowed lines

pub mod reflow;
pub mod scroll;

pub use reflow::{display_width, reflow, slice_range, LineSpan, ReflowedText};
pub use scroll::ScrollWindow;

/// Rows taken by the header and footer bars around the body window.
pub const CHROME_ROWS: u16 = 2;

/// Terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Columns available to reflowed text. Never zero.
    pub fn body_width(self) -> usize {
        usize::from(self.width.max(1))
    }

    /// Lines available to the body window between header and footer.
    pub fn body_rows(self) -> usize {
        usize::from(self.height.saturating_sub(CHROME_ROWS))
    }
}

impl Default for ViewportDimensions {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
