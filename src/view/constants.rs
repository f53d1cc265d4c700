//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the header bar in lines.
///
/// Together with [`FOOTER_HEIGHT`] this must equal
/// [`CHROME_ROWS`](crate::view_state::CHROME_ROWS).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the footer (menu, prompt or status line) in lines.
pub const FOOTER_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop waits for input before checking for a resize.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
