//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod menu;
pub mod prompt;
pub mod session;

// Re-export for convenience
pub use menu::MenuItem;
pub use prompt::{Prompt, PromptKind, TextInput};
pub use session::{Display, Mode, Session, SessionOptions};
