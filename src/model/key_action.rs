//! Domain-level keyboard actions independent of key bindings.

/// Actions available while browsing notes.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Notes
    /// Prompt for a new note and append it. Default: w
    NewNote,
    /// Move to the previous note. Default: a
    PrevNote,
    /// Move to the next note. Default: d
    NextNote,
    /// List every note in the body window. Default: e
    PrintAll,
    /// Delete every note after confirmation. Default: g
    DeleteAll,
    /// Delete the note under the cursor after confirmation. Default: c
    DeleteCurrent,
    /// Prompt for a term and list matching notes. Default: f
    Search,

    // Scrolling
    /// Move the row cursor up, scrolling at the top row. Default: ↑
    ScrollUp,
    /// Scroll down, moving the row cursor once the end is visible. Default: ↓
    ScrollDown,

    // Application
    /// Give focus to the footer menu. Default: Ctrl+f/Tab
    OpenMenu,
    /// Toggle the help overlay. Default: m
    Help,
    /// Save and exit. Default: q/Ctrl+c
    Quit,
}
