//! Footer prompts: single-line text entry and y/n confirmations.
//!
//! Text editing functions are pure - no side effects, testable without TUI.
//! The cursor is a character index, so multi-byte input edits cleanly.

use crate::model::SequenceNumber;

/// What a prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Body of a new note.
    NewNote,
    /// Replacement body for an existing note.
    EditNote(SequenceNumber),
    /// Term for a substring search.
    Search,
    /// Confirmation before deleting one note.
    ConfirmDelete(SequenceNumber),
    /// Confirmation before deleting every note.
    ConfirmDeleteAll,
}

impl PromptKind {
    /// Label shown before the input.
    pub fn label(self) -> String {
        match self {
            PromptKind::NewNote => "Enter note".to_string(),
            PromptKind::EditNote(n) => format!("Edit note #{n}"),
            PromptKind::Search => "Enter search term".to_string(),
            PromptKind::ConfirmDelete(n) => format!("Delete note #{n}? [y/n]"),
            PromptKind::ConfirmDeleteAll => "Delete all notes? [y/n]".to_string(),
        }
    }

    /// Confirmations take a single key instead of a line of text.
    pub fn is_confirmation(self) -> bool {
        matches!(
            self,
            PromptKind::ConfirmDelete(_) | PromptKind::ConfirmDeleteAll
        )
    }
}

/// Single-line text being typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Input prefilled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert at the cursor and advance it.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }

    /// Move left, saturating at 0.
    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move right, saturating at the end.
    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    /// Jump to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the end.
    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

/// An open prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// What is being asked.
    pub kind: PromptKind,
    /// Text typed so far (unused by confirmations).
    pub input: TextInput,
}

impl Prompt {
    /// Empty prompt.
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: TextInput::default(),
        }
    }

    /// Prompt prefilled with existing text.
    pub fn prefilled(kind: PromptKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            input: TextInput::with_text(text),
        }
    }
}
