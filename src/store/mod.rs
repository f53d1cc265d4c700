//! Ordered note collection.
//!
//! `NoteStore` owns every note in insertion order. Sequence numbers are the
//! 1-based positions in that order, so they stay dense (`1..=count`) after
//! any append or deletion without explicit bookkeeping.
//!
//! The root position ("no note selected", number 0) is not a note. It is
//! expressed as [`Cursor::Root`].

pub mod codec;

use crate::model::{Note, NumberedNote, SequenceNumber, StoreError};
use tracing::{debug, info};

/// A position in the store: the root, or a real note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Logical predecessor of note #1. Nothing is selected.
    #[default]
    Root,
    /// A real note.
    Note(SequenceNumber),
}

impl Cursor {
    /// Raw number, with 0 for the root.
    pub fn number(self) -> usize {
        match self {
            Cursor::Root => 0,
            Cursor::Note(n) => n.get(),
        }
    }
}

/// Ordered collection of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from notes already in order.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Append a body as a new note stamped now, returning it with its number.
    pub fn append(&mut self, body: impl Into<String>, origin: impl Into<String>) -> NumberedNote<'_> {
        self.push(Note::new(body, origin))
    }

    /// Append an existing note. It receives `count + 1`.
    pub fn push(&mut self, note: Note) -> NumberedNote<'_> {
        self.notes.push(note);
        let index = self.notes.len() - 1;
        info!(number = index + 1, "Note appended");
        NumberedNote {
            number: SequenceNumber::from_index(index),
            note: &self.notes[index],
        }
    }

    /// Remove the note holding `number` and return it.
    ///
    /// Every later note moves down by one, so numbering stays dense and
    /// relative order is unchanged. `0` and numbers past the end report
    /// [`StoreError::NotFound`] and leave the store untouched.
    pub fn delete_at(&mut self, number: usize) -> Result<Note, StoreError> {
        let seq = self.checked(number)?;
        let removed = self.notes.remove(seq.index());
        info!(number, remaining = self.notes.len(), "Note deleted");
        Ok(removed)
    }

    /// Remove and return the last note.
    pub fn pop(&mut self) -> Result<(SequenceNumber, Note), StoreError> {
        let number = SequenceNumber::new(self.notes.len()).map_err(|_| StoreError::Empty)?;
        let note = self.notes.pop().ok_or(StoreError::Empty)?;
        info!(number = number.get(), "Note popped");
        Ok((number, note))
    }

    /// Remove every note. The next append receives number 1.
    pub fn delete_all(&mut self) {
        info!(removed = self.notes.len(), "All notes deleted");
        self.notes.clear();
    }

    /// Replace the body of an existing note, keeping its timestamp and origin.
    pub fn replace_body(&mut self, number: usize, body: impl Into<String>) -> Result<NumberedNote<'_>, StoreError> {
        let seq = self.checked(number)?;
        let note = &mut self.notes[seq.index()];
        note.set_body(body.into());
        info!(number, "Note edited");
        Ok(NumberedNote { number: seq, note })
    }

    /// The note at exactly `number`, if any. Misses are not coerced to a neighbour.
    pub fn find_by_sequence(&self, number: usize) -> Option<NumberedNote<'_>> {
        let seq = SequenceNumber::new(number).ok()?;
        self.notes.get(seq.index()).map(|note| NumberedNote { number: seq, note })
    }

    /// Notes whose body contains `term` (case-sensitive), in ascending order.
    ///
    /// Each call scans afresh; the iterator holds no state between calls.
    pub fn find_by_substring<'a>(
        &'a self,
        term: &'a str,
    ) -> impl Iterator<Item = NumberedNote<'a>> + 'a {
        self.iter().filter(move |entry| entry.note.body().contains(term))
    }

    /// Every note in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NumberedNote<'_>> + '_ {
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| NumberedNote {
                number: SequenceNumber::from_index(index),
                note,
            })
    }

    /// Number of notes.
    pub fn count(&self) -> usize {
        self.notes.len()
    }

    /// True when there are no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The note with the highest number.
    pub fn last_note(&self) -> Option<NumberedNote<'_>> {
        self.count()
            .checked_sub(1)
            .map(|index| NumberedNote {
                number: SequenceNumber::from_index(index),
                note: &self.notes[index],
            })
    }

    /// The note a cursor points at. `None` for the root or a stale cursor.
    pub fn get(&self, cursor: Cursor) -> Option<NumberedNote<'_>> {
        match cursor {
            Cursor::Root => None,
            Cursor::Note(n) => self.find_by_sequence(n.get()),
        }
    }

    /// Clamped forward navigation.
    ///
    /// From the root this is note #1. Past the last note the cursor stays on
    /// the last note; it never wraps back to the root. No-op on an empty store.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        let count = self.count();
        if count == 0 {
            return cursor;
        }
        let target = (cursor.number() + 1).min(count);
        let next = Cursor::Note(SequenceNumber::from_index(target - 1));
        debug!(from = cursor.number(), to = target, "Next note");
        next
    }

    /// Clamped backward navigation.
    ///
    /// Before note #1 is the root, and the root stays at the root.
    /// A cursor left past the end by a deletion lands on the last note.
    /// No-op on an empty store.
    pub fn previous(&self, cursor: Cursor) -> Cursor {
        let count = self.count();
        if count == 0 {
            return cursor;
        }
        let current = cursor.number().min(count + 1);
        let prev = match current.saturating_sub(1) {
            0 => Cursor::Root,
            n => Cursor::Note(SequenceNumber::from_index(n - 1)),
        };
        debug!(from = cursor.number(), to = prev.number(), "Previous note");
        prev
    }

    fn checked(&self, number: usize) -> Result<SequenceNumber, StoreError> {
        SequenceNumber::new(number)
            .ok()
            .filter(|seq| seq.index() < self.notes.len())
            .ok_or(StoreError::NotFound { number })
    }
}
