//! Note records and their sequence numbers.
//!
//! A `Note` never stores its own number. Numbers are derived from the note's
//! position in the store, which keeps them dense across deletions.

use super::error::{InputError, InvalidSequenceNumber};
use chrono::{DateTime, Local};
use std::fmt;
use std::num::NonZeroUsize;

/// `ctime`-style timestamp layout, e.g. `Thu Feb 21 10:00:00 2013`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Default upper bound on a note body, in characters.
pub const DEFAULT_MAX_NOTE_LEN: usize = 1000;

/// 1-based position of a note in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceNumber(NonZeroUsize);

impl SequenceNumber {
    /// The first note's number.
    pub const FIRST: SequenceNumber = SequenceNumber(NonZeroUsize::MIN);

    /// Smart constructor: rejects zero, which is reserved for the root position.
    pub fn new(raw: usize) -> Result<Self, InvalidSequenceNumber> {
        NonZeroUsize::new(raw)
            .map(Self)
            .ok_or(InvalidSequenceNumber(raw))
    }

    /// Number for the note stored at `index` (0-based).
    pub fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Raw 1-based value.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// 0-based index into the store.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single stored note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    body: String,
    created_at: String,
    origin: String,
}

impl Note {
    /// Create a note stamped with the current local time.
    pub fn new(body: impl Into<String>, origin: impl Into<String>) -> Self {
        Self::with_timestamp(body, origin, format_timestamp(Local::now()))
    }

    /// Create a note with an already formatted timestamp (used when loading).
    pub fn with_timestamp(
        body: impl Into<String>,
        origin: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            created_at: created_at.into(),
            origin: origin.into(),
        }
    }

    /// Note text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Creation time, formatted with [`TIMESTAMP_FORMAT`].
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Where the note was taken (working directory at creation).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub(crate) fn set_body(&mut self, body: String) {
        self.body = body;
    }
}

/// A borrowed note paired with its current sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedNote<'a> {
    /// Position-derived number.
    pub number: SequenceNumber,
    /// The note itself.
    pub note: &'a Note,
}

impl fmt::Display for NumberedNote<'_> {
    /// Record layout used by the pipe mode and the print-all listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NoteNum: {}\nPath: {}\nTime: {}\nMessage: {}\n",
            self.number,
            self.note.origin(),
            self.note.created_at(),
            self.note.body()
        )
    }
}

/// Format a timestamp the way notes store it.
pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Working directory rendered for display, or `?` when it cannot be read.
pub fn current_origin() -> String {
    std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| "?".to_string())
}

/// Body text accepted from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedBody {
    /// Text to store, already trimmed of the line terminator and truncated.
    pub body: String,
    /// Set when the input exceeded the limit and was cut short.
    pub warning: Option<InputError>,
}

/// Validate raw input before it becomes a note body.
///
/// Strips one trailing line terminator. Blank input yields
/// [`InputError::NoInput`]. Input longer than `limit` characters is truncated
/// at a character boundary and carries an [`InputError::TooLarge`] warning.
pub fn accept_body(raw: &str, limit: usize) -> Result<AcceptedBody, InputError> {
    let text = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw);

    if text.trim().is_empty() {
        return Err(InputError::NoInput);
    }

    let limit = limit.max(1);
    let actual = text.chars().count();
    if actual <= limit {
        return Ok(AcceptedBody {
            body: text.to_string(),
            warning: None,
        });
    }

    let body: String = text.chars().take(limit).collect();
    Ok(AcceptedBody {
        body,
        warning: Some(InputError::TooLarge { limit, actual }),
    })
}
