//! Pipe mode: run one command against the store and report on stdio.
//!
//! Records go to stdout, one per note followed by a blank line. Every
//! message (misses, warnings) goes to stderr, so stdout can be piped into
//! other tools untouched.

use super::args::Command;
use crate::model::{accept_body, InputError, NumberedNote, StoreError};
use crate::store::NoteStore;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};

/// How a pipe-mode command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// False when the requested note or search came up empty.
    pub success: bool,
    /// True when the store changed and must be saved.
    pub modified: bool,
}

impl Outcome {
    fn done(modified: bool) -> Self {
        Self {
            success: true,
            modified,
        }
    }

    fn missed() -> Self {
        Self {
            success: false,
            modified: false,
        }
    }

    /// Process exit status: 0 on success, 1 on a miss.
    pub fn exit_code(self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Settings for pipe-mode appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeOptions {
    /// Longest accepted note body, in characters.
    pub max_note_len: usize,
    /// Origin recorded on new notes.
    pub origin: String,
}

/// Write one record followed by a blank line.
fn write_record(out: &mut impl Write, note: NumberedNote<'_>) -> io::Result<()> {
    writeln!(out, "{note}")
}

/// Run `command` against `store`.
///
/// `input` is only read for [`Command::AppendStdin`]. [`Command::Interactive`]
/// is not a pipe command and is rejected.
///
/// # Errors
///
/// Only I/O errors on the given streams.
pub fn run_pipe(
    command: &Command,
    store: &mut NoteStore,
    options: &PipeOptions,
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    let outcome = match command {
        Command::Pop => match store.pop() {
            Ok((number, note)) => {
                write_record(out, NumberedNote { number, note: &note })?;
                Outcome::done(true)
            }
            Err(StoreError::Empty) | Err(StoreError::NotFound { .. }) => {
                writeln!(err, "No notes to pop")?;
                Outcome::missed()
            }
        },

        Command::PopNumber(number) => {
            let Some(seq) = store.find_by_sequence(*number).map(|entry| entry.number) else {
                writeln!(err, "{}", StoreError::NotFound { number: *number })?;
                return Ok(Outcome::missed());
            };
            let note = store.delete_at(seq.get()).map_err(io::Error::other)?;
            write_record(out, NumberedNote { number: seq, note: &note })?;
            Outcome::done(true)
        }

        Command::Delete(number) => match store.delete_at(*number) {
            Ok(_) => Outcome::done(true),
            Err(e) => {
                writeln!(err, "{e}")?;
                Outcome::missed()
            }
        },

        Command::DeleteAll => {
            let had_notes = !store.is_empty();
            store.delete_all();
            Outcome::done(had_notes)
        }

        Command::Show(number) => match store.find_by_sequence(*number) {
            Some(note) => {
                write_record(out, note)?;
                Outcome::done(false)
            }
            None => {
                writeln!(err, "{}", StoreError::NotFound { number: *number })?;
                Outcome::missed()
            }
        },

        Command::PrintAll => {
            if store.is_empty() {
                writeln!(err, "{}", StoreError::Empty)?;
                Outcome::missed()
            } else {
                for note in store.iter() {
                    write_record(out, note)?;
                }
                Outcome::done(false)
            }
        }

        Command::Find(term) => {
            if store.is_empty() {
                writeln!(err, "Nothing to search")?;
                return Ok(Outcome::missed());
            }
            let mut found = 0usize;
            for note in store.find_by_substring(term) {
                write_record(out, note)?;
                found += 1;
            }
            info!(term = %term, found, "Search");
            if found == 0 {
                writeln!(err, "Nothing found")?;
                Outcome::missed()
            } else {
                Outcome::done(false)
            }
        }

        Command::Append(text) => append(store, options, text, err)?,

        Command::AppendStdin => {
            let mut line = String::new();
            input.read_line(&mut line)?;
            append(store, options, &line, err)?
        }

        Command::Interactive => {
            warn!("Interactive command reached pipe mode");
            Outcome::missed()
        }
    };

    Ok(outcome)
}

/// Append `raw` as a note. Blank input appends nothing and is not a failure.
fn append(
    store: &mut NoteStore,
    options: &PipeOptions,
    raw: &str,
    err: &mut impl Write,
) -> io::Result<Outcome> {
    match accept_body(raw, options.max_note_len) {
        Ok(accepted) => {
            if let Some(warning) = &accepted.warning {
                warn!(%warning, "Note truncated");
                writeln!(err, "{warning}")?;
            }
            store.append(accepted.body, options.origin.clone());
            Ok(Outcome::done(true))
        }
        Err(InputError::NoInput) => {
            writeln!(err, "{}", InputError::NoInput)?;
            Ok(Outcome::done(false))
        }
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(Outcome::missed())
        }
    }
}
