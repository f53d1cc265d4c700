//! On-disk representation of a [`NoteStore`].
//!
//! The data file is JSON Lines: one object per note, in order. JSON string
//! escaping keeps bodies with embedded newlines on a single line. The
//! `number` field is informational; numbers are re-derived from position
//! when loading.
//!
//! Files written by the old raw layout (four plain lines per note: number,
//! time, origin, body) are still readable. A file with no line that decodes
//! as a JSON record is read in that layout, and rewritten as JSON Lines on the
//! next save.
//!
//! Loading never fails on content: a leading byte order mark is ignored,
//! lines that are not valid UTF-8 are decoded lossily, and records that do
//! not decode are skipped.

use super::NoteStore;
use crate::model::{MalformedRecord, Note, PersistError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Lines per record in the legacy layout.
const LEGACY_RECORD_LINES: usize = 4;

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Serialize, Deserialize)]
struct NoteRecord {
    #[serde(default)]
    number: usize,
    created_at: String,
    origin: String,
    body: String,
}

/// Result of loading a data file.
#[derive(Debug, Default)]
pub struct Loaded {
    /// Every record that decoded, in file order.
    pub store: NoteStore,
    /// Records that were skipped.
    pub malformed: Vec<MalformedRecord>,
}

/// Read the store from `path`.
///
/// A missing file is an empty store. Undecodable records are skipped and
/// reported in [`Loaded::malformed`]; only I/O failures are errors.
pub fn load(path: &Path) -> Result<Loaded, PersistError> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No data file yet, starting empty");
            return Ok(Loaded::default());
        }
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let loaded = decode_bytes(&contents);
    for record in &loaded.malformed {
        warn!(path = %path.display(), line = record.line, reason = %record.reason, "Skipping malformed record");
    }
    info!(
        path = %path.display(),
        notes = loaded.store.count(),
        skipped = loaded.malformed.len(),
        "Loaded notes"
    );
    Ok(loaded)
}

/// Write the whole store to `path`.
///
/// Contents go to a temporary file in the same directory which is then
/// renamed over `path`, so a crash mid-write leaves the previous file intact.
pub fn save(path: &Path, store: &NoteStore) -> Result<(), PersistError> {
    let contents = encode(store)?;

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| PersistError::Io { path, source }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, contents).map_err(io_err(&tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path)(e));
    }

    info!(path = %path.display(), notes = store.count(), "Saved notes");
    Ok(())
}

/// Serialize a store as JSON Lines.
pub fn encode(store: &NoteStore) -> Result<String, PersistError> {
    let mut out = String::new();
    for entry in store.iter() {
        let record = NoteRecord {
            number: entry.number.get(),
            created_at: entry.note.created_at().to_string(),
            origin: entry.note.origin().to_string(),
            body: entry.note.body().to_string(),
        };
        let line = serde_json::to_string(&record).map_err(|source| PersistError::Encode {
            number: entry.number.get(),
            source,
        })?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Parse data file contents in either layout.
pub fn decode(contents: &str) -> Loaded {
    decode_bytes(contents.as_bytes())
}

/// Parse raw data file bytes in either layout.
///
/// Lines that are not valid UTF-8 keep their readable parts, with invalid
/// sequences replaced by U+FFFD.
pub fn decode_bytes(contents: &[u8]) -> Loaded {
    let contents = contents.strip_prefix(BYTE_ORDER_MARK).unwrap_or(contents);
    let lines: Vec<Cow<'_, str>> = split_lines(contents)
        .enumerate()
        .map(|(index, raw)| match std::str::from_utf8(raw) {
            Ok(line) => Cow::Borrowed(line),
            Err(e) => {
                warn!(line = index + 1, error = %e, "Record is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(raw)
            }
        })
        .collect();

    let is_json_lines = lines
        .iter()
        .any(|line| serde_json::from_str::<NoteRecord>(line).is_ok());
    if is_json_lines {
        decode_json_lines(&lines)
    } else {
        decode_legacy(&lines)
    }
}

/// Lines without their `\n` or `\r\n` terminator.
fn split_lines(contents: &[u8]) -> impl Iterator<Item = &[u8]> {
    let contents = contents.strip_suffix(b"\n").unwrap_or(contents);
    contents
        .split(|b| *b == b'\n')
        .filter(move |_| !contents.is_empty())
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

fn decode_json_lines(lines: &[Cow<'_, str>]) -> Loaded {
    let mut notes = Vec::new();
    let mut malformed = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<NoteRecord>(line) {
            Ok(record) => notes.push(Note::with_timestamp(
                record.body,
                record.origin,
                record.created_at,
            )),
            Err(e) => malformed.push(MalformedRecord {
                line: index + 1,
                reason: e.to_string(),
            }),
        }
    }

    Loaded {
        store: NoteStore::from_notes(notes),
        malformed,
    }
}

fn decode_legacy(lines: &[Cow<'_, str>]) -> Loaded {
    let mut notes = Vec::new();
    let mut malformed = Vec::new();

    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Loaded::default();
    };

    for (chunk_index, chunk) in lines[start..].chunks(LEGACY_RECORD_LINES).enumerate() {
        let line = start + chunk_index * LEGACY_RECORD_LINES + 1;
        if chunk.iter().all(|l| l.trim().is_empty()) {
            continue;
        }
        if chunk.len() < LEGACY_RECORD_LINES {
            malformed.push(MalformedRecord {
                line,
                reason: format!("incomplete record ({} of 4 lines)", chunk.len()),
            });
            continue;
        }
        if chunk[0].trim().parse::<usize>().is_err() {
            malformed.push(MalformedRecord {
                line,
                reason: format!("expected a note number, found {:?}", chunk[0]),
            });
            continue;
        }
        notes.push(Note::with_timestamp(
            chunk[3].as_ref(),
            chunk[2].as_ref(),
            chunk[1].trim_end(),
        ));
    }

    Loaded {
        store: NoteStore::from_notes(notes),
        malformed,
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "terminote.data".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
