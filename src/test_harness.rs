//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with convenient methods for simulating a user
//! at the keyboard. Each harness owns a temporary directory holding its
//! data file, so persistence can be checked without touching the real one.

use crate::model::{AppError, Note};
use crate::state::{Session, SessionOptions};
use crate::store::{codec, NoteStore};
use crate::view::TuiApp;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Timestamp used for every fixture note so rendered headers are stable.
pub const FIXTURE_TIME: &str = "Thu Feb 21 10:04:05 2013";

/// Origin used for every fixture note and for notes typed in tests.
pub const FIXTURE_ORIGIN: &str = "/home/test";

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep assertions readable.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    data_path: PathBuf,
    running: bool,
    // Dropped last: removes the data file's directory.
    _dir: TempDir,
}

impl AcceptanceTestHarness {
    /// Harness over notes with the given bodies, 80x24, saving only on quit.
    pub fn with_notes(bodies: &[&str]) -> Self {
        Self::build(bodies, 80, 24, false, None)
    }

    /// Harness over notes with the given bodies and a custom terminal size.
    pub fn with_notes_and_size(bodies: &[&str], width: u16, height: u16) -> Self {
        Self::build(bodies, width, height, false, None)
    }

    /// Harness that saves after every change.
    pub fn saving_on_change(bodies: &[&str]) -> Self {
        Self::build(bodies, 80, 24, true, None)
    }

    /// Harness that starts with `notice` in the status line.
    pub fn with_notice(bodies: &[&str], notice: &str) -> Self {
        Self::build(bodies, 80, 24, false, Some(notice.to_string()))
    }

    fn build(
        bodies: &[&str],
        width: u16,
        height: u16,
        save_on_change: bool,
        notice: Option<String>,
    ) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let data_path = dir.path().join("terminote.data");

        let store = NoteStore::from_notes(
            bodies
                .iter()
                .map(|body| Note::with_timestamp(*body, FIXTURE_ORIGIN, FIXTURE_TIME))
                .collect(),
        );
        let options = SessionOptions {
            origin: FIXTURE_ORIGIN.to_string(),
            ..SessionOptions::default()
        };

        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        let app = TuiApp::with_terminal(terminal, store, options, data_path.clone(), save_on_change)
            .with_notice(notice);

        Self {
            app,
            data_path,
            running: true,
            _dir: dir,
        }
    }

    /// Send a single key event. Returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C). Returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a character key.
    pub fn send_char(&mut self, ch: char) -> bool {
        self.send_key(KeyCode::Char(ch))
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_char(ch) {
                break;
            }
        }
    }

    /// Resize the terminal and let the app pick up the new size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.resize_test(width, height);
    }

    /// Render the current frame to a string.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Rendered text of one terminal row, trailing blanks removed.
    pub fn row(&mut self, y: u16) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// Feed `events` through the real event loop. Once they run out the
    /// loop fails, as it would if the terminal went away.
    pub fn run_events(&mut self, events: Vec<io::Result<Event>>) -> Result<(), AppError> {
        let result = self.app.run_events_test(events);
        self.running = false;
        result
    }

    /// Save the way the event loop does on the way out.
    pub fn finish(&mut self) {
        self.app.persist_test().expect("save on exit");
    }

    /// Session state for assertions.
    pub fn session(&self) -> &Session {
        self.app.session()
    }

    /// Where this harness saves.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Notes currently on disk, or `None` if nothing was saved yet.
    pub fn saved_bodies(&self) -> Option<Vec<String>> {
        if !self.data_path.exists() {
            return None;
        }
        let loaded = codec::load(&self.data_path).expect("load saved data");
        Some(
            loaded
                .store
                .iter()
                .map(|entry| entry.note.body().to_string())
                .collect(),
        )
    }

    /// False once a key has quit the app.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
