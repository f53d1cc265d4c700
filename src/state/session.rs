//! Interactive session state.
//!
//! `Session` owns the note store for the lifetime of the interactive
//! interface, together with everything the screen shows: the cursor, the
//! reflowed body text, the scroll window and the current mode. All
//! transitions are plain methods with no terminal I/O, so the state machine
//! is testable without a backend.
//!
//! # State Machine
//!
//! - `Browsing` ⇄ `ScrollingMessage`: derived from whether the displayed
//!   text overflows the body window. Re-evaluated whenever the text or the
//!   window size changes.
//! - `Browsing` → `MenuActive` on the menu key; back on Browse, on any
//!   non-menu key, or after another item runs.
//! - `Browsing` → `Prompt` for new/edit/search text and y/n confirmations;
//!   back on Enter (submit), Esc (cancel), or any key for confirmations.
//! - any → `Quit` on the quit action or the menu's Quit item.

use super::menu::MenuItem;
use super::prompt::{Prompt, PromptKind};
use crate::model::{accept_body, InputError, KeyAction, StoreError, DEFAULT_MAX_NOTE_LEN};
use crate::store::{Cursor, NoteStore};
use crate::view_state::{ReflowedText, ScrollWindow, ViewportDimensions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

/// Input mode of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation; the displayed text fits the body window.
    Browsing,
    /// Normal navigation; the displayed text is taller than the window.
    ScrollingMessage,
    /// The footer menu has focus.
    MenuActive {
        /// Highlighted item.
        selected: MenuItem,
    },
    /// A footer prompt has focus.
    Prompt(Prompt),
    /// The session is over; the caller saves and exits.
    Quit,
}

/// What the body window is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// The note under the cursor, or the summary at the root.
    Note,
    /// A multi-note listing (print-all or search results).
    Listing {
        /// Shown in the header bar.
        title: String,
    },
}

/// Settings that shape a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Longest accepted note body, in characters.
    pub max_note_len: usize,
    /// Origin recorded on new notes.
    pub origin: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_note_len: DEFAULT_MAX_NOTE_LEN,
            origin: crate::model::current_origin(),
        }
    }
}

/// State of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    store: NoteStore,
    cursor: Cursor,
    display: Display,
    content: ReflowedText,
    scroll: ScrollWindow,
    viewport: ViewportDimensions,
    pending_resize: Option<ViewportDimensions>,
    mode: Mode,
    status: Option<String>,
    help_visible: bool,
    options: SessionOptions,
    dirty: bool,
}

impl Session {
    /// Start a session at the root position.
    pub fn new(store: NoteStore, viewport: ViewportDimensions, options: SessionOptions) -> Self {
        let mut session = Self {
            store,
            cursor: Cursor::Root,
            display: Display::Note,
            content: ReflowedText::new("", viewport.body_width()),
            scroll: ScrollWindow::new(viewport.body_rows()),
            viewport,
            pending_resize: None,
            mode: Mode::Browsing,
            status: None,
            help_visible: false,
            options,
            dirty: false,
        };
        session.rebuild_content();
        session
    }

    // ===== Accessors =====

    /// The notes.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Give the notes back, ending the session.
    pub fn into_store(self) -> NoteStore {
        self.store
    }

    /// Current position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// What the body shows.
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Reflowed body text.
    pub fn content(&self) -> &ReflowedText {
        &self.content
    }

    /// Body scroll window.
    pub fn scroll(&self) -> &ScrollWindow {
        &self.scroll
    }

    /// Current terminal dimensions.
    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    /// Current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Message for the footer, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the help overlay is up.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// True once the session has been asked to end.
    pub fn is_quit(&self) -> bool {
        self.mode == Mode::Quit
    }

    /// True when the store changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Show a message in the footer until the next key.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Drop the footer message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Show or hide the help overlay.
    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    // ===== Browsing actions =====

    /// Run a bound browsing action. Returns true if the screen changed.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::NextNote => self.move_cursor(self.store.next(self.cursor)),
            KeyAction::PrevNote => self.move_cursor(self.store.previous(self.cursor)),
            KeyAction::NewNote => self.open_prompt(Prompt::new(PromptKind::NewNote)),
            KeyAction::PrintAll => self.print_all(),
            KeyAction::DeleteAll => self.begin_delete_all(),
            KeyAction::DeleteCurrent => self.begin_delete_current(),
            KeyAction::Search => self.begin_search(),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::OpenMenu => self.open_menu(),
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                true
            }
            KeyAction::Quit => self.quit(),
        }
    }

    /// Point the cursor at `target` and show that note.
    ///
    /// Returns false, leaving scroll state alone, when the same note is
    /// already on screen.
    fn move_cursor(&mut self, target: Cursor) -> bool {
        if target == self.cursor && self.display == Display::Note {
            return false;
        }
        debug!(from = self.cursor.number(), to = target.number(), "Cursor moved");
        self.cursor = target;
        self.display = Display::Note;
        self.rebuild_content();
        true
    }

    /// List every note in the body window.
    pub fn print_all(&mut self) -> bool {
        if self.store.is_empty() {
            self.set_status("Nothing to print.");
            return true;
        }
        let title = format!("All notes ({})", self.store.count());
        let text = listing(self.store.iter().map(|entry| entry.to_string()));
        self.show_listing(title, text);
        true
    }

    /// List the notes containing `term`.
    ///
    /// An empty store reports "Nothing to search." and no matches report
    /// "Nothing found."; neither changes what the body shows.
    pub fn search(&mut self, term: &str) -> bool {
        if self.store.is_empty() {
            self.set_status("Nothing to search.");
            return true;
        }
        let hits: Vec<String> = self
            .store
            .find_by_substring(term)
            .map(|entry| entry.to_string())
            .collect();
        info!(term, hits = hits.len(), "Search");
        if hits.is_empty() {
            self.set_status("Nothing found.");
            return true;
        }
        let title = format!("Search \"{}\": {} found", term, hits.len());
        let text = listing(hits);
        self.show_listing(title, text);
        true
    }

    fn show_listing(&mut self, title: String, text: String) {
        self.display = Display::Listing { title };
        self.content = ReflowedText::new(text, self.viewport.body_width());
        self.scroll.reset();
        self.settle_mode();
    }

    /// Append a note from raw input and move the cursor to it.
    pub fn append_note(&mut self, raw: &str) -> bool {
        let accepted = match accept_body(raw, self.options.max_note_len) {
            Ok(accepted) => accepted,
            Err(e) => {
                self.set_status(format!("{e}."));
                return true;
            }
        };
        if let Some(warning) = &accepted.warning {
            warn!(%warning, "Note truncated");
            self.set_status(format!("{warning}."));
        }
        let number = self
            .store
            .append(accepted.body, self.options.origin.clone())
            .number;
        self.dirty = true;
        self.cursor = Cursor::Note(number);
        self.display = Display::Note;
        self.rebuild_content();
        true
    }

    /// Replace the body of note `number` from raw input.
    pub fn edit_note(&mut self, number: usize, raw: &str) -> bool {
        let accepted = match accept_body(raw, self.options.max_note_len) {
            Ok(accepted) => accepted,
            Err(InputError::NoInput) => {
                self.set_status("Nothing changed.");
                return true;
            }
            Err(e) => {
                self.set_status(format!("{e}."));
                return true;
            }
        };
        if let Some(warning) = &accepted.warning {
            warn!(%warning, "Edited note truncated");
            self.set_status(format!("{warning}."));
        }
        match self
            .store
            .replace_body(number, accepted.body)
            .map(|edited| edited.number)
        {
            Ok(edited) => {
                self.cursor = Cursor::Note(edited);
                self.dirty = true;
                self.display = Display::Note;
                self.rebuild_content();
            }
            Err(e) => self.report(e),
        }
        true
    }

    /// Delete the note under the cursor and return to the root.
    pub fn delete_current(&mut self) -> bool {
        match self.store.delete_at(self.cursor.number()) {
            Ok(_) => {
                self.dirty = true;
                self.cursor = Cursor::Root;
                self.display = Display::Note;
                self.rebuild_content();
                self.set_status("Deleted.");
            }
            Err(e) => self.report(e),
        }
        true
    }

    /// Delete every note and return to the root.
    pub fn delete_all(&mut self) -> bool {
        self.store.delete_all();
        self.dirty = true;
        self.cursor = Cursor::Root;
        self.display = Display::Note;
        self.rebuild_content();
        self.set_status("All notes deleted.");
        true
    }

    fn begin_delete_current(&mut self) -> bool {
        match self.cursor {
            Cursor::Note(n) if self.store.get(self.cursor).is_some() => {
                self.open_prompt(Prompt::new(PromptKind::ConfirmDelete(n)))
            }
            _ => {
                self.set_status("Nothing to delete.");
                true
            }
        }
    }

    fn begin_delete_all(&mut self) -> bool {
        if self.store.is_empty() {
            self.set_status("Nothing to delete.");
            return true;
        }
        self.open_prompt(Prompt::new(PromptKind::ConfirmDeleteAll))
    }

    fn begin_search(&mut self) -> bool {
        if self.store.is_empty() {
            self.set_status("Nothing to search.");
            return true;
        }
        self.open_prompt(Prompt::new(PromptKind::Search))
    }

    fn begin_edit(&mut self) -> bool {
        match self.store.get(self.cursor) {
            Some(current) => {
                let prompt = Prompt::prefilled(
                    PromptKind::EditNote(current.number),
                    current.note.body(),
                );
                self.open_prompt(prompt)
            }
            None => {
                self.set_status("Nothing to edit.");
                true
            }
        }
    }

    fn open_prompt(&mut self, prompt: Prompt) -> bool {
        self.mode = Mode::Prompt(prompt);
        true
    }

    fn report(&mut self, error: StoreError) {
        debug!(%error, "Store miss");
        self.set_status(format!("{error}."));
    }

    /// Scroll the body down one line.
    pub fn scroll_down(&mut self) -> bool {
        if !self.is_browsing() {
            return false;
        }
        self.scroll.down(self.content.line_count());
        true
    }

    /// Scroll the body up one line.
    pub fn scroll_up(&mut self) -> bool {
        if !self.is_browsing() {
            return false;
        }
        self.scroll.up();
        true
    }

    /// End the session.
    pub fn quit(&mut self) -> bool {
        info!("Quit requested");
        self.mode = Mode::Quit;
        true
    }

    // ===== Menu =====

    /// Give the footer menu focus.
    pub fn open_menu(&mut self) -> bool {
        self.mode = Mode::MenuActive {
            selected: MenuItem::default(),
        };
        true
    }

    /// Handle a key while the menu has focus.
    ///
    /// Left/Right move the highlight, Enter runs the item, anything else
    /// closes the menu.
    pub fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        let Mode::MenuActive { selected } = self.mode else {
            return false;
        };
        match key.code {
            KeyCode::Left => {
                self.mode = Mode::MenuActive {
                    selected: selected.prev(),
                };
            }
            KeyCode::Right => {
                self.mode = Mode::MenuActive {
                    selected: selected.next(),
                };
            }
            KeyCode::Enter => {
                self.settle_mode_from_menu();
                self.activate(selected);
            }
            _ => self.settle_mode_from_menu(),
        }
        true
    }

    fn settle_mode_from_menu(&mut self) {
        self.mode = Mode::Browsing;
        self.settle_mode();
    }

    /// Run a menu item.
    pub fn activate(&mut self, item: MenuItem) -> bool {
        debug!(item = item.label(), "Menu item");
        match item {
            MenuItem::New => self.open_prompt(Prompt::new(PromptKind::NewNote)),
            MenuItem::Browse => {
                let first = self.store.next(Cursor::Root);
                self.move_cursor(first);
                true
            }
            MenuItem::Edit => self.begin_edit(),
            MenuItem::Search => self.begin_search(),
            MenuItem::Quit => self.quit(),
            MenuItem::Help => {
                self.help_visible = true;
                true
            }
        }
    }

    // ===== Prompt =====

    /// Handle a key while a prompt has focus.
    pub fn handle_prompt_key(&mut self, key: KeyEvent) -> bool {
        let Mode::Prompt(prompt) = &mut self.mode else {
            return false;
        };

        if prompt.kind.is_confirmation() {
            let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
            let kind = prompt.kind;
            self.close_prompt();
            if !confirmed {
                self.set_status("Nothing deleted.");
                return true;
            }
            return match kind {
                PromptKind::ConfirmDelete(_) => self.delete_current(),
                PromptKind::ConfirmDeleteAll => self.delete_all(),
                _ => true,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.close_prompt();
            }
            KeyCode::Enter => {
                let kind = prompt.kind;
                let text = prompt.input.text().to_string();
                self.close_prompt();
                self.submit(kind, &text);
            }
            KeyCode::Backspace => prompt.input.backspace(),
            KeyCode::Delete => prompt.input.delete(),
            KeyCode::Left => prompt.input.left(),
            KeyCode::Right => prompt.input.right(),
            KeyCode::Home => prompt.input.home(),
            KeyCode::End => prompt.input.end(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.insert(ch)
            }
            _ => {}
        }
        true
    }

    fn submit(&mut self, kind: PromptKind, text: &str) {
        match kind {
            PromptKind::NewNote => {
                self.append_note(text);
            }
            PromptKind::EditNote(n) => {
                self.edit_note(n.get(), text);
            }
            PromptKind::Search => {
                self.search(text);
            }
            PromptKind::ConfirmDelete(_) | PromptKind::ConfirmDeleteAll => {}
        }
    }

    fn close_prompt(&mut self) {
        self.mode = Mode::Browsing;
        self.settle_mode();
    }

    // ===== Resize =====

    /// Record a terminal resize. Applied by [`Session::apply_pending_resize`].
    pub fn request_resize(&mut self, viewport: ViewportDimensions) {
        self.pending_resize = Some(viewport);
    }

    /// Apply the last recorded resize, if any. Returns true if one was applied.
    ///
    /// The text is rewrapped for the new width and the scroll window keeps
    /// its offset, clamped to the new bounds.
    pub fn apply_pending_resize(&mut self) -> bool {
        let Some(viewport) = self.pending_resize.take() else {
            return false;
        };
        debug!(width = viewport.width, height = viewport.height, "Resize");
        self.viewport = viewport;
        self.content.rewrap(viewport.body_width());
        self.scroll
            .resize(viewport.body_rows(), self.content.line_count());
        self.settle_mode();
        true
    }

    // ===== Internals =====

    fn is_browsing(&self) -> bool {
        matches!(self.mode, Mode::Browsing | Mode::ScrollingMessage)
    }

    /// Re-derive the body text from the cursor, reset scrolling and mode.
    fn rebuild_content(&mut self) {
        let text = self
            .store
            .get(self.cursor)
            .map(|current| current.note.body().to_string())
            .unwrap_or_default();
        self.content = ReflowedText::new(text, self.viewport.body_width());
        self.scroll = ScrollWindow::new(self.viewport.body_rows());
        self.settle_mode();
    }

    /// Pick Browsing or ScrollingMessage from the current text height.
    fn settle_mode(&mut self) {
        if self.is_browsing() {
            self.mode = if self.scroll.overflows(self.content.line_count()) {
                Mode::ScrollingMessage
            } else {
                Mode::Browsing
            };
        }
    }
}

/// Records separated by blank lines.
fn listing(records: impl IntoIterator<Item = String>) -> String {
    records
        .into_iter()
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
