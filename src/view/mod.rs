//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod styles;

pub use help::render_help_overlay;
pub use layout::{render_layout, title};
pub use styles::{ColorConfig, ScreenStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, PersistError};
use crate::state::{Mode, Session, SessionOptions};
use crate::store::{codec, NoteStore};
use crate::view_state::ViewportDimensions;
use constants::POLL_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    session: Session,
    key_bindings: KeyBindings,
    styles: ScreenStyles,
    data_path: PathBuf,
    save_on_change: bool,
    /// Store changed since the last successful save.
    unsaved: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(store: NoteStore, config: &ResolvedConfig, data_path: PathBuf) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let options = SessionOptions {
            max_note_len: config.max_note_len,
            ..SessionOptions::default()
        };

        Ok(Self::with_terminal(
            terminal,
            store,
            options,
            data_path,
            config.save_on_change,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q, Ctrl+C or the Quit menu item). Unsaved
    /// changes are written even when the loop stops on an error.
    pub fn run(&mut self) -> Result<(), AppError> {
        let result = self.event_loop(|| {
            if event::poll(POLL_INTERVAL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        });
        self.conclude(result)
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal.
    ///
    /// The session is sized from the terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        store: NoteStore,
        options: SessionOptions,
        data_path: PathBuf,
        save_on_change: bool,
    ) -> Self {
        let viewport = match terminal.size() {
            Ok(size) => ViewportDimensions::new(size.width, size.height),
            Err(_) => ViewportDimensions::default(),
        };
        Self {
            terminal,
            session: Session::new(store, viewport, options),
            key_bindings: KeyBindings::default(),
            styles: ScreenStyles::default(),
            data_path,
            save_on_change,
            unsaved: false,
        }
    }

    /// Show `notice` in the status line until the first key press.
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        if let Some(notice) = notice {
            self.session.set_status(notice);
        }
        self
    }

    /// The session being displayed.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Draw, then handle events from `next_event` until a key quits.
    ///
    /// `next_event` returns `Ok(None)` when nothing arrived in time.
    fn event_loop<F>(&mut self, mut next_event: F) -> Result<(), AppError>
    where
        F: FnMut() -> io::Result<Option<Event>>,
    {
        self.draw()?;

        loop {
            let mut redraw = false;
            match next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    redraw = true;
                }
                Some(Event::Resize(width, height)) => {
                    self.session
                        .request_resize(ViewportDimensions::new(width, height));
                }
                _ => {}
            }

            // At most one resize per iteration, however many arrived.
            if self.session.apply_pending_resize() || redraw {
                self.draw()?;
            }
        }
    }

    /// Save unsaved changes, then report the loop's error before the save's.
    fn conclude(&mut self, result: Result<(), AppError>) -> Result<(), AppError> {
        let saved = self.persist();
        if let Err(e) = &result {
            error!(error = %e, "Event loop failed");
        }
        result?;
        saved?;
        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.session.clear_status();

        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.session.quit();
            return true;
        }

        if self.session.help_visible() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('m') => self.session.set_help_visible(false),
                KeyCode::Char('q') => {
                    self.session.quit();
                }
                _ => {}
            }
            return self.session.is_quit();
        }

        match self.session.mode() {
            Mode::Prompt(_) => {
                self.session.handle_prompt_key(key);
            }
            Mode::MenuActive { .. } => {
                self.session.handle_menu_key(key);
            }
            _ => {
                if let Some(action) = self.key_bindings.get(key) {
                    debug!(?action, "Key action");
                    self.session.apply(action);
                }
            }
        }

        if self.session.take_dirty() {
            self.unsaved = true;
            if self.save_on_change {
                if let Err(e) = self.save() {
                    self.session.set_status(format!("Save failed: {e}"));
                }
            }
        }

        self.session.is_quit()
    }

    fn save(&mut self) -> Result<(), PersistError> {
        match codec::save(&self.data_path, self.session.store()) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Save failed");
                Err(e)
            }
        }
    }

    /// Save on the way out if anything changed since the last save.
    fn persist(&mut self) -> Result<(), PersistError> {
        if self.unsaved {
            info!(path = ?self.data_path, "Saving before exit");
            self.save()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), AppError> {
        let session = &self.session;
        let styles = &self.styles;
        let key_bindings = &self.key_bindings;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, session, styles);
            if session.help_visible() {
                help::render_help_overlay(frame, key_bindings);
            }
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), AppError> {
        self.draw()
    }

    /// Apply a queued resize the way one loop iteration does (test-only accessor)
    pub(crate) fn resize_test(&mut self, width: u16, height: u16) {
        self.session
            .request_resize(ViewportDimensions::new(width, height));
        self.session.apply_pending_resize();
    }

    /// Save as the event loop does on quit (test-only accessor)
    pub(crate) fn persist_test(&mut self) -> Result<(), PersistError> {
        self.persist()
    }

    /// Run the event loop over a fixed list of events, then save as `run`
    /// does (test-only accessor)
    ///
    /// Running out of events fails the loop like a lost terminal would.
    pub(crate) fn run_events_test(
        &mut self,
        events: impl IntoIterator<Item = io::Result<Event>>,
    ) -> Result<(), AppError> {
        let mut events = events.into_iter();
        let result = self.event_loop(|| match events.next() {
            Some(event) => event.map(Some),
            None => Err(io::Error::other("event source closed")),
        });
        self.conclude(result)
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Run the full-screen interface over `store` until the user quits.
///
/// `notice` is shown in the status line of the first frame. Restores the
/// terminal even when the loop fails.
/// Logging must be initialized by caller before calling this function.
pub fn run_interactive(
    store: NoteStore,
    config: &ResolvedConfig,
    data_path: PathBuf,
    notice: Option<String>,
) -> Result<(), AppError> {
    let mut app = TuiApp::new(store, config, data_path)?.with_notice(notice);

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
