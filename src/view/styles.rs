//! Screen styling.
//!
//! Colors can be switched off with the `NO_COLOR` environment variable;
//! modifiers (bold, reverse) are kept so the menu highlight stays visible.

use ratatui::style::{Color, Modifier, Style};

/// Category headings in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// De-emphasised hint text.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors are on unless `NO_COLOR` is set (to any value).
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicit setting, for tests.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ScreenStyles =====

/// Styles for the three screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenStyles {
    /// Header bar.
    pub header: Style,
    /// Note or listing text.
    pub body: Style,
    /// The row cursor while a long note is scrolled.
    pub body_cursor: Style,
    /// Footer menu items.
    pub menu: Style,
    /// Highlighted menu item.
    pub menu_selected: Style,
    /// Prompt label.
    pub prompt_label: Style,
    /// Status line message.
    pub status: Style,
}

impl ScreenStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::new().fg(Color::Black).bg(Color::Cyan),
                body: Style::new(),
                body_cursor: Style::new().add_modifier(Modifier::BOLD),
                menu: Style::new().fg(Color::White),
                menu_selected: Style::new()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                prompt_label: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                status: Style::new().fg(Color::Green),
            }
        } else {
            Self {
                header: Style::new().add_modifier(Modifier::REVERSED),
                body: Style::new(),
                body_cursor: Style::new().add_modifier(Modifier::BOLD),
                menu: Style::new(),
                menu_selected: Style::new().add_modifier(Modifier::REVERSED),
                prompt_label: Style::new().add_modifier(Modifier::BOLD),
                status: Style::new(),
            }
        }
    }
}

impl Default for ScreenStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }
}
