//! Key binding reference drawn over the screen.
//!
//! Opened with `m` or the Help menu item; `Esc` or `m` closes it.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{MUTED_TEXT, SECTION_HEADER};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the overlay in the middle of the frame, listing the keys in
/// `bindings`.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or m to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// `percent` of `length`, computed wide so large terminals cannot overflow.
fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}

/// A rect of the given size percentages centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = percent_of(area.width, percent_x);
    let height = percent_of(area.height, percent_y);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// How a key is written in the overlay, e.g. `Ctrl+f` or `↑`.
fn key_label(key: KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{name}")
    } else {
        name
    }
}

fn binding(keys: String, description: &'static str) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), key_style),
        Span::raw(description),
    ])
}

/// One line per bound action; unbound actions are left out.
fn action_lines(
    bindings: &KeyBindings,
    actions: &[(KeyAction, &'static str)],
) -> Vec<Line<'static>> {
    actions
        .iter()
        .filter_map(|&(action, description)| {
            let keys = bindings.keys_for(action);
            if keys.is_empty() {
                return None;
            }
            let labels: Vec<String> = keys.into_iter().map(key_label).collect();
            Some(binding(labels.join(", "), description))
        })
        .collect()
}

/// Bindings grouped under section headings.
fn build_help_content(bindings: &KeyBindings) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Notes", SECTION_HEADER))];
    lines.extend(action_lines(
        bindings,
        &[
            (KeyAction::NewNote, "Write a new note"),
            (KeyAction::PrevNote, "Previous note"),
            (KeyAction::NextNote, "Next note"),
            (KeyAction::PrintAll, "Show all notes"),
            (KeyAction::Search, "Search notes"),
            (KeyAction::DeleteCurrent, "Delete this note"),
            (KeyAction::DeleteAll, "Delete all notes"),
        ],
    ));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Scrolling", SECTION_HEADER)));
    lines.extend(action_lines(
        bindings,
        &[
            (KeyAction::ScrollUp, "Scroll up"),
            (KeyAction::ScrollDown, "Scroll down"),
        ],
    ));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Menu", SECTION_HEADER)));
    lines.extend(action_lines(bindings, &[(KeyAction::OpenMenu, "Open the menu")]));
    // The open menu reads keys directly.
    lines.push(binding("← / →".to_string(), "Choose an item"));
    lines.push(binding("Enter".to_string(), "Run it"));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Application", SECTION_HEADER)));
    lines.extend(action_lines(
        bindings,
        &[
            (KeyAction::Help, "Toggle this help"),
            (KeyAction::Quit, "Save and quit"),
        ],
    ));

    lines
}
