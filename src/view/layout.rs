//! Screen layout rendering.
//!
//! Header bar (1 line) + body window + footer (1 line). The body shows the
//! visible slice of the session's reflowed text; the footer shows, in order
//! of priority, an open prompt, the status message, or the menu.

use super::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use super::styles::ScreenStyles;
use crate::state::{Display, MenuItem, Mode, Prompt, Session};
use crate::store::Cursor;
use crate::view_state::display_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Application name and version shown at the root position.
pub fn title() -> String {
    format!("Terminote {}", env!("CARGO_PKG_VERSION"))
}

/// Render header, body and footer for the session.
pub fn render_layout(frame: &mut Frame, session: &Session, styles: &ScreenStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session, styles);
    render_body(frame, chunks[1], session, styles);
    render_footer(frame, chunks[2], session, styles);
}

/// Header: the title at the root, `origin | Note #n | time` on a note,
/// the listing title on a listing.
fn render_header(frame: &mut Frame, area: Rect, session: &Session, styles: &ScreenStyles) {
    frame.render_widget(Paragraph::new("").style(styles.header), area);

    if let Display::Listing { title } = session.display() {
        frame.render_widget(Paragraph::new(title.as_str()).style(styles.header), area);
        return;
    }

    let Some(current) = session.store().get(session.cursor()) else {
        frame.render_widget(Paragraph::new(title()).style(styles.header), area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let parts = [
        (current.note.origin().to_string(), Alignment::Left),
        (format!("Note #{}", current.number), Alignment::Center),
        (current.note.created_at().to_string(), Alignment::Right),
    ];
    for ((text, alignment), column) in parts.into_iter().zip(columns.iter()) {
        frame.render_widget(
            Paragraph::new(text).alignment(alignment).style(styles.header),
            *column,
        );
    }
}

/// Body: the visible lines, or the summary at the root.
fn render_body(frame: &mut Frame, area: Rect, session: &Session, styles: &ScreenStyles) {
    if session.cursor() == Cursor::Root && *session.display() == Display::Note {
        let count = session.store().count();
        let lines = vec![
            Line::from(format!("You have {count} notes stored.")),
            Line::default(),
            Line::from(Span::styled(
                "d: browse  w: write  Ctrl+f: menu  m: help",
                super::styles::MUTED_TEXT,
            )),
        ];
        frame.render_widget(Paragraph::new(lines).style(styles.body), area);
        return;
    }

    let content = session.content();
    let scroll = session.scroll();
    let visible = scroll.visible(content.line_count());
    let highlight_row = matches!(session.mode(), Mode::ScrollingMessage).then(|| scroll.row());

    let lines: Vec<Line> = content
        .lines(visible.start, visible.end)
        .enumerate()
        .map(|(row, text)| {
            let style = if Some(row) == highlight_row {
                styles.body_cursor
            } else {
                styles.body
            };
            Line::from(Span::styled(text.trim_end_matches('\n'), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Footer: prompt, status message, or the menu bar.
fn render_footer(frame: &mut Frame, area: Rect, session: &Session, styles: &ScreenStyles) {
    match session.mode() {
        Mode::Prompt(prompt) => render_prompt(frame, area, prompt, styles),
        Mode::MenuActive { selected } => render_menu(frame, area, Some(*selected), styles),
        _ => match session.status() {
            Some(message) => {
                frame.render_widget(Paragraph::new(message).style(styles.status), area);
            }
            None => render_menu(frame, area, None, styles),
        },
    }
}

/// Menu bar. Items are highlighted only while the menu has focus.
fn render_menu(frame: &mut Frame, area: Rect, selected: Option<MenuItem>, styles: &ScreenStyles) {
    let titles: Vec<Line> = MenuItem::ALL
        .iter()
        .map(|item| Line::from(item.label()))
        .collect();

    let mut tabs = Tabs::new(titles).style(styles.menu);

    // Tabs always highlights something; without focus, highlight with the
    // plain menu style so nothing stands out.
    tabs = match selected {
        Some(item) => tabs.highlight_style(styles.menu_selected).select(item.index()),
        None => tabs.highlight_style(styles.menu),
    };

    frame.render_widget(tabs, area);
}

/// First character of `text` to show so the cursor stays inside `width` columns.
fn prompt_scroll(cursor: usize, width: usize) -> usize {
    cursor.saturating_sub(width.saturating_sub(1))
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt, styles: &ScreenStyles) {
    let label = format!("{}: ", prompt.kind.label());
    let label_width = display_width(&label);

    if prompt.kind.is_confirmation() {
        let line = Line::from(Span::styled(label, styles.prompt_label));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let input_width = usize::from(area.width).saturating_sub(label_width);
    let skip = prompt_scroll(prompt.input.cursor(), input_width);
    let shown: String = prompt
        .input
        .text()
        .chars()
        .skip(skip)
        .take(input_width)
        .collect();

    let line = Line::from(vec![
        Span::styled(label, styles.prompt_label),
        Span::styled(shown, Style::default()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let before_cursor: String = prompt
        .input
        .text()
        .chars()
        .skip(skip)
        .take(prompt.input.cursor() - skip)
        .collect();
    let x = area.x as usize + label_width + display_width(&before_cursor);
    let x = u16::try_from(x).unwrap_or(u16::MAX).min(area.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, area.y));
}
