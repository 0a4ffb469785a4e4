//! Bordered buttons used by the header tabs and the contact form

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered one-line button
pub const BUTTON_HEIGHT: u16 = 3;

/// Draw a one-line bordered label. Cyan marks focus; disabled wins over focus.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a header tab with its function key
pub fn render_tab_button(frame: &mut Frame, area: Rect, key: &str, label: &str, is_selected: bool) {
    let content = format!("{key} {label}");
    render_button(frame, area, &content, is_selected, true);
}

/// Render the Send button; it is disabled while a request is in flight
pub fn render_send_button(frame: &mut Frame, area: Rect, is_selected: bool, is_sending: bool) {
    let content = if is_sending { "Sending..." } else { "Send Message" };
    render_button(frame, area, content, is_selected, !is_sending);
}
