//! Field rendering utilities for forms

use crate::state::ContactField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What a single field shows this frame
pub struct FieldView<'a> {
    pub field: ContactField,
    /// Entered value, or `None` to show the placeholder
    pub value: Option<String>,
    /// Validation error recorded against the field
    pub error: Option<&'a str>,
    pub is_active: bool,
}

/// Draw a contact form field, with its error on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let FieldView {
        field,
        value,
        error,
        is_active,
    } = view;

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let cursor = if is_active && !field.is_select() {
        "▌"
    } else {
        ""
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = match &value {
        Some(text) if field.is_multiline() => text
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect(),
        Some(text) => vec![Line::from(Span::styled(text.clone(), text_style))],
        None => vec![Line::from(Span::styled(field.placeholder(), placeholder_style))],
    };

    if value.is_none() {
        // Cursor goes before the placeholder
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, cursor_span);
        }
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor_span);
    }

    if field.is_select() && is_active {
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, Span::styled("◀ ", Style::default().fg(Color::Cyan)));
            first.spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw a dimmed help line under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
