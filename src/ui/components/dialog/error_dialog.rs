//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render an error dialog overlay centered on the screen.
///
/// `fallback_email` is offered for copying so the user can reach out directly.
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, fallback_email: &str) {
    let hint = vec![
        key_span("Enter"),
        Span::raw("/"),
        key_span("Esc"),
        Span::raw(" dismiss  "),
        key_span("c"),
        Span::raw(format!(" copy {fallback_email}")),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
