//! Layout components (header tabs, status bar)

use super::components::{render_tab_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header tabs as (function key, label)
const TABS: &[(&str, &str)] = &[("F1", "Contact"), ("F2", "Inbox")];

/// Width of one header tab
const TAB_WIDTH: u16 = 14;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header tabs
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = TABS
        .iter()
        .map(|_| Constraint::Length(TAB_WIDTH))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, (key, label)) in TABS.iter().enumerate() {
        let is_selected = match idx {
            0 => app.state.current_view.is_form_view(),
            1 => matches!(
                app.state.current_view,
                View::Inbox | View::SubmissionDetail
            ),
            _ => false,
        };
        render_tab_button(frame, chunks[idx], key, label, is_selected);
    }

    let backend = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.settings.backend_url),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(ratatui::layout::Alignment::Right);
    let backend_area = chunks[TABS.len()];
    frame.render_widget(
        backend,
        Rect {
            y: backend_area.y + 1,
            height: 1,
            ..backend_area
        },
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    // Toast replaces the hints while it is visible
    if let Some(toast) = &app.state.toast {
        spans.push(Span::styled(
            format!(" ✓ {} ", toast.title),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(&toast.message, Style::default().fg(Color::White)));
    } else {
        spans.push(Span::styled(
            format!(" {}", get_view_hints(&app.state.current_view)),
            Style::default().fg(Color::Gray),
        ));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Contact => format!("Tab:next  ←/→:option  {SEND_SHORTCUT}:send  F2:inbox"),
        View::Inbox => "j/k:nav  Enter:open  f:filter  n/p:page  r:refresh  F1:contact".to_string(),
        View::SubmissionDetail => "1-4:set status  j/k:scroll  Esc:back".to_string(),
    }
}
