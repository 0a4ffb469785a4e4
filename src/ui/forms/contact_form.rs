//! Contact form view

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::{ContactField, PROFILE};
use crate::ui::components::{render_send_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the owner's details panel
const PROFILE_WIDTH: u16 = 36;

/// Draw the contact view: the form with the owner's details alongside
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(PROFILE_WIDTH)])
        .split(area);

    draw_form(frame, columns[0], app);
    draw_profile(frame, columns[1]);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name | Email
            Constraint::Length(3),             // Company | Project type
            Constraint::Length(3),             // Budget
            Constraint::Min(6),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(1),             // Help
        ])
        .split(area);

    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let top = halves(rows[0]);
    let middle = halves(rows[1]);

    let field_areas = [
        (ContactField::Name, top[0]),
        (ContactField::Email, top[1]),
        (ContactField::Company, middle[0]),
        (ContactField::ProjectType, middle[1]),
        (ContactField::Budget, rows[2]),
        (ContactField::Message, rows[3]),
    ];

    let contact = &app.state.contact;
    let active = app.state.active_contact_field();
    for (field, field_area) in field_areas {
        draw_field(
            frame,
            field_area,
            FieldView {
                field,
                value: contact.form().display_value(field),
                error: contact.errors().get(field),
                is_active: active == Some(field),
            },
        );
    }

    let button_area = Rect {
        width: rows[4].width.min(20),
        ..rows[4]
    };
    render_send_button(
        frame,
        button_area,
        app.state.is_send_button_active(),
        app.is_sending(),
    );

    draw_help_text(
        frame,
        rows[5],
        &format!(
            "Tab/Shift+Tab: fields  ←/→: choose option  Enter: next/newline  {SEND_SHORTCUT}: send"
        ),
    );
}

fn draw_profile(frame: &mut Frame, area: Rect) {
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(
            "Let's Connect",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Email", label)),
        Line::from(PROFILE.email),
        Line::from(""),
        Line::from(Span::styled("Location", label)),
        Line::from(PROFILE.location),
        Line::from(""),
        Line::from(Span::styled("Availability", label)),
        Line::from(PROFILE.availability),
    ];

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", PROFILE.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}
