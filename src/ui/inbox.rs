//! Inbox list and inquiry detail views

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::intake::{InquiryStatus, SubmissionRecord};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Timestamp format for list rows and the detail header
const SUBMITTED_FORMAT: &str = "%Y-%m-%d %H:%M";

fn status_color(status: InquiryStatus) -> Color {
    match status {
        InquiryStatus::New => Color::Green,
        InquiryStatus::Read => Color::Yellow,
        InquiryStatus::Replied => Color::Cyan,
        InquiryStatus::Archived => Color::DarkGray,
    }
}

fn status_span(status: InquiryStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", status.label()),
        Style::default().fg(status_color(status)),
    )
}

/// Draw the inbox list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let inbox = &app.state.inbox;
    let (page, pages) = inbox.page_position(app.settings.inbox_page_size);
    let title = format!(" Inbox - {} ", inbox.filter_label());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Filter: {}", inbox.filter_label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" [f]cycle", Style::default().fg(Color::DarkGray)),
        Span::raw(" | "),
        Span::raw(format!("Page {page}/{pages} ({} total)", inbox.total)),
        Span::styled(" [n]ext [p]rev [r]efresh", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, chunks[0]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if inbox.submissions.is_empty() {
        let message = if inbox.loaded {
            "No inquiries found.\nPress 'f' to change the filter or 'r' to refresh."
        } else {
            "Inbox not loaded.\nPress 'r' to load it."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = inbox
        .submissions
        .iter()
        .enumerate()
        .map(|(idx, submission)| {
            let is_selected = idx == inbox.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else if submission.status == InquiryStatus::New {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    submission.submitted_at.format(SUBMITTED_FORMAT).to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                status_span(submission.status),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", submission.project_type.label()),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(" "),
                Span::styled(submission.headline(), style),
            ]))
        })
        .collect();

    render_scrollable_list(frame, chunks[1], List::new(items).block(block), inbox.selected_index);
}

/// Draw the detail of the open inquiry
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(submission) = &app.state.selected_submission else {
        let content = Paragraph::new("No inquiry selected")
            .block(Block::default().title(" Inquiry ").borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    };

    let content = Paragraph::new(detail_lines(submission))
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title(format!(" {} ", submission.headline()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(content, area);
}

fn detail_lines(submission: &SubmissionRecord) -> Vec<Line<'_>> {
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let row = |name: &'static str, value: String| {
        Line::from(vec![Span::styled(format!("{name:<10}"), label), Span::raw(value)])
    };

    let mut lines = vec![
        row("From", format!("{} <{}>", submission.name, submission.email)),
        row(
            "Company",
            submission
                .company
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "-".to_string()),
        ),
        row("Project", submission.project_type.label().to_string()),
        row(
            "Budget",
            submission
                .budget
                .map(|b| b.label().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        row(
            "Received",
            submission.submitted_at.format(SUBMITTED_FORMAT).to_string(),
        ),
        row(
            "Source",
            submission
                .ip_address
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        ),
        Line::from(vec![
            Span::styled(format!("{:<10}", "Status"), label),
            status_span(submission.status),
        ]),
        Line::from(""),
    ];
    lines.extend(submission.message.lines().map(Line::from));
    lines.push(Line::from(""));

    let mut hint = vec![Span::styled("Set status: ", Style::default().fg(Color::DarkGray))];
    for (idx, status) in InquiryStatus::ALL.iter().enumerate() {
        hint.push(Span::styled(
            format!("{}:{} ", idx + 1, status.label()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(hint));
    lines
}
