//! UI module for rendering the TUI

mod components;
mod forms;
mod inbox;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Contact => forms::draw_contact(frame, main_area, app),
        View::Inbox => inbox::draw_list(frame, main_area, app),
        View::SubmissionDetail => inbox::draw_detail(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog sits above everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.contact.fallback_email());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::intake::MockIntakeClientTrait;
    use crate::intake::{InquiryStatus, SubmissionRecord};
    use crate::state::{ContactField, FieldUpdate, ProjectType};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use url::Url;
    use uuid::Uuid;

    fn app() -> App {
        let settings = Settings {
            backend_url: Url::parse("http://127.0.0.1:8001").unwrap(),
            fallback_email: "owner@example.com".to_string(),
            request_timeout: None,
            inbox_page_size: 20,
        };
        App::with_client(settings, Box::new(MockIntakeClientTrait::new()))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_contact_form_shows_inline_errors() {
        let mut app = app();
        app.state
            .contact
            .update_field(FieldUpdate::Name("Jane".into()));
        let _ = app.state.contact.begin_submit();
        assert!(app.state.contact.errors().contains(ContactField::Email));

        let screen = render(&app);
        assert!(screen.contains("Email is required"));
        assert!(!screen.contains("Name is required"));
    }

    #[test]
    fn test_error_dialog_offers_fallback_email() {
        let mut app = app();
        app.push_error("Server busy");
        let screen = render(&app);
        assert!(screen.contains("Server busy"));
        assert!(screen.contains("owner@example.com"));
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = app();
        for view in [View::Contact, View::Inbox, View::SubmissionDetail] {
            app.state.current_view = view;
            let screen = render(&app);
            assert!(screen.contains(view.title()));
        }
    }

    #[test]
    fn test_send_button_shows_sending_for_queued_valid_form() {
        let mut app = app();
        for update in [
            FieldUpdate::Name("Jane".into()),
            FieldUpdate::Email("jane@example.com".into()),
            FieldUpdate::ProjectType(Some(ProjectType::Web)),
            FieldUpdate::Message("A portfolio site for my studio.".into()),
        ] {
            app.state.contact.update_field(update);
        }
        assert!(!render(&app).contains("Sending..."));

        app.request_submit();
        assert!(render(&app).contains("Sending..."));
    }

    #[test]
    fn test_queued_invalid_form_keeps_send_label() {
        let mut app = app();
        app.request_submit();
        let screen = render(&app);
        assert!(screen.contains("Send Message"));
        assert!(!screen.contains("Sending..."));
    }

    #[test]
    fn test_detail_shows_source_address() {
        let mut app = app();
        let mut record = SubmissionRecord {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            project_type: ProjectType::Dashboard,
            budget: None,
            message: "Need a metrics dashboard.".to_string(),
            status: InquiryStatus::Read,
            submitted_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
            ip_address: Some("203.0.113.7".to_string()),
        };
        app.state.current_view = View::SubmissionDetail;
        app.state.selected_submission = Some(record.clone());
        let screen = render(&app);
        assert!(screen.contains("Source"));
        assert!(screen.contains("203.0.113.7"));

        record.ip_address = None;
        app.state.selected_submission = Some(record);
        let screen = render(&app);
        assert!(screen.contains("Source    -"));
    }
}
