//! Application state and core logic

use crate::config::Settings;
use crate::intake::{IntakeClient, IntakeClientTrait, InquiryStatus};
use crate::state::{AppState, ContactField, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Toast title for a delivered inquiry
const SENT_TITLE: &str = "Message Sent!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the contact-intake backend
    pub intake: Box<dyn IntakeClientTrait>,
    /// Resolved runtime settings
    pub settings: Settings,
    /// Whether the app should quit
    quit: bool,
    /// A send was requested and runs on the next loop turn
    pending_submit: bool,
}

impl App {
    /// Create a new App talking to the configured backend
    pub fn new(settings: Settings) -> Result<Self> {
        let intake = IntakeClient::new(&settings.backend_url, settings.request_timeout)?;
        Ok(Self::with_client(settings, Box::new(intake)))
    }

    /// Create an App around an existing intake client
    pub fn with_client(settings: Settings, intake: Box<dyn IntakeClientTrait>) -> Self {
        Self {
            state: AppState::new(settings.fallback_email.clone()),
            intake,
            settings,
            quit: false,
            pending_submit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// True when a send was requested but has not run yet
    pub fn has_pending_submission(&self) -> bool {
        self.pending_submit
    }

    /// True while the form is on its way to the backend, or about to be.
    /// A queued send of an invalid form never reaches the network.
    pub fn is_sending(&self) -> bool {
        let contact = &self.state.contact;
        contact.status().is_submitting()
            || (self.pending_submit && contact.validate().is_empty())
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.state.dismiss_error(),
                KeyCode::Char('c') => self.copy_fallback_email(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => {
                self.navigate(View::Contact);
                return Ok(());
            }
            KeyCode::F(2) => {
                self.open_inbox().await;
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            View::Inbox => self.handle_inbox_key(key).await,
            View::SubmissionDetail => self.handle_detail_key(key).await,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.scroll_offset = 0;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
            self.state.scroll_offset = 0;
        }
    }

    /// Handle keys in the Contact view
    fn handle_contact_key(&mut self, key: KeyEvent) {
        let field = self.state.active_contact_field();

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_submit();
            }
            KeyCode::Enter if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.request_submit();
            }
            KeyCode::Enter => match field {
                None => self.request_submit(),
                Some(ContactField::Message) => {
                    self.state.contact.push_char(ContactField::Message, '\n');
                }
                Some(_) => self.state.next_form_field(),
            },
            KeyCode::Left | KeyCode::Right if field.is_some_and(|f| f.is_select()) => {
                if let Some(f) = field {
                    self.state
                        .contact
                        .cycle_option(f, key.code == KeyCode::Right);
                }
            }
            KeyCode::Char(' ') if field.is_some_and(|f| f.is_select()) => {
                if let Some(f) = field {
                    self.state.contact.cycle_option(f, true);
                }
            }
            KeyCode::Backspace | KeyCode::Delete if field.is_some_and(|f| f.is_select()) => {
                if let Some(f) = field {
                    self.state.contact.clear_option(f);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(f) = field {
                    self.state.contact.push_char(f, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(f) = field {
                    self.state.contact.pop_char(f);
                }
            }
            _ => {}
        }
    }

    /// Queue a send for the next loop turn, after the "Sending..." frame is drawn
    pub fn request_submit(&mut self) {
        if self.state.contact.status().is_submitting() {
            return;
        }
        self.pending_submit = true;
    }

    /// Run the queued send, if any, and present the result
    pub async fn process_pending_submit(&mut self) {
        if !std::mem::take(&mut self.pending_submit) {
            return;
        }
        let outcome = self.state.contact.submit(self.intake.as_ref()).await;
        self.present_outcome(outcome);
    }

    fn present_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Sent { message, .. } => {
                self.state.active_form_field = 0;
                self.state.show_toast(SENT_TITLE, message);
                // A fresh inquiry should show up on the next inbox visit
                self.state.inbox.loaded = false;
            }
            SubmitOutcome::Failed { message } => self.push_error(message),
            SubmitOutcome::Invalid(_) => self.state.focus_first_error(),
            SubmitOutcome::Busy => {}
        }
    }

    /// Switch to the inbox, loading it on first visit
    async fn open_inbox(&mut self) {
        if matches!(
            self.state.current_view,
            View::Inbox | View::SubmissionDetail
        ) {
            self.state.current_view = View::Inbox;
        } else {
            self.navigate(View::Inbox);
        }
        if !self.state.inbox.loaded {
            self.load_inbox().await;
        }
    }

    /// Fetch the current inbox page
    pub async fn load_inbox(&mut self) {
        let query = self.state.inbox.query(self.settings.inbox_page_size);
        match self.intake.list_submissions(query).await {
            Ok(page) => self.state.inbox.set_page(page.submissions, page.count),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load inbox");
                self.push_error(format!("Failed to load inbox: {}", e.describe()));
            }
        }
    }

    /// Handle keys in the Inbox view
    async fn handle_inbox_key(&mut self, key: KeyEvent) {
        let page_size = self.settings.inbox_page_size;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.inbox.move_selection_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.inbox.move_selection_up(),
            KeyCode::Enter => self.open_selected_submission().await,
            KeyCode::Char('f') => {
                self.state.inbox.cycle_filter();
                self.load_inbox().await;
            }
            KeyCode::Char('r') => self.load_inbox().await,
            KeyCode::Char('n') | KeyCode::PageDown => {
                if self.state.inbox.next_page(page_size) {
                    self.load_inbox().await;
                }
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                if self.state.inbox.prev_page(page_size) {
                    self.load_inbox().await;
                }
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Open the selected inquiry, refreshing it from the backend
    async fn open_selected_submission(&mut self) {
        let Some(selected) = self.state.inbox.selected().cloned() else {
            return;
        };
        let record = match self.intake.get_submission(selected.id).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(id = %selected.id, error = %e, "failed to refresh submission");
                self.push_error(format!("Failed to load inquiry: {}", e.describe()));
                return;
            }
        };
        self.state.selected_submission = Some(record);
        self.navigate(View::SubmissionDetail);
    }

    /// Handle keys in the submission detail view
    async fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if InquiryStatus::from_digit(c).is_some() => {
                if let Some(status) = InquiryStatus::from_digit(c) {
                    self.set_submission_status(status).await;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
    }

    /// Change the status of the open inquiry
    async fn set_submission_status(&mut self, status: InquiryStatus) {
        let Some(id) = self.state.selected_submission.as_ref().map(|s| s.id) else {
            return;
        };
        match self.intake.update_submission_status(id, status).await {
            Ok(()) => {
                if let Some(record) = self.state.selected_submission.as_mut() {
                    record.status = status;
                }
                self.state.inbox.apply_status(id, status);
                self.state
                    .show_toast("Status updated", format!("Marked as {}", status.label()));
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "failed to update submission status");
                self.push_error(format!("Failed to update status: {}", e.describe()));
            }
        }
    }

    fn copy_fallback_email(&mut self) {
        let email = self.state.contact.fallback_email().to_string();
        match copy_to_clipboard(&email) {
            Ok(()) => self
                .state
                .show_toast("Copied", format!("{email} copied to clipboard")),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.state
                    .show_toast("Clipboard unavailable", format!("Email {email} directly"));
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
