//! Application state definitions

use super::forms::{cycle_option, ContactController, ContactField};
use crate::intake::{InboxQuery, InquiryStatus, SubmissionRecord};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays in the status bar
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Number of focus stops in the contact form: six fields plus the Send button
pub const CONTACT_FOCUS_COUNT: usize = ContactField::ALL.len() + 1;

/// Focus index of the Send button
pub const SEND_BUTTON_INDEX: usize = ContactField::ALL.len();

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Contact,
    Inbox,
    SubmissionDetail,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Inbox => "Inbox",
            Self::SubmissionDetail => "Inquiry",
        }
    }

    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact)
    }
}

/// Transient notification shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }
}

/// Inbox listing state
#[derive(Debug, Clone, Default)]
pub struct InboxState {
    pub submissions: Vec<SubmissionRecord>,
    /// Total matching submissions reported by the backend
    pub total: u64,
    pub filter: Option<InquiryStatus>,
    pub skip: u32,
    pub selected_index: usize,
    pub loaded: bool,
}

impl InboxState {
    /// Query for the current filter and page
    pub fn query(&self, page_size: u32) -> InboxQuery {
        InboxQuery {
            status: self.filter,
            limit: page_size,
            skip: self.skip,
        }
    }

    /// Advance the status filter (all → new → read → replied → archived → all)
    /// and go back to the first page
    pub fn cycle_filter(&mut self) {
        self.filter = cycle_option(&InquiryStatus::ALL, self.filter, true);
        self.skip = 0;
        self.selected_index = 0;
    }

    pub fn filter_label(&self) -> &'static str {
        self.filter.map(|s| s.label()).unwrap_or("All")
    }

    pub fn has_next_page(&self, page_size: u32) -> bool {
        u64::from(self.skip) + u64::from(page_size) < self.total
    }

    pub fn next_page(&mut self, page_size: u32) -> bool {
        if !self.has_next_page(page_size) {
            return false;
        }
        self.skip += page_size;
        self.selected_index = 0;
        true
    }

    pub fn prev_page(&mut self, page_size: u32) -> bool {
        if self.skip == 0 {
            return false;
        }
        self.skip = self.skip.saturating_sub(page_size);
        self.selected_index = 0;
        true
    }

    /// 1-based page number and page count, for display
    pub fn page_position(&self, page_size: u32) -> (u64, u64) {
        let size = u64::from(page_size.max(1));
        let page = u64::from(self.skip) / size + 1;
        let pages = self.total.div_ceil(size).max(1);
        (page, pages)
    }

    pub fn selected(&self) -> Option<&SubmissionRecord> {
        self.submissions.get(self.selected_index)
    }

    pub fn move_selection_down(&mut self) {
        let max = self.submissions.len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Replace the listing with a freshly loaded page
    pub fn set_page(&mut self, submissions: Vec<SubmissionRecord>, total: u64) {
        self.submissions = submissions;
        self.total = total;
        self.loaded = true;
        if self.selected_index >= self.submissions.len() {
            self.selected_index = self.submissions.len().saturating_sub(1);
        }
    }

    /// Apply a status change to the local copy of a submission
    pub fn apply_status(&mut self, id: uuid::Uuid, status: InquiryStatus) {
        if let Some(record) = self.submissions.iter_mut().find(|s| s.id == id) {
            record.status = status;
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Contact form
    pub contact: ContactController,
    pub active_form_field: usize,

    // Inbox
    pub inbox: InboxState,
    pub selected_submission: Option<SubmissionRecord>,
    pub scroll_offset: usize,

    // Notifications
    pub error_queue: VecDeque<String>,
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(fallback_email: impl Into<String>) -> Self {
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            contact: ContactController::new(fallback_email),
            active_form_field: 0,
            inbox: InboxState::default(),
            selected_submission: None,
            scroll_offset: 0,
            error_queue: VecDeque::new(),
            toast: None,
        }
    }

    /// Field that currently has focus, or `None` on the Send button
    pub fn active_contact_field(&self) -> Option<ContactField> {
        ContactField::from_index(self.active_form_field)
    }

    pub fn is_send_button_active(&self) -> bool {
        self.active_form_field == SEND_BUTTON_INDEX
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % CONTACT_FOCUS_COUNT;
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = CONTACT_FOCUS_COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Move focus to the first field that failed validation
    pub fn focus_first_error(&mut self) {
        if let Some(field) = self.contact.errors().fields().next() {
            self.active_form_field = field.index();
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn show_toast(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.toast = Some(Toast::new(title, message));
    }

    /// Drop the toast once it has been visible long enough
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
