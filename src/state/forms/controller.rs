//! Contact form controller: field edits, validation and the submission lifecycle

use super::field::{ContactField, FieldUpdate};
use super::form_state::{ContactForm, ContactPayload};
use super::options::{cycle, Budget, ProjectType};
use super::validation::{validate, ErrorMap};
use crate::intake::{ContactReceipt, IntakeClientTrait, IntakeError};

/// Confirmation used when the backend accepts a submission without a message
const DEFAULT_SENT_MESSAGE: &str = "Your message has been sent.";

/// Where a submission currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Allowed moves: `Idle → Submitting → Succeeded | Failed → Idle`
    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Submitting)
                | (Self::Submitting, Self::Succeeded)
                | (Self::Submitting, Self::Failed)
                | (Self::Succeeded, Self::Idle)
                | (Self::Failed, Self::Idle)
        )
    }

    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Result of one submit attempt, for the caller to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing happened
    Busy,
    /// Validation failed; nothing was sent
    Invalid(ErrorMap),
    /// The backend accepted the inquiry
    Sent {
        message: String,
        submission_id: Option<String>,
    },
    /// The request failed; the form is untouched
    Failed { message: String },
}

/// Owns the state of one contact form
#[derive(Debug, Clone)]
pub struct ContactController {
    form: ContactForm,
    errors: ErrorMap,
    status: SubmissionStatus,
    fallback_email: String,
}

impl ContactController {
    pub fn new(fallback_email: impl Into<String>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: ErrorMap::default(),
            status: SubmissionStatus::Idle,
            fallback_email: fallback_email.into(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn fallback_email(&self) -> &str {
        &self.fallback_email
    }

    /// Set one field and drop any error recorded against it.
    ///
    /// No validation happens here; errors only appear on submit.
    pub fn update_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.form.apply(update);
        if self.errors.remove(field).is_some() {
            tracing::debug!(%field, "cleared field error on edit");
        }
    }

    /// Append a character to a text field. Returns false when the field is a
    /// select field or already at its length cap.
    pub fn push_char(&mut self, field: ContactField, c: char) -> bool {
        let current = self.form.text(field);
        if let Some(max) = field.max_chars() {
            if current.chars().count() >= max {
                return false;
            }
        }
        let mut value = current.to_string();
        value.push(c);
        match FieldUpdate::text(field, value) {
            Some(update) => {
                self.update_field(update);
                true
            }
            None => false,
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: ContactField) {
        let mut value = self.form.text(field).to_string();
        if value.pop().is_none() {
            return;
        }
        if let Some(update) = FieldUpdate::text(field, value) {
            self.update_field(update);
        }
    }

    /// Step a select field to its next or previous option
    pub fn cycle_option(&mut self, field: ContactField, forward: bool) {
        match field {
            ContactField::ProjectType => {
                let next = cycle(&ProjectType::ALL, self.form.project_type, forward);
                self.update_field(FieldUpdate::ProjectType(next));
            }
            ContactField::Budget => {
                let next = cycle(&Budget::ALL, self.form.budget, forward);
                self.update_field(FieldUpdate::Budget(next));
            }
            _ => {}
        }
    }

    /// Unset a select field
    pub fn clear_option(&mut self, field: ContactField) {
        match field {
            ContactField::ProjectType => self.update_field(FieldUpdate::ProjectType(None)),
            ContactField::Budget => self.update_field(FieldUpdate::Budget(None)),
            _ => {}
        }
    }

    /// Validate the current form without touching the displayed errors
    pub fn validate(&self) -> ErrorMap {
        validate(&self.form)
    }

    /// Text shown when the backend gives no usable explanation
    pub fn fallback_message(&self) -> String {
        format!(
            "Failed to send message. Please try again or email directly at {}",
            self.fallback_email
        )
    }

    /// First half of a submit: validate, and if the form is valid enter
    /// `Submitting` and hand back the payload to send.
    ///
    /// On `Err` nothing is sent. The displayed errors are replaced by the new
    /// validation result unless a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitOutcome> {
        if self.status.is_submitting() {
            tracing::debug!("submit ignored, request already in flight");
            return Err(SubmitOutcome::Busy);
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            tracing::info!(
                failing_fields = self.errors.len(),
                "contact form failed validation"
            );
            return Err(SubmitOutcome::Invalid(self.errors.clone()));
        }

        self.transition(SubmissionStatus::Submitting);
        tracing::info!("submitting contact form");
        Ok(self.form.to_payload())
    }

    /// Second half of a submit: apply the backend's answer and return to `Idle`
    pub fn finish_submit(&mut self, result: Result<ContactReceipt, IntakeError>) -> SubmitOutcome {
        let outcome = match result {
            Ok(receipt) => {
                self.transition(SubmissionStatus::Succeeded);
                self.form = ContactForm::default();
                self.errors.clear();
                let message = if receipt.message.trim().is_empty() {
                    DEFAULT_SENT_MESSAGE.to_string()
                } else {
                    receipt.message
                };
                SubmitOutcome::Sent {
                    message,
                    submission_id: receipt.submission_id,
                }
            }
            Err(err) => {
                self.transition(SubmissionStatus::Failed);
                tracing::warn!(error = %err, "contact submission failed");
                let message = err
                    .server_message()
                    .unwrap_or_else(|| self.fallback_message());
                SubmitOutcome::Failed { message }
            }
        };
        self.transition(SubmissionStatus::Idle);
        outcome
    }

    /// Validate and, if valid, send the form with exactly one request
    pub async fn submit(&mut self, client: &dyn IntakeClientTrait) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(payload) => {
                let result = client.submit_contact(payload).await;
                self.finish_submit(result)
            }
            Err(outcome) => outcome,
        }
    }

    fn transition(&mut self, next: SubmissionStatus) {
        if !self.status.can_transition_to(next) {
            tracing::warn!(from = ?self.status, to = ?next, "unexpected submission status change");
        }
        tracing::debug!(from = ?self.status, to = ?next, "submission status");
        self.status = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{ErrorBody, MockIntakeClientTrait};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    const FALLBACK: &str = "owner@example.com";

    fn filled_controller() -> ContactController {
        let mut c = ContactController::new(FALLBACK);
        c.update_field(FieldUpdate::Name("Jane".into()));
        c.update_field(FieldUpdate::Email("jane@x.com".into()));
        c.update_field(FieldUpdate::Company("Acme".into()));
        c.update_field(FieldUpdate::ProjectType(Some(ProjectType::Web)));
        c.update_field(FieldUpdate::Budget(Some(Budget::Discuss)));
        c.update_field(FieldUpdate::Message(
            "This is a sufficiently long message.".into(),
        ));
        c
    }

    fn receipt(message: &str) -> ContactReceipt {
        ContactReceipt {
            success: true,
            message: message.to_string(),
            submission_id: Some("sub-1".to_string()),
        }
    }

    fn rejected(detail: Option<&str>, error: Option<&str>) -> IntakeError {
        IntakeError::Rejected {
            status: 503,
            body: ErrorBody {
                detail: detail.map(|d| Value::String(d.to_string())),
                error: error.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_status_transitions() {
        use SubmissionStatus::*;
        assert!(Idle.can_transition_to(Submitting));
        assert!(Submitting.can_transition_to(Succeeded));
        assert!(Submitting.can_transition_to(Failed));
        assert!(Succeeded.can_transition_to(Idle));
        assert!(Failed.can_transition_to(Idle));
        assert!(!Idle.can_transition_to(Succeeded));
        assert!(!Submitting.can_transition_to(Idle));
        assert!(!Succeeded.can_transition_to(Submitting));
    }

    #[test]
    fn test_update_field_clears_only_that_error() {
        let mut c = ContactController::new(FALLBACK);
        let _ = c.begin_submit();
        assert_eq!(c.errors().len(), 4);

        c.update_field(FieldUpdate::Email("j".into()));
        assert!(!c.errors().contains(ContactField::Email));
        assert!(c.errors().contains(ContactField::Name));
        assert!(c.errors().contains(ContactField::ProjectType));
        assert!(c.errors().contains(ContactField::Message));
    }

    #[test]
    fn test_update_field_does_not_validate() {
        let mut c = ContactController::new(FALLBACK);
        c.update_field(FieldUpdate::Email("not-an-email".into()));
        assert!(c.errors().is_empty());
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut c = ContactController::new(FALLBACK);
        assert!(c.push_char(ContactField::Name, 'J'));
        assert!(c.push_char(ContactField::Name, 'o'));
        assert_eq!(c.form().name, "Jo");
        c.pop_char(ContactField::Name);
        assert_eq!(c.form().name, "J");
        assert!(!c.push_char(ContactField::Budget, 'x'));
    }

    #[test]
    fn test_push_char_respects_length_cap() {
        let mut c = ContactController::new(FALLBACK);
        c.update_field(FieldUpdate::Name("a".repeat(100)));
        assert!(!c.push_char(ContactField::Name, 'b'));
        assert_eq!(c.form().name.len(), 100);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut c = ContactController::new(FALLBACK);
        let _ = c.begin_submit();
        assert!(c.errors().contains(ContactField::Message));
        c.push_char(ContactField::Message, 'H');
        assert!(!c.errors().contains(ContactField::Message));
    }

    #[test]
    fn test_cycle_and_clear_option() {
        let mut c = ContactController::new(FALLBACK);
        let _ = c.begin_submit();
        c.cycle_option(ContactField::ProjectType, true);
        assert_eq!(c.form().project_type, Some(ProjectType::Mobile));
        assert!(!c.errors().contains(ContactField::ProjectType));

        c.cycle_option(ContactField::Budget, false);
        assert_eq!(c.form().budget, Some(Budget::Discuss));

        c.clear_option(ContactField::ProjectType);
        assert_eq!(c.form().project_type, None);

        c.cycle_option(ContactField::Name, true);
        assert!(c.form().name.is_empty());
    }

    #[test]
    fn test_validate_is_pure() {
        let c = ContactController::new(FALLBACK);
        let first = c.validate();
        let second = c.validate();
        assert_eq!(first, second);
        assert!(c.errors().is_empty());
    }

    #[test]
    fn test_begin_submit_invalid_sets_errors() {
        let mut c = ContactController::new(FALLBACK);
        c.update_field(FieldUpdate::Name("A".into()));
        c.update_field(FieldUpdate::Email("bad".into()));
        c.update_field(FieldUpdate::ProjectType(Some(ProjectType::Mobile)));
        c.update_field(FieldUpdate::Message("short".into()));

        let outcome = c.begin_submit().unwrap_err();
        let expected: ErrorMap = [
            (ContactField::Email, "Please enter a valid email"),
            (
                ContactField::Message,
                "Message should be at least 10 characters",
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(outcome, SubmitOutcome::Invalid(expected.clone()));
        assert_eq!(c.errors(), &expected);
        assert_eq!(c.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_errors_recomputed_in_full_on_submit() {
        let mut c = ContactController::new(FALLBACK);
        let _ = c.begin_submit();
        c.update_field(FieldUpdate::Name("Jane".into()));
        c.update_field(FieldUpdate::Email("still bad".into()));
        let _ = c.begin_submit();
        assert!(!c.errors().contains(ContactField::Name));
        assert_eq!(
            c.errors().get(ContactField::Email),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_begin_submit_refuses_while_in_flight() {
        let mut c = filled_controller();
        let payload = c.begin_submit().unwrap();
        assert_eq!(payload.name, "Jane");
        assert_eq!(c.status(), SubmissionStatus::Submitting);

        assert_eq!(c.begin_submit().unwrap_err(), SubmitOutcome::Busy);
        assert_eq!(c.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn test_finish_submit_success_resets_form() {
        let mut c = filled_controller();
        c.begin_submit().unwrap();
        let outcome = c.finish_submit(Ok(receipt("Thanks! I'll be in touch.")));
        assert_eq!(
            outcome,
            SubmitOutcome::Sent {
                message: "Thanks! I'll be in touch.".into(),
                submission_id: Some("sub-1".into()),
            }
        );
        assert!(c.form().is_empty());
        assert!(c.errors().is_empty());
        assert_eq!(c.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_finish_submit_success_without_message() {
        let mut c = filled_controller();
        c.begin_submit().unwrap();
        match c.finish_submit(Ok(receipt(""))) {
            SubmitOutcome::Sent { message, .. } => assert_eq!(message, DEFAULT_SENT_MESSAGE),
            other => panic!("expected Sent, got {other:?}"),
        }
    }

    #[test]
    fn test_finish_submit_failure_keeps_form() {
        let mut c = filled_controller();
        let before = c.form().clone();
        c.begin_submit().unwrap();
        let outcome = c.finish_submit(Err(rejected(Some("Server busy"), None)));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Server busy".into()
            }
        );
        assert_eq!(c.form(), &before);
        assert_eq!(c.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_failure_message_priority() {
        let mut c = filled_controller();
        c.begin_submit().unwrap();
        let outcome = c.finish_submit(Err(rejected(None, Some("Rate limited"))));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Rate limited".into()
            }
        );

        c.begin_submit().unwrap();
        let outcome = c.finish_submit(Err(rejected(None, None)));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: format!(
                    "Failed to send message. Please try again or email directly at {FALLBACK}"
                )
            }
        );
    }

    #[test]
    fn test_failure_without_response_uses_fallback() {
        let mut c = filled_controller();
        c.begin_submit().unwrap();
        let outcome = c.finish_submit(Err(IntakeError::InvalidResponse("eof".into())));
        match outcome {
            SubmitOutcome::Failed { message } => {
                assert!(message.contains(FALLBACK));
                assert!(message.starts_with("Failed to send message."));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_exactly_one_request() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit_contact()
            .withf(|payload| {
                payload.name == "Jane"
                    && payload.company.as_deref() == Some("Acme")
                    && payload.project_type == Some(ProjectType::Web)
                    && payload.budget == Some(Budget::Discuss)
            })
            .times(1)
            .returning(|_| Ok(receipt("Thank you for reaching out!")));

        let mut c = filled_controller();
        let outcome = c.submit(&mock).await;
        assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
        assert_eq!(c.form(), &ContactForm::default());
        assert!(c.errors().is_empty());
    }

    #[tokio::test]
    async fn test_submit_invalid_makes_no_request() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit_contact().times(0);

        let mut c = ContactController::new(FALLBACK);
        let outcome = c.submit(&mock).await;
        assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.len() == 4));
    }

    #[tokio::test]
    async fn test_submit_failure_then_retry_succeeds() {
        let mut mock = MockIntakeClientTrait::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_submit_contact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(rejected(Some("Server busy"), None)));
        mock.expect_submit_contact()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(receipt("Got it")));

        let mut c = filled_controller();
        let first = c.submit(&mock).await;
        assert_eq!(
            first,
            SubmitOutcome::Failed {
                message: "Server busy".into()
            }
        );
        assert_eq!(c.form().name, "Jane");

        let second = c.submit(&mock).await;
        assert!(matches!(second, SubmitOutcome::Sent { ref message, .. } if message == "Got it"));
        assert!(c.form().is_empty());
    }
}
