//! Trait abstraction for the intake client to enable mocking in tests

use super::error::IntakeError;
use super::types::{ContactReceipt, InboxQuery, InquiryStatus, SubmissionPage, SubmissionRecord};
use crate::state::ContactPayload;
use async_trait::async_trait;
use uuid::Uuid;

/// Operations against the contact-intake backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeClientTrait: Send + Sync {
    /// Submit one contact inquiry
    async fn submit_contact(&self, payload: ContactPayload) -> Result<ContactReceipt, IntakeError>;

    /// List stored inquiries, newest first
    async fn list_submissions(&self, query: InboxQuery) -> Result<SubmissionPage, IntakeError>;

    /// Fetch a single stored inquiry
    async fn get_submission(&self, id: Uuid) -> Result<SubmissionRecord, IntakeError>;

    /// Change the triage status of a stored inquiry
    async fn update_submission_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<(), IntakeError>;
}
