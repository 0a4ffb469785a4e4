//! Intake client module for HTTP communication with the contact backend

mod client;
mod error;
mod traits;
mod types;

pub use client::IntakeClient;
pub use error::IntakeError;
pub use traits::IntakeClientTrait;
pub use types::{ContactReceipt, InboxQuery, InquiryStatus, SubmissionRecord};

#[cfg(test)]
pub use types::{ErrorBody, SubmissionPage};

#[cfg(test)]
pub use traits::MockIntakeClientTrait;
