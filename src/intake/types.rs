//! Wire types exchanged with the contact-intake backend

use crate::state::{Budget, ProjectType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Acknowledgement of an accepted contact submission
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub submission_id: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Error body returned by the backend on a rejected request.
///
/// `detail` is usually a string, but request-validation failures carry a
/// list of `{ "msg": ... }` objects instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Server-provided detail text, if any
    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }

    /// Server-provided generic error text, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.clone().filter(|e| !e.trim().is_empty())
    }

    /// Best available server message: detail first, then error
    pub fn best_message(&self) -> Option<String> {
        self.detail_message().or_else(|| self.error_message())
    }
}

/// Triage status of a stored inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 4] = [Self::New, Self::Read, Self::Replied, Self::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Read => "Read",
            Self::Replied => "Replied",
            Self::Archived => "Archived",
        }
    }

    /// Status bound to the digit keys 1-4 in the detail view
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// A stored contact submission as returned by the inbox endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub project_type: ProjectType,
    #[serde(default)]
    pub budget: Option<Budget>,
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
    /// Naive UTC timestamp, as the backend stores it
    pub submitted_at: NaiveDateTime,
    #[serde(default)]
    pub ip_address: Option<String>,
}

impl SubmissionRecord {
    /// One-line summary for list rows
    pub fn headline(&self) -> String {
        match self.company.as_deref().filter(|c| !c.is_empty()) {
            Some(company) => format!("{} ({})", self.name, company),
            None => self.name.clone(),
        }
    }
}

/// One page of the inbox listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionPage {
    #[serde(default)]
    pub success: bool,
    /// Total matching submissions across all pages
    pub count: u64,
    pub submissions: Vec<SubmissionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(super) struct SubmissionEnvelope {
    pub submission: SubmissionRecord,
}

/// Filter and paging for an inbox listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboxQuery {
    pub status: Option<InquiryStatus>,
    pub limit: u32,
    pub skip: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receipt_from_backend_response() {
        let receipt: ContactReceipt = serde_json::from_value(json!({
            "success": true,
            "message": "Thank you for reaching out!",
            "submissionId": "abc-123"
        }))
        .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message, "Thank you for reaching out!");
        assert_eq!(receipt.submission_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_receipt_defaults() {
        let receipt: ContactReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.success);
        assert!(receipt.message.is_empty());
        assert!(receipt.submission_id.is_none());
    }

    #[test]
    fn test_error_body_prefers_detail() {
        let body: ErrorBody =
            serde_json::from_value(json!({"detail": "Server busy", "error": "oops"})).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("Server busy"));
    }

    #[test]
    fn test_error_body_falls_back_to_error() {
        let body: ErrorBody = serde_json::from_value(json!({"error": "Rate limited"})).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("Rate limited"));
    }

    #[test]
    fn test_error_body_list_detail() {
        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address"},
                {"loc": ["body", "message"], "msg": "ensure this value has at least 10 characters"}
            ]
        }))
        .unwrap();
        assert_eq!(
            body.best_message().as_deref(),
            Some("value is not a valid email address; ensure this value has at least 10 characters")
        );
    }

    #[test]
    fn test_error_body_empty() {
        let body = ErrorBody::default();
        assert_eq!(body.best_message(), None);

        let blank: ErrorBody = serde_json::from_value(json!({"detail": "  "})).unwrap();
        assert_eq!(blank.best_message(), None);
    }

    #[test]
    fn test_inquiry_status_digits() {
        assert_eq!(InquiryStatus::from_digit('1'), Some(InquiryStatus::New));
        assert_eq!(InquiryStatus::from_digit('4'), Some(InquiryStatus::Archived));
        assert_eq!(InquiryStatus::from_digit('0'), None);
        assert_eq!(InquiryStatus::from_digit('5'), None);
        assert_eq!(InquiryStatus::from_digit('x'), None);
    }

    #[test]
    fn test_submission_record_parses_naive_timestamp() {
        let record: SubmissionRecord = serde_json::from_value(json!({
            "id": "0b8f7a3e-3f0e-4b7c-9c56-2d3c1f1a9e10",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "company": null,
            "projectType": "web",
            "budget": "discuss",
            "message": "Looking for a dashboard rebuild.",
            "status": "read",
            "submittedAt": "2024-11-02T09:15:30.123456",
            "ipAddress": "10.0.0.1"
        }))
        .unwrap();
        assert_eq!(record.project_type, ProjectType::Web);
        assert_eq!(record.budget, Some(Budget::Discuss));
        assert_eq!(record.status, InquiryStatus::Read);
        assert_eq!(record.headline(), "Jane Doe");
        assert_eq!(
            record.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
            "2024-11-02 09:15"
        );
    }
}
