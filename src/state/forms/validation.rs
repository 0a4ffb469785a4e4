//! Submit-time validation of the contact form

use super::field::ContactField;
use super::form_state::ContactForm;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum trimmed message length, in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Per-field validation failures. A field with no entry is valid or untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<ContactField, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Remove a field's error, returning it if there was one
    pub fn remove(&mut self, field: ContactField) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: ContactField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in display order
    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.errors.keys().copied()
    }
}

impl<S: Into<String>> FromIterator<(ContactField, S)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ContactField, S)>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for (field, message) in iter {
            map.insert(field, message);
        }
        map
    }
}

/// Check an address against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate every field of the form.
///
/// All rules run, so every failing field is reported at once. The result
/// depends only on `form`.
pub fn validate(form: &ContactForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.name.trim().is_empty() {
        errors.insert(ContactField::Name, "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert(ContactField::Email, "Please enter a valid email");
    }

    if form.project_type.is_none() {
        errors.insert(ContactField::ProjectType, "Please select a project type");
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, "Message is required");
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(
            ContactField::Message,
            "Message should be at least 10 characters",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::options::{Budget, ProjectType};
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, project_type: Option<ProjectType>, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            project_type,
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_required_fields_only() {
        let errors = validate(&ContactForm::default());
        let expected: ErrorMap = [
            (ContactField::Name, "Name is required"),
            (ContactField::Email, "Email is required"),
            (ContactField::ProjectType, "Please select a project type"),
            (ContactField::Message, "Message is required"),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate(&form("   ", " \t ", None, "\n  \n"));
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
        assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn test_format_and_length_errors() {
        let errors = validate(&form("A", "bad", Some(ProjectType::Mobile), "short"));
        let expected: ErrorMap = [
            (ContactField::Email, "Please enter a valid email"),
            (
                ContactField::Message,
                "Message should be at least 10 characters",
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_valid_form() {
        let errors = validate(&form(
            "Jane",
            "jane@x.com",
            Some(ProjectType::Web),
            "This is a sufficiently long message.",
        ));
        assert_eq!(errors, ErrorMap::new());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_optional_fields_are_not_validated() {
        let mut valid = form(
            "Jane",
            "jane@x.com",
            Some(ProjectType::Other),
            "Long enough message",
        );
        valid.company = "   ".to_string();
        valid.budget = Some(Budget::Discuss);
        assert!(validate(&valid).is_empty());
    }

    #[test]
    fn test_message_length_uses_trimmed_chars() {
        let errors = validate(&form(
            "Jane",
            "jane@x.com",
            Some(ProjectType::Web),
            "   123456789   ",
        ));
        assert!(errors.contains(ContactField::Message));

        let errors = validate(&form(
            "Jane",
            "jane@x.com",
            Some(ProjectType::Web),
            "  ééééééééé\u{e9} ",
        ));
        assert!(!errors.contains(ContactField::Message));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let f = form("", "nope@", None, "tiny");
        assert_eq!(validate(&f), validate(&f));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("jane@@x.com"));
        assert!(!is_valid_email("ja ne@x.com"));
        assert!(!is_valid_email(" jane@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane@.com"));
    }

    #[test]
    fn test_error_map_iteration_follows_field_order() {
        let errors = validate(&ContactForm::default());
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::ProjectType,
                ContactField::Message
            ]
        );
        assert_eq!(errors.len(), 4);
    }
}
