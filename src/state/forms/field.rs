//! Contact form fields and typed field updates

use super::options::{Budget, ProjectType};
use std::fmt;

/// The fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    ProjectType,
    Budget,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::ProjectType,
        Self::Budget,
        Self::Message,
    ];

    /// Field key as used in the JSON payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::ProjectType => "projectType",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Email => "Email *",
            Self::Company => "Company",
            Self::ProjectType => "Project Type *",
            Self::Budget => "Budget Range",
            Self::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Company => "Your company name",
            Self::ProjectType => "Select type",
            Self::Budget => "Select range",
            Self::Message => {
                "Tell me about your project, goals, timeline, and any specific requirements..."
            }
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Select fields take one of a fixed set of options instead of free text
    pub fn is_select(&self) -> bool {
        matches!(self, Self::ProjectType | Self::Budget)
    }

    /// Typing limit mirroring the intake backend's length caps
    pub fn max_chars(&self) -> Option<usize> {
        match self {
            Self::Name | Self::Company => Some(100),
            Self::Message => Some(2000),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A new value for exactly one field.
///
/// The variant carries the field's own value type, so a select field can never
/// be given free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Company(String),
    ProjectType(Option<ProjectType>),
    Budget(Option<Budget>),
    Message(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> ContactField {
        match self {
            Self::Name(_) => ContactField::Name,
            Self::Email(_) => ContactField::Email,
            Self::Company(_) => ContactField::Company,
            Self::ProjectType(_) => ContactField::ProjectType,
            Self::Budget(_) => ContactField::Budget,
            Self::Message(_) => ContactField::Message,
        }
    }

    /// Build a text update for a text field. Returns `None` for select fields.
    pub fn text(field: ContactField, value: String) -> Option<Self> {
        match field {
            ContactField::Name => Some(Self::Name(value)),
            ContactField::Email => Some(Self::Email(value)),
            ContactField::Company => Some(Self::Company(value)),
            ContactField::Message => Some(Self::Message(value)),
            ContactField::ProjectType | ContactField::Budget => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_index() {
        for (i, field) in ContactField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(ContactField::from_index(i), Some(*field));
        }
        assert_eq!(ContactField::from_index(6), None);
    }

    #[test]
    fn test_payload_keys() {
        assert_eq!(ContactField::ProjectType.key(), "projectType");
        assert_eq!(ContactField::Message.to_string(), "message");
    }

    #[test]
    fn test_select_fields() {
        assert!(ContactField::ProjectType.is_select());
        assert!(ContactField::Budget.is_select());
        assert!(!ContactField::Email.is_select());
    }

    #[test]
    fn test_max_chars() {
        assert_eq!(ContactField::Name.max_chars(), Some(100));
        assert_eq!(ContactField::Message.max_chars(), Some(2000));
        assert_eq!(ContactField::Email.max_chars(), None);
    }

    #[test]
    fn test_update_targets_field() {
        assert_eq!(
            FieldUpdate::Budget(Some(Budget::Discuss)).field(),
            ContactField::Budget
        );
        assert_eq!(
            FieldUpdate::text(ContactField::Company, "Acme".into()),
            Some(FieldUpdate::Company("Acme".into()))
        );
        assert_eq!(
            FieldUpdate::text(ContactField::ProjectType, "web".into()),
            None
        );
    }
}
