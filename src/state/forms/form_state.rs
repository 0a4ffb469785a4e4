//! Contact form values and the payload sent to the intake backend

use super::field::{ContactField, FieldUpdate};
use super::options::{Budget, ProjectType};
use serde::Serialize;

/// Current values of one in-progress inquiry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<Budget>,
    pub message: String,
}

impl ContactForm {
    /// Overwrite a single field
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Company(v) => self.company = v,
            FieldUpdate::ProjectType(v) => self.project_type = v,
            FieldUpdate::Budget(v) => self.budget = v,
            FieldUpdate::Message(v) => self.message = v,
        }
    }

    /// Text content of a text field (empty for select fields)
    pub fn text(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
            ContactField::ProjectType | ContactField::Budget => "",
        }
    }

    /// Value shown for a field, or `None` when nothing has been entered yet
    pub fn display_value(&self, field: ContactField) -> Option<String> {
        match field {
            ContactField::ProjectType => self.project_type.map(|p| p.label().to_string()),
            ContactField::Budget => self.budget.map(|b| b.label().to_string()),
            _ => {
                let text = self.text(field);
                (!text.is_empty()).then(|| text.to_string())
            }
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the JSON payload for `POST /api/contact`
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            company: (!self.company.is_empty()).then(|| self.company.clone()),
            project_type: self.project_type,
            budget: self.budget,
            message: self.message.clone(),
        }
    }
}

/// Request body for a contact submission.
///
/// An empty company and an unset budget go out as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: Option<ProjectType>,
    pub budget: Option<Budget>,
    pub message: String,
}
