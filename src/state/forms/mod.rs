//! Form domain layer
//!
//! Typed contact form state, submit-time validation and the controller that
//! drives a submission against the intake backend.

mod controller;
mod field;
mod form_state;
mod options;
mod validation;

pub use controller::{ContactController, SubmitOutcome};
pub use field::ContactField;
pub use form_state::ContactPayload;
pub use options::{cycle as cycle_option, Budget, ProjectType};

#[cfg(test)]
pub use controller::SubmissionStatus;
#[cfg(test)]
pub use field::FieldUpdate;
#[cfg(test)]
pub use form_state::ContactForm;
