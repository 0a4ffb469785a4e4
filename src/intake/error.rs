//! Errors raised while talking to the contact-intake backend

use super::types::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// No usable response: connection refused, timeout, TLS failure, ...
    #[error("could not reach the intake backend: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered but refused the request
    #[error("intake backend rejected the request (HTTP {status})")]
    Rejected { status: u16, body: ErrorBody },
    /// The backend answered with a success status but an unexpected body
    #[error("unexpected response from the intake backend: {0}")]
    InvalidResponse(String),
    #[error("invalid intake URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl IntakeError {
    /// Message supplied by the server, preferring `detail` over `error`
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Rejected { body, .. } => body.best_message(),
            _ => None,
        }
    }

    /// Server message when there is one, otherwise this error's own text
    pub fn describe(&self) -> String {
        self.server_message().unwrap_or_else(|| self.to_string())
    }
}
