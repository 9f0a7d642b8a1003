//! Domain errors for the issue relay.

use thiserror::Error;

/// Domain-level errors that can occur while listing issues or
/// dispatching workflow events.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("{operation} returned {status}: {body}")]
    RemoteRejected {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("{operation} request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
