//! Session-specific error types.

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found (never created, deleted, or evicted).
    NotFound(SessionId),
    /// The caller has not joined this session.
    ParticipantNotFound,
    /// The vote is not a card of the session deck.
    InvalidVote(String),
    /// Caller is not the session admin.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn invalid_vote(vote: impl Into<String>) -> Self {
        SessionError::InvalidVote(vote.into())
    }
    pub fn forbidden() -> Self {
        SessionError::Forbidden
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::ParticipantNotFound => ErrorCode::ParticipantNotFound,
            SessionError::InvalidVote(_) => ErrorCode::InvalidVote,
            SessionError::Forbidden => ErrorCode::Forbidden,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::ParticipantNotFound => "Not a participant of this session".to_string(),
            SessionError::InvalidVote(vote) => format!("Invalid vote: '{}'", vote),
            SessionError::Forbidden => "Only the session admin may do this".to_string(),
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
