//! Authentication types for the domain layer.
//!
//! The bearer token a participant receives on create/join is an opaque
//! identity. Validation is delegated to the `CredentialValidator` port;
//! the domain only sees the resulting `AuthenticatedUser`.

use super::ParticipantId;
use thiserror::Error;

/// Caller identity extracted from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The participant this token belongs to.
    pub id: ParticipantId,
}

impl AuthenticatedUser {
    pub fn new(id: ParticipantId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or not recognised.
    #[error("Invalid token")]
    InvalidToken,

    /// The validator backend could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
