//! Opaque bearer token validator.
//!
//! Tokens are the participant identifiers handed out on create/join. The
//! validator only checks the token is well formed; whether the participant
//! belongs to a given session is decided by the session itself.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, ParticipantId};
use crate::ports::CredentialValidator;

/// Accepts any well-formed participant token.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpaqueTokenValidator;

impl OpaqueTokenValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialValidator for OpaqueTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let id = ParticipantId::new(token.trim()).map_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
            AuthError::InvalidToken
        })?;
        Ok(AuthenticatedUser::new(id))
    }
}
