//! Credential validation port for bearer tokens.
//!
//! HTTP middleware hands the raw token (without the `Bearer ` prefix) to
//! this port and receives the caller identity. Issuing tokens is not part
//! of this contract.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens and extracts the caller identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed or unknown tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Validate a bearer token and return the caller.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_validator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CredentialValidator>();
    }
}
