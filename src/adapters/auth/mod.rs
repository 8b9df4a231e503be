//! Authentication adapters.
//!
//! Implementations of the `CredentialValidator` port:
//!
//! - `opaque_token` - Accepts participant tokens handed out on create/join
//! - `mock` - Test implementation with a fixed token table

mod mock;
mod opaque_token;

pub use mock::MockCredentialValidator;
pub use opaque_token::OpaqueTokenValidator;
