//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - ownership and exclusive access to live sessions
//! - `CredentialValidator` - bearer token → caller identity

mod credential_validator;
mod session_store;

pub use credential_validator::CredentialValidator;
pub use session_store::{SessionHandle, SessionStore};
