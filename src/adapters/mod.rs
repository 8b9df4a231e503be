//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Bearer token validation
//! - `http` - REST API built on axum
//! - `storage` - Session store implementations

pub mod auth;
pub mod http;
pub mod storage;

pub use auth::{MockCredentialValidator, OpaqueTokenValidator};
pub use storage::InMemorySessionStore;
