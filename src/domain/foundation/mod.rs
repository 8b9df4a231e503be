//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth types and error types
//! that form the vocabulary of the poker domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{ErrorCode, ValidationError};
pub use ids::{ParticipantId, SessionId, MAX_PARTICIPANT_ID_LENGTH};
pub use timestamp::Timestamp;
