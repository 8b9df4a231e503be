//! Session store port.
//!
//! The store is the only owner of live sessions. Callers get a handle per
//! request and lock it for the duration of one command; the handle must not
//! be kept across requests.
//!
//! # Concurrency
//!
//! - All operations are atomic with respect to each other
//! - Concurrent `get_or_create` calls for one unknown id create exactly one
//!   session and return the same handle
//! - Commands on one session serialize on its mutex; different sessions
//!   never contend

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{Session, SessionError};

/// Exclusive-access handle to one stored session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Registry of live sessions keyed by id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `id`, creating an empty one if absent.
    async fn get_or_create(&self, id: SessionId) -> SessionHandle;

    /// Registers an explicitly created session, replacing nothing.
    ///
    /// If the id is already taken the existing handle is returned and
    /// `session` is dropped.
    async fn insert(&self, session: Session) -> SessionHandle;

    /// Returns the session for `id`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session exists under `id`
    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionError>;

    /// Removes the session. Returns `false` if it did not exist.
    async fn delete(&self, id: &SessionId) -> bool;

    /// Removes sessions idle for longer than `max_idle`.
    ///
    /// Sessions locked by an in-flight command count as active.
    async fn evict_idle(&self, max_idle: Duration, now: Timestamp) -> Vec<SessionId>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
