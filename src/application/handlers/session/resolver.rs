//! Lookup of the session a command targets.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::OwnedMutexGuard;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::{SessionHandle, SessionStore};

/// What to do when a command names a session that does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSessionPolicy {
    /// Fail with `NotFound`.
    #[default]
    Reject,
    /// Create an empty session with the default deck.
    Create,
}

/// Resolves session ids to live handles according to the configured policy.
#[derive(Clone)]
pub struct SessionResolver {
    store: Arc<dyn SessionStore>,
    policy: UnknownSessionPolicy,
}

impl SessionResolver {
    pub fn new(store: Arc<dyn SessionStore>, policy: UnknownSessionPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> UnknownSessionPolicy {
        self.policy
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// # Errors
    ///
    /// - `NotFound` if the session does not exist and the policy is `Reject`
    pub async fn resolve(&self, id: &SessionId) -> Result<SessionHandle, SessionError> {
        match self.policy {
            UnknownSessionPolicy::Reject => self.store.get(id).await,
            UnknownSessionPolicy::Create => Ok(self.store.get_or_create(*id).await),
        }
    }

    /// Resolve and lock a session for one command.
    ///
    /// A handle taken before a concurrent delete or eviction points at a
    /// detached session. That is reported as `NotFound`, or resolved again
    /// under the `Create` policy.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist, or was removed while
    ///   waiting for the lock, and the policy is `Reject`
    pub async fn lock(&self, id: &SessionId) -> Result<OwnedMutexGuard<Session>, SessionError> {
        loop {
            let session = self.resolve(id).await?.lock_owned().await;
            if !session.is_removed() {
                return Ok(session);
            }
            if self.policy == UnknownSessionPolicy::Reject {
                return Err(SessionError::not_found(*id));
            }
        }
    }
}
