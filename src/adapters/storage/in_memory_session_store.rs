//! In-Memory Session Store Adapter
//!
//! Keeps every live session in a process-local map. Sessions do not survive
//! a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{Deck, Session, SessionError};
use crate::ports::{SessionHandle, SessionStore};

/// In-memory storage for poker sessions.
///
/// The map lock is held only to look up, insert or remove handles; session
/// mutations happen under the per-session mutex.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    default_deck: Deck,
}

impl InMemorySessionStore {
    /// Create an empty store; lazily created sessions use `default_deck`.
    pub fn new(default_deck: Deck) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_deck,
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(Deck::standard())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: SessionId) -> SessionHandle {
        if let Some(handle) = self.sessions.read().await.get(&id) {
            return Arc::clone(handle);
        }

        let mut sessions = self.sessions.write().await;
        let handle = sessions.entry(id).or_insert_with(|| {
            tracing::debug!(session_id = %id, "Creating session on first reference");
            Arc::new(Mutex::new(Session::new(id, self.default_deck.clone())))
        });
        Arc::clone(handle)
    }

    async fn insert(&self, session: Session) -> SessionHandle {
        let id = *session.id();
        let mut sessions = self.sessions.write().await;
        let handle = sessions
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(session)));
        Arc::clone(handle)
    }

    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .map(Arc::clone)
            .ok_or_else(|| SessionError::not_found(*id))
    }

    async fn delete(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    async fn evict_idle(&self, max_idle: Duration, now: Timestamp) -> Vec<SessionId> {
        let mut sessions = self.sessions.write().await;
        let mut evicted = Vec::new();

        sessions.retain(|id, handle| {
            let idle = match handle.try_lock() {
                Ok(mut session) => {
                    let idle = session.is_idle(&now, max_idle);
                    if idle {
                        session.mark_removed();
                    }
                    idle
                }
                // Busy with a command, so not idle.
                Err(_) => false,
            };
            if idle {
                evicted.push(*id);
            }
            !idle
        });

        evicted
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_unknown_session_fails_with_not_found() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();

        let result = store.get(&id).await;

        assert!(matches!(result, Err(SessionError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn get_or_create_creates_empty_session_with_default_deck() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();

        let handle = store.get_or_create(id).await;
        let session = handle.lock().await;

        assert_eq!(session.id(), &id);
        assert!(session.participants().is_empty());
        assert_eq!(session.deck(), &Deck::standard());
    }

    #[tokio::test]
    async fn get_or_create_returns_existing_session() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();

        let first = store.get_or_create(id).await;
        first.lock().await.join("Alice").unwrap();
        let second = store.get_or_create(id).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.lock().await.participants().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_get_or_create_creates_exactly_one_session() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.get_or_create(id).await })
            })
            .collect();

        let mut handles = Vec::new();
        for task in tasks {
            handles.push(task.await.unwrap());
        }

        assert_eq!(store.count().await, 1);
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }

    #[tokio::test]
    async fn insert_then_get_returns_same_handle() {
        let store = InMemorySessionStore::default();
        let session = Session::new(SessionId::new(), Deck::standard());
        let id = *session.id();

        let inserted = store.insert(session).await;
        let fetched = store.get(&id).await.unwrap();

        assert!(Arc::ptr_eq(&inserted, &fetched));
    }

    #[tokio::test]
    async fn insert_does_not_replace_existing_session() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();
        store.get_or_create(id).await.lock().await.join("Alice").unwrap();

        let handle = store.insert(Session::new(id, Deck::standard())).await;

        assert_eq!(handle.lock().await.participants().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();
        store.get_or_create(id).await;

        assert!(store.delete(&id).await);
        assert!(!store.delete(&id).await);
        assert!(matches!(store.get(&id).await, Err(SessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn evict_idle_removes_only_stale_sessions() {
        let store = InMemorySessionStore::default();
        let stale = SessionId::new();
        let fresh = SessionId::new();
        store.get_or_create(stale).await;
        let fresh_handle = store.get_or_create(fresh).await;

        let now = Timestamp::now().plus_secs(120);
        fresh_handle.lock().await.touch(now);

        let evicted = store.evict_idle(Duration::from_secs(60), now).await;

        assert_eq!(evicted, vec![stale]);
        assert!(store.get(&fresh).await.is_ok());
        assert!(store.get(&stale).await.is_err());
    }

    #[tokio::test]
    async fn evict_idle_skips_locked_sessions() {
        let store = InMemorySessionStore::default();
        let id = SessionId::new();
        let handle = store.get_or_create(id).await;
        let _guard = handle.lock().await;

        let evicted = store
            .evict_idle(Duration::from_secs(1), Timestamp::now().plus_secs(3600))
            .await;

        assert!(evicted.is_empty());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemorySessionStore::default();
        store.get_or_create(SessionId::new()).await;
        store.get_or_create(SessionId::new()).await;

        store.clear().await;

        assert_eq!(store.count().await, 0);
    }
}
