//! EvictIdleSessionsHandler - Removes sessions nobody touched for a while.
//!
//! `run` drives the handler on a fixed interval until shutdown is signalled.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::SessionStore;

/// Configuration for the idle-session reaper.
#[derive(Debug, Clone)]
pub struct EvictIdleSessionsConfig {
    /// How often to sweep the store.
    pub interval: Duration,
    /// Sessions idle longer than this are removed.
    pub max_idle: Duration,
}

impl Default for EvictIdleSessionsConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(900),
            max_idle: Duration::from_secs(3600),
        }
    }
}

/// Handler that evicts idle sessions.
pub struct EvictIdleSessionsHandler {
    store: Arc<dyn SessionStore>,
    config: EvictIdleSessionsConfig,
}

impl EvictIdleSessionsHandler {
    pub fn new(store: Arc<dyn SessionStore>, config: EvictIdleSessionsConfig) -> Self {
        Self { store, config }
    }

    /// Run one sweep at `now`.
    pub async fn handle(&self, now: Timestamp) -> Vec<SessionId> {
        let evicted = self.store.evict_idle(self.config.max_idle, now).await;

        for id in &evicted {
            tracing::info!(session_id = %id, "Evicted idle session");
        }
        if !evicted.is_empty() {
            let remaining = self.store.count().await;
            tracing::debug!(evicted = evicted.len(), remaining, "Idle sweep finished");
        }

        evicted
    }

    /// Sweep on every interval tick until `shutdown` turns true.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.interval);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Idle session reaper stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.handle(Timestamp::now()).await;
                }
            }
        }
    }
}
