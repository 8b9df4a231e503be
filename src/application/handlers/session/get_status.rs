//! GetStatusHandler - Query handler for the voting status of a session.

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::{SessionError, StatusSnapshot};

use super::SessionResolver;

/// Query for the status table of a session.
#[derive(Debug, Clone)]
pub struct GetStatusQuery {
    pub session_id: SessionId,
    /// Participant asking. `None` yields the anonymous projection.
    pub viewer: Option<ParticipantId>,
}

/// Handler for status queries.
pub struct GetStatusHandler {
    resolver: SessionResolver,
}

impl GetStatusHandler {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, query: GetStatusQuery) -> Result<StatusSnapshot, SessionError> {
        let mut session = self.resolver.lock(&query.session_id).await?;

        if let Some(viewer) = &query.viewer {
            if session.participant(viewer).is_none() {
                return Err(SessionError::ParticipantNotFound);
            }
        }
        // Polling keeps the session alive.
        session.touch(Timestamp::now());

        Ok(session.snapshot(query.viewer.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::session::UnknownSessionPolicy;
    use crate::domain::session::{Deck, Session, SessionSettings, VotingPhase, HIDDEN_VOTE};
    use crate::ports::SessionStore;
    use std::sync::Arc;

    struct Fixture {
        handler: GetStatusHandler,
        session_id: SessionId,
        alice: ParticipantId,
        bob: ParticipantId,
        store: Arc<InMemorySessionStore>,
    }

    /// Alice votes 3, Bob votes 8, Carol has not voted.
    async fn fixture(show_votes: bool) -> Fixture {
        let store = Arc::new(InMemorySessionStore::default());
        let deck = Deck::new(["1", "2", "3", "5", "8", "13"]).unwrap();
        let (mut session, alice) = Session::create(SessionId::new(), deck, "Alice").unwrap();
        let bob = session.join("Bob").unwrap();
        session.join("Carol").unwrap();
        session.cast_vote(&alice, "3").unwrap();
        session.cast_vote(&bob, "8").unwrap();
        session.apply_settings(SessionSettings { show_votes });
        let session_id = *session.id();
        store.insert(session).await;

        let handler = GetStatusHandler::new(SessionResolver::new(
            store.clone(),
            UnknownSessionPolicy::Reject,
        ));
        Fixture {
            handler,
            session_id,
            alice,
            bob,
            store,
        }
    }

    fn labels(snapshot: &StatusSnapshot) -> Vec<(&str, &str)> {
        snapshot
            .votes
            .iter()
            .map(|v| (v.name.as_str(), v.vote.as_label()))
            .collect()
    }

    #[tokio::test]
    async fn hidden_votes_are_masked_except_for_viewer() {
        let f = fixture(false).await;

        let snapshot = f
            .handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: Some(f.alice.clone()),
            })
            .await
            .unwrap();

        assert_eq!(
            labels(&snapshot),
            vec![("Alice", "3"), ("Bob", HIDDEN_VOTE), ("Carol", "")]
        );
        assert_eq!(snapshot.phase, VotingPhase::InProgress);
    }

    #[tokio::test]
    async fn visible_votes_are_shown_to_everyone() {
        let f = fixture(true).await;

        let snapshot = f
            .handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: Some(f.bob.clone()),
            })
            .await
            .unwrap();

        assert_eq!(
            labels(&snapshot),
            vec![("Alice", "3"), ("Bob", "8"), ("Carol", "")]
        );
    }

    #[tokio::test]
    async fn tally_is_reported_while_hidden() {
        let f = fixture(false).await;

        let snapshot = f
            .handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: None,
            })
            .await
            .unwrap();

        assert_eq!(snapshot.average, Some(5.5));
        assert_eq!(snapshot.closest, Some(5.0));
        assert_eq!(snapshot.cast_count(), 2);
    }

    #[tokio::test]
    async fn empty_round_has_no_tally() {
        let f = fixture(true).await;
        f.store
            .get(&f.session_id)
            .await
            .unwrap()
            .lock()
            .await
            .reset_votes();

        let snapshot = f
            .handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: None,
            })
            .await
            .unwrap();

        assert_eq!(snapshot.average, None);
        assert_eq!(snapshot.closest, None);
        assert_eq!(snapshot.phase, VotingPhase::Empty);
        assert_eq!(snapshot.votes.len(), 3);
    }

    #[tokio::test]
    async fn status_query_counts_as_activity() {
        let f = fixture(false).await;
        let handle = f.store.get(&f.session_id).await.unwrap();
        let before = *handle.lock().await.last_activity();
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;

        f.handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: None,
            })
            .await
            .unwrap();

        let after = *handle.lock().await.last_activity();
        assert!(after > before);
        let evicted = f
            .store
            .evict_idle(std::time::Duration::from_millis(20), Timestamp::now())
            .await;
        assert!(evicted.is_empty());
    }

    #[tokio::test]
    async fn removed_session_is_not_found() {
        let f = fixture(false).await;
        {
            let handle = f.store.get(&f.session_id).await.unwrap();
            let mut session = handle.lock().await;
            session.mark_removed();
        }

        let result = f
            .handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: None,
            })
            .await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[tokio::test]
    async fn stranger_is_rejected() {
        let f = fixture(true).await;

        let result = f
            .handler
            .handle(GetStatusQuery {
                session_id: f.session_id,
                viewer: Some(ParticipantId::generate()),
            })
            .await;

        assert!(matches!(result, Err(SessionError::ParticipantNotFound)));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let f = fixture(true).await;

        let result = f
            .handler
            .handle(GetStatusQuery {
                session_id: SessionId::new(),
                viewer: None,
            })
            .await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }
}
