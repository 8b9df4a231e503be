//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::session::{Deck, Session, SessionError};
use crate::ports::SessionStore;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub admin_name: String,
    /// Custom card labels. `None` uses the configured default deck.
    pub cards: Option<Vec<String>>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session_id: SessionId,
    /// Bearer token of the creator, who is the session admin.
    pub admin_token: ParticipantId,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
    default_deck: Deck,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, default_deck: Deck) -> Self {
        Self {
            store,
            default_deck,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSessionCommand,
    ) -> Result<CreateSessionResult, SessionError> {
        // 1. Resolve the deck
        let deck = match cmd.cards {
            Some(cards) => Deck::new(cards)?,
            None => self.default_deck.clone(),
        };

        // 2. Create session with creator as admin
        let (session, admin_token) = Session::create(SessionId::new(), deck, &cmd.admin_name)?;
        let session_id = *session.id();

        // 3. Register
        self.store.insert(session).await;

        tracing::info!(session_id = %session_id, "Session created");

        Ok(CreateSessionResult {
            session_id,
            admin_token,
        })
    }
}
