//! GetSessionHandler - Query handler for the session overview.

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::{SessionError, SessionView};

use super::SessionResolver;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
    pub viewer: ParticipantId,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    resolver: SessionResolver,
}

impl GetSessionHandler {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, SessionError> {
        let mut session = self.resolver.lock(&query.session_id).await?;

        // Only participants may open the session
        if session.participant(&query.viewer).is_none() {
            return Err(SessionError::ParticipantNotFound);
        }
        session.touch(Timestamp::now());

        Ok(session.view(&query.viewer))
    }
}
