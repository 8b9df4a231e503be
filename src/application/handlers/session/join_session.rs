//! JoinSessionHandler - Command handler for adding participants.

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::SessionError;

use super::SessionResolver;

/// Command to join a session under a display name.
#[derive(Debug, Clone)]
pub struct JoinSessionCommand {
    pub session_id: SessionId,
    pub name: String,
}

/// Result of a join.
#[derive(Debug, Clone)]
pub struct JoinSessionResult {
    pub session_id: SessionId,
    /// Bearer token of the new participant.
    pub participant_token: ParticipantId,
    pub is_admin: bool,
}

/// Handler for joining sessions.
pub struct JoinSessionHandler {
    resolver: SessionResolver,
}

impl JoinSessionHandler {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, cmd: JoinSessionCommand) -> Result<JoinSessionResult, SessionError> {
        let mut session = self.resolver.lock(&cmd.session_id).await?;

        let participant_token = session.join(&cmd.name)?;
        session.touch(Timestamp::now());
        let is_admin = session.is_admin(&participant_token);

        tracing::info!(
            session_id = %cmd.session_id,
            participants = session.participants().len(),
            is_admin,
            "Participant joined"
        );

        Ok(JoinSessionResult {
            session_id: cmd.session_id,
            participant_token,
            is_admin,
        })
    }
}
