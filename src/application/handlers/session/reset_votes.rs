//! ResetVotesHandler - Command handler for starting a new voting round.

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::SessionError;

use super::SessionResolver;

/// Command to clear every vote of a session.
#[derive(Debug, Clone)]
pub struct ResetVotesCommand {
    pub session_id: SessionId,
    /// Caller, when known. Must be a participant of the session.
    pub requested_by: Option<ParticipantId>,
}

/// Result of a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetVotesResult {
    pub cleared: usize,
}

/// Handler for resetting votes.
pub struct ResetVotesHandler {
    resolver: SessionResolver,
}

impl ResetVotesHandler {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, cmd: ResetVotesCommand) -> Result<ResetVotesResult, SessionError> {
        let mut session = self.resolver.lock(&cmd.session_id).await?;

        if let Some(caller) = &cmd.requested_by {
            if session.participant(caller).is_none() {
                return Err(SessionError::ParticipantNotFound);
            }
        }

        let cleared = session.reset_votes();
        session.touch(Timestamp::now());

        tracing::info!(session_id = %cmd.session_id, cleared, "Votes reset");

        Ok(ResetVotesResult { cleared })
    }
}
