//! CastVoteHandler - Command handler for recording a participant's vote.

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::{Card, SessionError};

use super::SessionResolver;

/// Command to cast or replace a vote.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub session_id: SessionId,
    pub participant_id: ParticipantId,
    pub vote: String,
}

/// Result of a recorded vote.
#[derive(Debug, Clone)]
pub struct CastVoteResult {
    pub card: Card,
    pub previous: Option<Card>,
}

/// Handler for casting votes.
pub struct CastVoteHandler {
    resolver: SessionResolver,
}

impl CastVoteHandler {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, cmd: CastVoteCommand) -> Result<CastVoteResult, SessionError> {
        let mut session = self.resolver.lock(&cmd.session_id).await?;

        let (card, previous) = session.cast_vote(&cmd.participant_id, &cmd.vote)?;
        session.touch(Timestamp::now());

        tracing::debug!(
            session_id = %cmd.session_id,
            participant_id = %cmd.participant_id,
            replaced = previous.is_some(),
            "Vote cast"
        );

        Ok(CastVoteResult { card, previous })
    }
}
