//! AdministerSessionHandler - Command handler for session settings.

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::{SessionError, SessionSettings};

use super::SessionResolver;

/// Command to change session settings.
#[derive(Debug, Clone)]
pub struct AdministerSessionCommand {
    pub session_id: SessionId,
    pub requested_by: ParticipantId,
    pub settings: SessionSettings,
}

/// Handler for administering sessions. Only the admin may change settings.
pub struct AdministerSessionHandler {
    resolver: SessionResolver,
}

impl AdministerSessionHandler {
    pub fn new(resolver: SessionResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, cmd: AdministerSessionCommand) -> Result<(), SessionError> {
        let mut session = self.resolver.lock(&cmd.session_id).await?;

        session.authorize_admin(&cmd.requested_by)?;
        session.apply_settings(cmd.settings);
        session.touch(Timestamp::now());

        tracing::info!(
            session_id = %cmd.session_id,
            show_votes = cmd.settings.show_votes,
            "Session settings updated"
        );

        Ok(())
    }
}
