//! DeleteSessionHandler - Command handler for ending a session.

use std::sync::Arc;

use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
    pub requested_by: ParticipantId,
}

/// Result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSessionResult {
    /// False when the session was already gone.
    pub existed: bool,
}

/// Handler for deleting sessions.
///
/// Deleting an absent session succeeds. Deleting an existing one requires
/// the admin.
pub struct DeleteSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: DeleteSessionCommand,
    ) -> Result<DeleteSessionResult, SessionError> {
        let handle = match self.store.get(&cmd.session_id).await {
            Ok(handle) => handle,
            Err(SessionError::NotFound(_)) => {
                return Ok(DeleteSessionResult { existed: false });
            }
            Err(e) => return Err(e),
        };

        // Held across the removal so no command slips in between.
        let mut session = handle.lock().await;
        if session.is_removed() {
            return Ok(DeleteSessionResult { existed: false });
        }
        session.authorize_admin(&cmd.requested_by)?;
        session.mark_removed();
        let existed = self.store.delete(&cmd.session_id).await;
        drop(session);

        tracing::info!(session_id = %cmd.session_id, existed, "Session deleted");

        Ok(DeleteSessionResult { existed })
    }
}
