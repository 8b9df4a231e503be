//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    administer_session, cast_vote, create_session, delete_session, get_session, get_status,
    health, join_session, reset_votes, SessionAppState,
};

/// Creates the session router with all endpoints.
///
/// Routes:
/// - `POST /session` - Create a session
/// - `POST /session/:id/join` - Join a session
/// - `GET /session/:id` - Session overview
/// - `PUT /session/:id` - Change settings (admin)
/// - `DELETE /session/:id` - Delete a session (admin)
/// - `GET /session/:id/status` - Voting status
/// - `GET /session/:id/reset` - Clear all votes
/// - `PUT /session/:id/:vote` - Cast a vote
/// - `GET /health` - Liveness probe
pub fn session_router() -> Router<SessionAppState> {
    Router::new()
        .route("/session", post(create_session))
        .route(
            "/session/:id",
            get(get_session)
                .put(administer_session)
                .delete(delete_session),
        )
        .route("/session/:id/join", post(join_session))
        .route("/session/:id/status", get(get_status))
        .route("/session/:id/reset", get(reset_votes))
        .route("/session/:id/:vote", put(cast_vote))
        .route("/health", get(health))
}
