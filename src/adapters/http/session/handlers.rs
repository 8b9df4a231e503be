//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::session::{
    AdministerSessionCommand, AdministerSessionHandler, CastVoteCommand, CastVoteHandler,
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, GetStatusHandler, GetStatusQuery, JoinSessionCommand,
    JoinSessionHandler, ResetVotesCommand, ResetVotesHandler, SessionResolver,
    UnknownSessionPolicy,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::{Deck, SessionError, SessionSettings};
use crate::ports::SessionStore;

use super::dto::{
    AdministerRequest, CreateSessionRequest, ErrorResponse, JoinSessionRequest,
    SessionCreatedResponse, SessionViewResponse, StatusResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for session routes.
///
/// Holds the store and settings; command handlers are built per request.
#[derive(Clone)]
pub struct SessionAppState {
    store: Arc<dyn SessionStore>,
    resolver: SessionResolver,
    default_deck: Deck,
    poll_interval_ms: u64,
}

impl SessionAppState {
    pub fn new(
        store: Arc<dyn SessionStore>,
        policy: UnknownSessionPolicy,
        default_deck: Deck,
        poll_interval_ms: u64,
    ) -> Self {
        Self {
            resolver: SessionResolver::new(store.clone(), policy),
            store,
            default_deck,
            poll_interval_ms,
        }
    }

    pub fn create_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.store.clone(), self.default_deck.clone())
    }

    pub fn join_handler(&self) -> JoinSessionHandler {
        JoinSessionHandler::new(self.resolver.clone())
    }

    pub fn get_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.resolver.clone())
    }

    pub fn status_handler(&self) -> GetStatusHandler {
        GetStatusHandler::new(self.resolver.clone())
    }

    pub fn vote_handler(&self) -> CastVoteHandler {
        CastVoteHandler::new(self.resolver.clone())
    }

    pub fn reset_handler(&self) -> ResetVotesHandler {
        ResetVotesHandler::new(self.resolver.clone())
    }

    pub fn administer_handler(&self) -> AdministerSessionHandler {
        AdministerSessionHandler::new(self.resolver.clone())
    }

    pub fn delete_handler(&self) -> DeleteSessionHandler {
        DeleteSessionHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /session - Create a new session
pub async fn create_session(
    State(state): State<SessionAppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    let cmd = CreateSessionCommand {
        admin_name: req.username,
        cards: req.cards,
    };

    match state.create_handler().handle(cmd).await {
        Ok(result) => {
            let response = SessionCreatedResponse {
                session_id: result.session_id.to_string(),
                bearer: result.admin_token.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /session/:id/join - Join a session under a name
pub async fn join_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<JoinSessionRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = JoinSessionCommand {
        session_id,
        name: req.username,
    };

    match state.join_handler().handle(cmd).await {
        Ok(result) => {
            let response = SessionCreatedResponse {
                session_id: result.session_id.to_string(),
                bearer: result.participant_token.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /session/:id - Session overview
pub async fn get_session(
    State(state): State<SessionAppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetSessionQuery {
        session_id,
        viewer: user.id,
    };

    match state.get_handler().handle(query).await {
        Ok(view) => {
            let response = SessionViewResponse::new(view, state.poll_interval_ms);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /session/:id/status - Voting status
pub async fn get_status(
    State(state): State<SessionAppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetStatusQuery {
        session_id,
        viewer: Some(user.id),
    };

    match state.status_handler().handle(query).await {
        Ok(snapshot) => {
            let response: StatusResponse = snapshot.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// PUT /session/:id/:vote - Cast a vote
pub async fn cast_vote(
    State(state): State<SessionAppState>,
    RequireAuth(user): RequireAuth,
    Path((session_id, vote)): Path<(String, String)>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CastVoteCommand {
        session_id,
        participant_id: user.id,
        vote,
    };

    match state.vote_handler().handle(cmd).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /session/:id/reset - Start a new round
pub async fn reset_votes(
    State(state): State<SessionAppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ResetVotesCommand {
        session_id,
        requested_by: Some(user.id),
    };

    match state.reset_handler().handle(cmd).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// PUT /session/:id - Change session settings
pub async fn administer_session(
    State(state): State<SessionAppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<AdministerRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AdministerSessionCommand {
        session_id,
        requested_by: user.id,
        settings: SessionSettings {
            show_votes: req.should_show,
        },
    };

    match state.administer_handler().handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /session/:id - End a session
pub async fn delete_session(
    State(state): State<SessionAppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteSessionCommand {
        session_id,
        requested_by: user.id,
    };

    match state.delete_handler().handle(cmd).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /health - Liveness probe
pub async fn health(State(state): State<SessionAppState>) -> Response {
    let sessions = state.store.count().await;
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "sessions": sessions })),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

pub(crate) fn handle_session_error(error: SessionError) -> Response {
    let body = ErrorResponse::new(error.code(), error.message());
    match error {
        SessionError::NotFound(_) | SessionError::ParticipantNotFound => {
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        SessionError::Forbidden => (StatusCode::FORBIDDEN, Json(body)).into_response(),
        SessionError::InvalidVote(vote) => (
            StatusCode::BAD_REQUEST,
            Json(body.with_details(json!({ "vote": vote }))),
        )
            .into_response(),
        SessionError::ValidationFailed { field, .. } => (
            StatusCode::BAD_REQUEST,
            Json(body.with_details(json!({ "field": field }))),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn session_error_not_found_maps_to_404() {
        let error = SessionError::NotFound(SessionId::new());
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn participant_not_found_maps_to_404() {
        let response = handle_session_error(SessionError::ParticipantNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn session_error_forbidden_maps_to_403() {
        let error = SessionError::Forbidden;
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn invalid_vote_maps_to_400_with_code() {
        let response = handle_session_error(SessionError::invalid_vote("4"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], "INVALID_VOTE");
        assert_eq!(body["details"]["vote"], "4");
    }

    #[test]
    fn session_error_validation_failed_maps_to_400() {
        let error = SessionError::ValidationFailed {
            field: "username".to_string(),
            message: "Too long".to_string(),
        };
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_session_id_maps_to_400() {
        let response = parse_session_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_FAILED");
    }
}
