//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types. Field names follow
//! the PascalCase wire format the poker frontend expects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::session::{SessionView, StatusSnapshot, VotingPhase};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSessionRequest {
    pub username: String,
    #[serde(default)]
    pub cards: Option<Vec<String>>,
}

/// Request to join an existing session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JoinSessionRequest {
    pub username: String,
}

/// Request to change session settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdministerRequest {
    pub should_show: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for create and join: where to go and which token to send.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionCreatedResponse {
    #[serde(rename = "SessionID")]
    pub session_id: String,
    pub bearer: String,
}

/// One row of the status table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoteResponse {
    pub name: String,
    pub vote: String,
}

/// Voting status of a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusResponse {
    pub votes: Vec<VoteResponse>,
    pub average: Option<f64>,
    pub closest: Option<f64>,
}

impl From<StatusSnapshot> for StatusResponse {
    fn from(snapshot: StatusSnapshot) -> Self {
        Self {
            votes: snapshot
                .votes
                .into_iter()
                .map(|v| VoteResponse {
                    vote: v.vote.as_label().to_string(),
                    name: v.name,
                })
                .collect(),
            average: snapshot.average,
            closest: snapshot.closest,
        }
    }
}

/// Session overview for the session page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionViewResponse {
    #[serde(rename = "SessionID")]
    pub session_id: String,
    pub cards: Vec<String>,
    pub participants: Vec<String>,
    pub is_admin: bool,
    pub should_show: bool,
    pub phase: VotingPhase,
    pub poll_interval_ms: u64,
}

impl SessionViewResponse {
    pub fn new(view: SessionView, poll_interval_ms: u64) -> Self {
        Self {
            session_id: view.id.to_string(),
            cards: view.cards,
            participants: view.participants,
            is_admin: view.is_admin,
            should_show: view.visible,
            phase: view.phase,
            poll_interval_ms,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
