//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AdministerRequest, CreateSessionRequest, ErrorResponse, JoinSessionRequest,
    SessionCreatedResponse, SessionViewResponse, StatusResponse, VoteResponse,
};
pub use handlers::SessionAppState;
pub use routes::session_router;
