//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod router;
pub mod session;

pub use router::{app_router, cors_layer};
pub use session::{session_router, SessionAppState};
