//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod session;

pub use session::{
    // Commands
    AdministerSessionCommand, AdministerSessionHandler,
    CastVoteCommand, CastVoteHandler, CastVoteResult,
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult,
    DeleteSessionCommand, DeleteSessionHandler, DeleteSessionResult,
    JoinSessionCommand, JoinSessionHandler, JoinSessionResult,
    ResetVotesCommand, ResetVotesHandler, ResetVotesResult,
    // Queries
    GetSessionHandler, GetSessionQuery,
    GetStatusHandler, GetStatusQuery,
    // Background
    EvictIdleSessionsConfig, EvictIdleSessionsHandler,
    // Resolution
    SessionResolver, UnknownSessionPolicy,
};
