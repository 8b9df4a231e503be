//! Session command and query handlers.

mod administer_session;
mod cast_vote;
mod create_session;
mod delete_session;
mod evict_idle_sessions;
mod get_session;
mod get_status;
mod join_session;
mod reset_votes;
mod resolver;

pub use administer_session::{AdministerSessionCommand, AdministerSessionHandler};
pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler, DeleteSessionResult};
pub use evict_idle_sessions::{EvictIdleSessionsConfig, EvictIdleSessionsHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use get_status::{GetStatusHandler, GetStatusQuery};
pub use join_session::{JoinSessionCommand, JoinSessionHandler, JoinSessionResult};
pub use reset_votes::{ResetVotesCommand, ResetVotesHandler, ResetVotesResult};
pub use resolver::{SessionResolver, UnknownSessionPolicy};
