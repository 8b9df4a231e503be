//! Scrum Poker - Planning poker sessions with live vote aggregation
//!
//! Participants join a session, cast cards from the session deck, and poll
//! the session status. The admin reveals or hides individual votes; the
//! average and the closest card are always reported.
//!
//! Layout follows ports and adapters:
//! - `domain` - Session aggregate, deck, vote tally
//! - `ports` - Session store and credential validation traits
//! - `application` - One handler per command or query
//! - `adapters` - In-memory store, token validators, axum HTTP API
//! - `config` - Environment-based configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
