//! Domain layer - Core business logic.
//!
//! Pure domain types with no infrastructure dependencies:
//!
//! - `foundation` - identifiers, timestamps, auth and error vocabulary
//! - `session` - the poker session aggregate, deck and snapshots
//! - `tally` - vote aggregation

pub mod foundation;
pub mod session;
pub mod tally;
