//! Session domain module.
//!
//! A poker session is the unit of voting: a deck, the participants with
//! their vote slots, and the visibility switch. Status snapshots project a
//! session for one viewer and carry the vote tally.

mod aggregate;
mod deck;
mod errors;
mod snapshot;

pub use aggregate::{
    Participant, Session, SessionSettings, VotingPhase, MAX_NAME_LENGTH, MAX_PARTICIPANTS,
};
pub use deck::{
    Card, Deck, DEFAULT_CARDS, MAX_CARD_LENGTH, MAX_DECK_SIZE, MIN_DECK_SIZE,
    RESERVED_CARD_LABELS,
};
pub use errors::SessionError;
pub use snapshot::{ParticipantVote, SessionView, StatusSnapshot, VoteDisplay, HIDDEN_VOTE};
