//! Read-only projections of a session.

use serde::Serialize;

use super::deck::Card;
use super::VotingPhase;
use crate::domain::foundation::SessionId;

/// Shown in place of a vote that was cast but is not revealed.
pub const HIDDEN_VOTE: &str = "*";

/// What a viewer may see of one participant's vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteDisplay {
    NotCast,
    Hidden,
    Revealed(Card),
}

impl VoteDisplay {
    /// Label rendered in status responses.
    pub fn as_label(&self) -> &str {
        match self {
            VoteDisplay::NotCast => "",
            VoteDisplay::Hidden => HIDDEN_VOTE,
            VoteDisplay::Revealed(card) => card.label(),
        }
    }

    pub fn is_cast(&self) -> bool {
        !matches!(self, VoteDisplay::NotCast)
    }
}

/// One row of the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantVote {
    pub name: String,
    pub vote: VoteDisplay,
}

/// Status of a session as seen by one viewer.
///
/// `average` and `closest` cover every cast numeric vote, including ones
/// withheld from `votes`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub votes: Vec<ParticipantVote>,
    pub average: Option<f64>,
    pub closest: Option<f64>,
    pub visible: bool,
    pub phase: VotingPhase,
}

impl StatusSnapshot {
    /// Number of participants that have cast a vote.
    pub fn cast_count(&self) -> usize {
        self.votes.iter().filter(|v| v.vote.is_cast()).count()
    }
}

/// Session overview for a participant opening the session page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub cards: Vec<String>,
    pub participants: Vec<String>,
    pub is_admin: bool,
    pub visible: bool,
    pub phase: VotingPhase,
}
