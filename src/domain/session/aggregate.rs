//! Session aggregate entity.
//!
//! A session is one poker room: a deck, the participants in join order with
//! their vote slots, and the visibility switch the admin controls.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::deck::{Card, Deck};
use super::errors::SessionError;
use super::snapshot::{ParticipantVote, SessionView, StatusSnapshot, VoteDisplay};
use crate::domain::foundation::{ParticipantId, SessionId, Timestamp, ValidationError};
use crate::domain::tally::VoteTally;

/// Maximum length for a participant display name.
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum number of participants per session.
pub const MAX_PARTICIPANTS: usize = 100;

/// Voting round progress, derived from the vote slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingPhase {
    /// No participant has a vote.
    Empty,
    /// At least one vote is cast.
    InProgress,
}

/// Administrative settings applied with one `administer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Reveal individual votes in status responses.
    pub show_votes: bool,
}

/// A participant and their vote slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    vote: Option<Card>,
    joined_at: Timestamp,
}

impl Participant {
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vote(&self) -> Option<&Card> {
        self.vote.as_ref()
    }

    pub fn joined_at(&self) -> &Timestamp {
        &self.joined_at
    }
}

/// Session aggregate.
///
/// # Invariants
///
/// - `id` and `deck` never change after creation
/// - participant ids are unique; `participants` is in join order
/// - every cast vote is a card of `deck`
/// - toggling visibility never touches vote slots
/// - once `removed` is set the session is detached from the store and takes
///   no further commands
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    deck: Deck,
    participants: Vec<Participant>,
    admin: Option<ParticipantId>,
    visible: bool,
    created_at: Timestamp,
    last_activity: Timestamp,
    removed: bool,
}

impl Session {
    /// Create an empty session without participants or admin.
    pub fn new(id: SessionId, deck: Deck) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            deck,
            participants: Vec::new(),
            admin: None,
            visible: false,
            created_at: now,
            last_activity: now,
            removed: false,
        }
    }

    /// Create a session with its creator joined as admin.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `admin_name` is empty or too long
    pub fn create(
        id: SessionId,
        deck: Deck,
        admin_name: &str,
    ) -> Result<(Self, ParticipantId), SessionError> {
        let mut session = Self::new(id, deck);
        let admin = session.join(admin_name)?;
        Ok((session, admin))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn admin(&self) -> Option<&ParticipantId> {
        self.admin.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_activity(&self) -> &Timestamp {
        &self.last_activity
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Current voting phase.
    pub fn phase(&self) -> VotingPhase {
        if self.participants.iter().any(|p| p.vote.is_some()) {
            VotingPhase::InProgress
        } else {
            VotingPhase::Empty
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_admin(&self, id: &ParticipantId) -> bool {
        self.admin.as_ref() == Some(id)
    }

    /// # Errors
    ///
    /// - `Forbidden` if `id` is not the admin
    pub fn authorize_admin(&self, id: &ParticipantId) -> Result<(), SessionError> {
        if self.is_admin(id) {
            Ok(())
        } else {
            Err(SessionError::forbidden())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a participant and hand out their identifier.
    ///
    /// The first participant of a session without admin becomes admin.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty or too long, or the session
    ///   is full
    pub fn join(&mut self, name: &str) -> Result<ParticipantId, SessionError> {
        let name = Self::validate_name(name)?;
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(SessionError::validation(
                "participants",
                format!("session is full ({} participants)", MAX_PARTICIPANTS),
            ));
        }

        let id = ParticipantId::generate();
        self.participants.push(Participant {
            id: id.clone(),
            name,
            vote: None,
            joined_at: Timestamp::now(),
        });
        if self.admin.is_none() {
            self.admin = Some(id.clone());
        }
        Ok(id)
    }

    /// Cast or replace a participant's vote.
    ///
    /// Returns the stored card and the previous vote, if any.
    ///
    /// # Errors
    ///
    /// - `ParticipantNotFound` if the participant has not joined
    /// - `InvalidVote` if `label` is not a card of the deck
    pub fn cast_vote(
        &mut self,
        participant: &ParticipantId,
        label: &str,
    ) -> Result<(Card, Option<Card>), SessionError> {
        let card = self
            .deck
            .find(label)
            .cloned()
            .ok_or_else(|| SessionError::invalid_vote(label))?;
        let slot = self
            .participants
            .iter_mut()
            .find(|p| &p.id == participant)
            .ok_or(SessionError::ParticipantNotFound)?;
        let previous = slot.vote.replace(card.clone());
        Ok((card, previous))
    }

    /// Clear every vote. Participants and visibility are kept.
    ///
    /// Returns how many votes were cleared.
    pub fn reset_votes(&mut self) -> usize {
        self.participants
            .iter_mut()
            .filter_map(|p| p.vote.take())
            .count()
    }

    /// Mark the session as taken out of the store.
    ///
    /// Must be called under the session lock, before the store entry goes.
    pub fn mark_removed(&mut self) {
        self.removed = true;
    }

    pub fn apply_settings(&mut self, settings: SessionSettings) {
        self.visible = settings.show_votes;
    }

    /// Record activity for idle tracking.
    pub fn touch(&mut self, now: Timestamp) {
        if self.last_activity.is_before(&now) {
            self.last_activity = now;
        }
    }

    /// True when nothing touched the session for longer than `max_idle`.
    pub fn is_idle(&self, now: &Timestamp, max_idle: Duration) -> bool {
        let idle = now.duration_since(&self.last_activity);
        idle.num_milliseconds() > max_idle.as_millis() as i64
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projections
    // ─────────────────────────────────────────────────────────────────────────

    /// Status as seen by `viewer`.
    ///
    /// Hidden votes of other participants are masked; the viewer always sees
    /// their own vote.
    pub fn snapshot(&self, viewer: Option<&ParticipantId>) -> StatusSnapshot {
        let votes = self
            .participants
            .iter()
            .map(|p| {
                let vote = match &p.vote {
                    None => VoteDisplay::NotCast,
                    Some(card) if self.visible || viewer == Some(&p.id) => {
                        VoteDisplay::Revealed(card.clone())
                    }
                    Some(_) => VoteDisplay::Hidden,
                };
                ParticipantVote {
                    name: p.name.clone(),
                    vote,
                }
            })
            .collect();

        let numeric_votes: Vec<f64> = self
            .participants
            .iter()
            .filter_map(|p| p.vote.as_ref().and_then(Card::numeric_value))
            .collect();
        let summary = VoteTally::summarize(&numeric_votes, &self.deck.numeric_values());

        StatusSnapshot {
            votes,
            average: summary.map(|s| s.average),
            closest: summary.and_then(|s| s.closest),
            visible: self.visible,
            phase: self.phase(),
        }
    }

    /// Session overview for `viewer`.
    pub fn view(&self, viewer: &ParticipantId) -> SessionView {
        SessionView {
            id: self.id,
            cards: self.deck.labels(),
            participants: self.participants.iter().map(|p| p.name.clone()).collect(),
            is_admin: self.is_admin(viewer),
            visible: self.visible,
            phase: self.phase(),
        }
    }

    fn validate_name(name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "username",
                format!("longer than {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}
