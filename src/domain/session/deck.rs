//! Deck and card value objects.
//!
//! A deck is the ordered set of labels participants may vote with. Labels
//! double as URL path segments (`PUT /session/{id}/{vote}`), so words that
//! collide with sibling routes are filtered out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Labels that would shadow session sub-routes.
pub const RESERVED_CARD_LABELS: &[&str] = &["status", "reset", "join"];

/// Maximum length of a single card label.
pub const MAX_CARD_LENGTH: usize = 32;

/// Minimum number of cards a deck must keep after filtering.
pub const MIN_DECK_SIZE: usize = 2;

/// Maximum number of cards in a deck.
pub const MAX_DECK_SIZE: usize = 64;

/// Fibonacci-like deck used when a session is created without cards.
///
/// `?` must be sent percent-encoded (`%3F`) in the vote path.
pub const DEFAULT_CARDS: &[&str] = &["0", "1", "2", "3", "5", "8", "13", "21", "?"];

/// A single card of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(String);

impl Card {
    /// Returns the card label.
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Numeric value of the card, if its label is a finite number.
    pub fn numeric_value(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, duplicate-free set of cards.
///
/// # Invariants
///
/// - between `MIN_DECK_SIZE` and `MAX_DECK_SIZE` cards
/// - no empty, reserved, or duplicate labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck from raw labels.
    ///
    /// Labels are trimmed; blanks and reserved words are skipped and later
    /// duplicates are dropped.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if a label is too long or contains `/`
    /// - `OutOfRange` if fewer than `MIN_DECK_SIZE` or more than
    ///   `MAX_DECK_SIZE` cards remain
    pub fn new<I, S>(labels: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cards: Vec<Card> = Vec::new();
        for raw in labels {
            let label = raw.as_ref().trim();
            if label.is_empty() || RESERVED_CARD_LABELS.contains(&label) {
                continue;
            }
            if label.chars().count() > MAX_CARD_LENGTH {
                return Err(ValidationError::invalid_format(
                    "cards",
                    format!("card '{}' exceeds {} characters", label, MAX_CARD_LENGTH),
                ));
            }
            if label.contains('/') {
                return Err(ValidationError::invalid_format(
                    "cards",
                    format!("card '{}' must not contain '/'", label),
                ));
            }
            if cards.iter().any(|c| c.label() == label) {
                continue;
            }
            cards.push(Card(label.to_string()));
        }

        if cards.len() < MIN_DECK_SIZE || cards.len() > MAX_DECK_SIZE {
            return Err(ValidationError::out_of_range(
                "cards",
                MIN_DECK_SIZE as i32,
                MAX_DECK_SIZE as i32,
                cards.len() as i32,
            ));
        }

        Ok(Self { cards })
    }

    /// Builds a deck from a comma-separated list such as `"1,2,3,5,8"`.
    pub fn parse_list(list: &str) -> Result<Self, ValidationError> {
        Self::new(list.split(','))
    }

    /// The default Fibonacci-like deck.
    pub fn standard() -> Self {
        Self {
            cards: DEFAULT_CARDS.iter().map(|l| Card((*l).to_string())).collect(),
        }
    }

    /// Returns the cards in deck order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks up a card by label.
    pub fn find(&self, label: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.label() == label)
    }

    /// Numeric values of all numeric cards, in deck order.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cards.iter().filter_map(Card::numeric_value).collect()
    }

    /// True when every card is numeric.
    pub fn is_numeric(&self) -> bool {
        self.cards.iter().all(|c| c.numeric_value().is_some())
    }

    /// Card labels in deck order.
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.label().to_string()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
