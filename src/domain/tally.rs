//! Vote tally - aggregation of numeric votes against a deck.
//!
//! Pure functions only. Callers that cannot guarantee non-empty input use
//! [`VoteTally::summarize`], which folds the empty cases into `None`.

use serde::Serialize;
use thiserror::Error;

/// Errors from tally computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("Cannot aggregate an empty set of votes")]
    EmptyInput,

    #[error("Deck has no numeric cards")]
    EmptyDeck,
}

/// Average and nearest deck value for one round of votes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TallySummary {
    pub average: f64,
    pub closest: Option<f64>,
}

/// Calculator for vote aggregates.
pub struct VoteTally;

impl VoteTally {
    /// Arithmetic mean of the votes.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `votes` is empty
    pub fn average(votes: &[f64]) -> Result<f64, TallyError> {
        if votes.is_empty() {
            return Err(TallyError::EmptyInput);
        }
        Ok(votes.iter().sum::<f64>() / votes.len() as f64)
    }

    /// Deck value with the smallest absolute distance to the average.
    ///
    /// Equidistant candidates resolve to the smaller value, regardless of
    /// the order of `deck`.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `votes` is empty
    /// - `EmptyDeck` if `deck` is empty
    pub fn closest(votes: &[f64], deck: &[f64]) -> Result<f64, TallyError> {
        let average = Self::average(votes)?;
        Self::nearest(average, deck).ok_or(TallyError::EmptyDeck)
    }

    /// Average plus closest card, or `None` when there is nothing to average.
    ///
    /// A deck without numeric cards still yields an average; only `closest`
    /// is absent then.
    pub fn summarize(votes: &[f64], deck: &[f64]) -> Option<TallySummary> {
        let average = Self::average(votes).ok()?;
        Some(TallySummary {
            average,
            closest: Self::nearest(average, deck),
        })
    }

    fn nearest(target: f64, deck: &[f64]) -> Option<f64> {
        deck.iter().copied().fold(None, |best, candidate| match best {
            None => Some(candidate),
            Some(current) => {
                let current_distance = (current - target).abs();
                let candidate_distance = (candidate - target).abs();
                if candidate_distance < current_distance
                    || (candidate_distance == current_distance && candidate < current)
                {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        })
    }
}
