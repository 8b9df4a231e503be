//! Session configuration

use serde::Deserialize;
use std::time::Duration;

use crate::application::UnknownSessionPolicy;
use crate::domain::session::{Deck, DEFAULT_CARDS};

use super::error::ValidationError;

/// Session behaviour configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Comma-separated card labels used when a session is created without a deck
    #[serde(default = "default_cards")]
    pub default_cards: String,

    /// What commands do with unknown session ids
    #[serde(default)]
    pub unknown_session_policy: UnknownSessionPolicy,

    /// Seconds between idle-session sweeps
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,

    /// Seconds of inactivity after which a session is evicted
    #[serde(default = "default_max_idle")]
    pub max_idle_secs: u64,

    /// Status poll interval advertised to clients, in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl SessionConfig {
    /// Parse the default deck
    pub fn default_deck(&self) -> Result<Deck, ValidationError> {
        Deck::parse_list(&self.default_cards)
            .map_err(|e| ValidationError::InvalidDefaultDeck(e.to_string()))
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }

    pub fn max_idle(&self) -> Duration {
        Duration::from_secs(self.max_idle_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.default_deck()?;
        if self.cleanup_interval_secs == 0 {
            return Err(ValidationError::InvalidCleanupInterval);
        }
        if self.max_idle_secs == 0 {
            return Err(ValidationError::InvalidMaxIdle);
        }
        if self.poll_interval_ms < 100 {
            return Err(ValidationError::InvalidPollInterval);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_cards: default_cards(),
            unknown_session_policy: UnknownSessionPolicy::default(),
            cleanup_interval_secs: default_cleanup_interval(),
            max_idle_secs: default_max_idle(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

fn default_cards() -> String {
    DEFAULT_CARDS.join(",")
}

fn default_cleanup_interval() -> u64 {
    900
}

fn default_max_idle() -> u64 {
    3600
}

fn default_poll_interval() -> u64 {
    2500
}
