//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid default deck: {0}")]
    InvalidDefaultDeck(String),

    #[error("Cleanup interval must be positive")]
    InvalidCleanupInterval,

    #[error("Max idle time must be positive")]
    InvalidMaxIdle,

    #[error("Poll interval must be at least 100ms")]
    InvalidPollInterval,
}
