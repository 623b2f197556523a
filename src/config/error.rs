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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Server host must not be empty")]
    InvalidHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid {0}: must be a positive finite number")]
    InvalidTolerance(&'static str),

    #[error("Review threshold must not be smaller than the tolerance")]
    InvalidThresholdOrder,

    #[error("Power iteration needs at least one iteration")]
    InvalidIterationBudget,

    #[error("Fallback random index must be a positive finite number")]
    InvalidRandomIndex,

    #[error("Backend '{0}' is not available in this build")]
    BackendUnavailable(&'static str),
}
