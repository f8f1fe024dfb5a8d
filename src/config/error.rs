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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Convergence tolerance must be positive and below 1")]
    InvalidTolerance,

    #[error("Max iterations must be between 1 and 100000")]
    InvalidMaxIterations,

    #[error("Consistency threshold must be positive")]
    InvalidConsistencyThreshold,

    #[error("Score decimals must be at most {0}")]
    InvalidScoreDecimals(u32),
}
