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
    #[error("Dataset path must not be empty")]
    EmptyDatasetPath,

    #[error("Hover debounce must be greater than zero")]
    ZeroDebounce,

    #[error("Hover debounce exceeds maximum allowed (5000 ms)")]
    DebounceTooLarge,
}
