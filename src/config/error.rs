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
    #[error("Extractor max_input_chars must be greater than zero")]
    InvalidMaxInputChars,

    #[error("Extractor max_input_chars exceeds maximum allowed (1000000)")]
    MaxInputCharsTooLarge,
}
