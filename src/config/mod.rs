//! Application configuration module
//!
//! Provides type-safe configuration loading from environment variables using
//! the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WAYFARER_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use wayfarer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod extractor;

pub use error::{ConfigError, ValidationError};
pub use extractor::{ExtractorConfig, MAX_INPUT_CHARS_CEILING};

use serde::Deserialize;

/// Root application configuration.
///
/// Every section has serde defaults, so [`AppConfig::load()`] succeeds with
/// no environment set and yields the documented default behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extractor configuration (input bounds)
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `WAYFARER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `WAYFARER__EXTRACTOR__MAX_INPUT_CHARS=8000` -> `extractor.max_input_chars = 8000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WAYFARER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.extractor.validate()?;
        Ok(())
    }
}
