//! Extractor configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Hard ceiling for `max_input_chars`, to keep a misconfigured deployment
/// from feeding arbitrarily large messages through the regex pass.
pub const MAX_INPUT_CHARS_CEILING: usize = 1_000_000;

fn default_max_input_chars() -> usize {
    4_000
}

/// Configuration for the trip-intent extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Inputs longer than this many characters are truncated before
    /// extraction. Trip requests are short; anything past a few thousand
    /// characters carries no additional signal.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
        }
    }
}

impl ExtractorConfig {
    /// Validate extractor configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_input_chars == 0 {
            return Err(ValidationError::InvalidMaxInputChars);
        }
        if self.max_input_chars > MAX_INPUT_CHARS_CEILING {
            return Err(ValidationError::MaxInputCharsTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_input_chars, 4_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_input_chars_is_rejected() {
        let config = ExtractorConfig {
            max_input_chars: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidMaxInputChars)
        ));
    }

    #[test]
    fn oversized_max_input_chars_is_rejected() {
        let config = ExtractorConfig {
            max_input_chars: MAX_INPUT_CHARS_CEILING + 1,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MaxInputCharsTooLarge)
        ));
    }
}
