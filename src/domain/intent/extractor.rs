//! Trip-intent assembly.
//!
//! Combines the origin, return, and destination extractors into one
//! [`TripIntent`] per inbound message. Assembly never fails: ambiguous or
//! unrecognizable input produces an empty/default-filled result and the
//! decision to ask a clarifying question is pushed to the caller.

use crate::config::ExtractorConfig;

use super::destinations;
use super::duration::DEFAULT_TRIP_DAYS;
use super::origin;
use super::return_city;
use super::types::TripIntent;

/// Stateless trip-intent extractor.
///
/// Safe to share across request handlers: every call allocates fresh local
/// state and touches no process-wide mutable data.
#[derive(Debug, Clone)]
pub struct TripIntentExtractor {
    max_input_chars: usize,
}

impl TripIntentExtractor {
    /// Creates an extractor with the default input bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor from validated configuration.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            max_input_chars: config.max_input_chars,
        }
    }

    /// Extracts a [`TripIntent`] from a free-text trip request.
    ///
    /// Oversized inputs are truncated to the configured bound before any
    /// pattern runs. The total duration is the sum of the destination stay
    /// lengths, defaulting to [`DEFAULT_TRIP_DAYS`] when no destination was
    /// found (every extracted destination carries at least one day, so a
    /// zero sum with a non-empty list should be unreachable; the check is
    /// kept explicit and logged).
    pub fn extract(&self, text: &str) -> TripIntent {
        let text = bound_input(text, self.max_input_chars);

        let origin = origin::extract_origin(text);
        let explicit_return = return_city::extract_return(text);
        let return_to = if explicit_return.is_empty() {
            origin.clone()
        } else {
            explicit_return
        };

        let destinations = destinations::extract_destinations(text, &origin, &return_to);

        let mut total_duration_days: u32 = destinations
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.duration_days));
        if total_duration_days == 0 {
            tracing::warn!(
                destination_count = destinations.len(),
                default_days = DEFAULT_TRIP_DAYS,
                "Trip carries no resolvable duration, applying default total"
            );
            total_duration_days = DEFAULT_TRIP_DAYS;
        }

        TripIntent {
            origin,
            destinations,
            return_to,
            total_duration_days,
        }
    }
}

impl Default for TripIntentExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

/// Truncates on a char boundary so an oversized message cannot drag the
/// regex pass across arbitrary amounts of text.
fn bound_input(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            tracing::debug!(limit = max_chars, "Input truncated before extraction");
            &text[..byte_idx]
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_origin_destinations_and_total() {
        let extractor = TripIntentExtractor::new();
        let intent =
            extractor.extract("Plan 3 weeks in Japan from Los Angeles. Visit Tokyo, Kyoto, and Osaka.");

        assert_eq!(intent.origin, "Los Angeles");
        assert_eq!(intent.destination_names(), vec!["Tokyo", "Kyoto", "Osaka"]);
        assert_eq!(intent.total_duration_days, 21);
        assert_eq!(intent.return_to, "Los Angeles");
    }

    #[test]
    fn explicit_return_overrides_origin() {
        let extractor = TripIntentExtractor::new();
        let intent = extractor.extract("from Boston, 3 days in Lisbon, then back to Porto");

        assert_eq!(intent.origin, "Boston");
        assert_eq!(intent.return_to, "Porto");
    }

    #[test]
    fn return_defaults_to_origin() {
        let extractor = TripIntentExtractor::new();
        let intent = extractor.extract("from Boston, 3 days in Lisbon");

        assert_eq!(intent.return_to, "Boston");
    }

    #[test]
    fn empty_extraction_gets_default_total() {
        let extractor = TripIntentExtractor::new();
        let intent = extractor.extract("I like travelling");

        assert_eq!(intent.origin, "");
        assert!(intent.destinations.is_empty());
        assert_eq!(intent.total_duration_days, 7);
        assert!(intent.is_low_confidence());
    }

    #[test]
    fn total_is_sum_of_destination_days() {
        let extractor = TripIntentExtractor::new();
        let intent = extractor.extract("3 days in London then 2 days in Paris");

        assert_eq!(intent.total_duration_days, 5);
    }

    #[test]
    fn oversized_input_is_truncated_not_rejected() {
        let config = ExtractorConfig {
            max_input_chars: 40,
        };
        let extractor = TripIntentExtractor::from_config(&config);

        // The destination phrase sits beyond the bound and must be ignored.
        let text = format!("{}3 days in London", "x".repeat(40));
        let intent = extractor.extract(&text);
        assert!(intent.destinations.is_empty());

        // Within the bound it is found as usual.
        let intent = extractor.extract("3 days in London");
        assert_eq!(intent.destination_names(), vec!["London"]);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let config = ExtractorConfig {
            max_input_chars: 3,
        };
        let extractor = TripIntentExtractor::from_config(&config);

        // Multi-byte input must not panic on slicing.
        let intent = extractor.extract("日本語のテキスト");
        assert!(intent.destinations.is_empty());
    }
}
