//! Property tests for the extractor's structural guarantees.
//!
//! The extractor promises a well-formed `TripIntent` for *any* input, so
//! these properties run against both arbitrary text and generated trip-like
//! sentences.

use proptest::prelude::*;

use wayfarer::TripIntentExtractor;

fn city_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("London".to_string()),
        Just("Paris".to_string()),
        Just("Tokyo".to_string()),
        Just("Buenos Aires".to_string()),
        Just("Reykjavik".to_string()),
        Just("Oslo".to_string()),
    ]
}

fn trip_sentence() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..30, city_name()).prop_map(|(n, city)| format!("{n} days in {city}")),
        (1u32..4, city_name()).prop_map(|(n, city)| format!("{n} weeks in {city}")),
        city_name().prop_map(|city| format!("weekend in {city}")),
        (city_name(), 1u32..10).prop_map(|(city, n)| format!("visit {city} for {n} nights")),
        (1u32..21, city_name(), city_name())
            .prop_map(|(n, a, b)| format!("{n} days across {a}, {b}")),
        city_name().prop_map(|city| format!("fly to {city}")),
    ]
}

proptest! {
    #[test]
    fn total_duration_is_never_zero(text in ".{0,300}") {
        let intent = TripIntentExtractor::new().extract(&text);
        prop_assert!(intent.total_duration_days >= 1);
    }

    #[test]
    fn orders_are_contiguous_from_one(text in ".{0,300}") {
        let intent = TripIntentExtractor::new().extract(&text);
        for (idx, destination) in intent.destinations.iter().enumerate() {
            prop_assert_eq!(destination.order as usize, idx + 1);
        }
    }

    #[test]
    fn extraction_is_idempotent(text in ".{0,300}") {
        let extractor = TripIntentExtractor::new();
        prop_assert_eq!(extractor.extract(&text), extractor.extract(&text));
    }

    #[test]
    fn every_destination_has_at_least_one_day(text in trip_sentence()) {
        let intent = TripIntentExtractor::new().extract(&text);
        for destination in &intent.destinations {
            prop_assert!(destination.duration_days >= 1);
        }
    }

    #[test]
    fn total_equals_sum_when_destinations_exist(text in trip_sentence()) {
        let intent = TripIntentExtractor::new().extract(&text);
        prop_assume!(!intent.destinations.is_empty());

        let sum: u32 = intent.destinations.iter().map(|d| d.duration_days).sum();
        prop_assert_eq!(intent.total_duration_days, sum);
    }

    #[test]
    fn destination_names_are_unique_case_insensitively(text in trip_sentence()) {
        let intent = TripIntentExtractor::new().extract(&text);
        let mut seen: Vec<String> = Vec::new();
        for destination in &intent.destinations {
            let lowered = destination.name.to_lowercase();
            prop_assert!(!seen.contains(&lowered), "duplicate destination {}", destination.name);
            seen.push(lowered);
        }
    }

    #[test]
    fn generated_trip_sentences_yield_a_destination(text in trip_sentence()) {
        let intent = TripIntentExtractor::new().extract(&text);
        prop_assert!(!intent.destinations.is_empty(), "no destination in {text:?}");
    }
}
