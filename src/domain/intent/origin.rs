//! Departure-city extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns;

static FROM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:from)\s+([A-Za-z][A-Za-z ]*)").expect("FROM_RE must compile")
});

static DEPARTING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:departing)(?:\s+(?i:from))?\s+([A-Za-z][A-Za-z ]*)")
        .expect("DEPARTING_RE must compile")
});

static LEAVING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:leaving)(?:\s+(?i:from))?\s+([A-Za-z][A-Za-z ]*)")
        .expect("LEAVING_RE must compile")
});

static STARTING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:starting)\s+(?i:from|in)\s+([A-Za-z][A-Za-z ]*)")
        .expect("STARTING_RE must compile")
});

/// Finds the departure city in free text. Returns an empty string when no
/// pattern yields a usable name.
///
/// The known multi-word city table is consulted first, because the generic
/// capture would truncate "Los Angeles" at a delimiter-free word boundary
/// only by luck. After that, patterns are tried in order and the first one
/// producing a clean name wins.
pub fn extract_origin(text: &str) -> String {
    if let Some(city) = patterns::known_city_after(text, "from") {
        return city.to_string();
    }

    for re in [&*FROM_RE, &*DEPARTING_RE, &*LEAVING_RE, &*STARTING_RE] {
        let Some(raw) = re.captures(text).and_then(|caps| caps.get(1)) else {
            continue;
        };
        if let Some(name) = patterns::clean_place_name(raw.as_str()) {
            return name;
        }
    }

    String::new()
}
