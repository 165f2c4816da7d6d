//! Shared pattern fragments, lookup tables, and text-cleanup helpers.
//!
//! The `regex` crate has no lookaround and guarantees linear-time matching,
//! so capture groups here are deliberately broad and the precise cutoff
//! (delimiter words, trailing punctuation, straggler words) happens in the
//! helper functions below.

use once_cell::sync::Lazy;
use regex::Regex;

use super::duration;

/// A run of capitalized words ("London", "Los Angeles", "Washington DC").
/// The uppercase anchor keeps ordinary nouns from matching as city names.
pub(crate) const CITY: &str = r"[A-Z][a-zA-Z]*(?:\s+[A-Z][a-zA-Z]*)*";

/// A duration phrase with a digit or small word count and any stay unit.
pub(crate) const DURATION: &str =
    r"(?:\d+|(?i:a|one|two|three|four))\s*-?\s*(?i:days?|weeks?|nights?|months?)";

/// A whole-trip duration phrase: day or week counts only.
pub(crate) const TRIP_DURATION: &str =
    r"(?:\d+|(?i:a|one|two|three|four))\s*-?\s*(?i:days?|weeks?)";

/// A weekend mention, with optional article.
pub(crate) const WEEKEND: &str = r"(?:(?i:a|the)\s+)?(?i:weekend)";

/// Words that terminate a place-name capture ("from London to Paris").
const DELIMITER_WORDS: &[&str] = &["to", "on", "in", "next", "this", "for", "plan", "visit"];

/// Words stripped from the tail of a captured place name.
const STRAGGLER_WORDS: &[&str] = &["visit", "to", "next", "this"];

/// Words that are never place names on their own.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "there", "here", "home", "to", "on", "in", "next", "this", "for",
    "plan", "visit", "trip", "travel",
];

/// Multi-word city names the generic patterns would otherwise truncate at
/// the first word. Checked before any pattern-based origin matching.
const KNOWN_MULTIWORD_CITIES: &[&str] = &[
    "Los Angeles",
    "New York",
    "New Orleans",
    "New Delhi",
    "San Francisco",
    "San Diego",
    "Las Vegas",
    "Washington DC",
    "Mexico City",
    "Salt Lake City",
    "Hong Kong",
    "Kuala Lumpur",
    "Buenos Aires",
    "Rio de Janeiro",
    "Cape Town",
    "Tel Aviv",
    "Abu Dhabi",
];

const EUROPE_CITIES: &[&str] = &["London", "Paris", "Rome", "Barcelona", "Amsterdam"];
const ASIA_CITIES: &[&str] = &["Tokyo", "Bangkok", "Singapore", "Seoul", "Hong Kong"];
const AMERICA_CITIES: &[&str] = &["New York", "Chicago", "New Orleans", "Los Angeles", "Miami"];
const SOUTHEAST_ASIA_CITIES: &[&str] = &["Bangkok", "Singapore", "Hanoi", "Kuala Lumpur"];
const SOUTH_AMERICA_CITIES: &[&str] = &["Rio de Janeiro", "Buenos Aires", "Lima", "Santiago"];

static LIST_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",|\band\b").expect("LIST_SPLIT_RE must compile"));

static CITY_AT_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{CITY}")).expect("CITY_AT_START_RE must compile")
});

static TRIP_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({TRIP_DURATION})\b")).expect("TRIP_DURATION_RE must compile")
});

static ANY_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({DURATION}|{WEEKEND})\b")).expect("ANY_DURATION_RE must compile")
});

/// Returns the canonical multi-word city following `keyword` in the text,
/// if any ("from los angeles" -> "Los Angeles").
pub(crate) fn known_city_after(text: &str, keyword: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    KNOWN_MULTIWORD_CITIES
        .iter()
        .find(|city| lower.contains(&format!("{} {}", keyword, city.to_lowercase())))
        .copied()
}

/// Expands a region name into its representative cities.
pub(crate) fn region_cities(name: &str) -> Option<&'static [&'static str]> {
    match name.to_lowercase().as_str() {
        "europe" => Some(EUROPE_CITIES),
        "asia" => Some(ASIA_CITIES),
        "america" | "north america" | "the americas" => Some(AMERICA_CITIES),
        "southeast asia" => Some(SOUTHEAST_ASIA_CITIES),
        "south america" => Some(SOUTH_AMERICA_CITIES),
        _ => None,
    }
}

/// Truncates a raw capture at the first delimiter word.
pub(crate) fn cut_at_delimiter(raw: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for word in raw.split_whitespace() {
        if DELIMITER_WORDS.contains(&word.to_lowercase().as_str()) {
            break;
        }
        kept.push(word);
    }
    kept.join(" ")
}

/// Cleans a captured city name: trims, strips surrounding punctuation and
/// trailing straggler words. Names of one character or less are discarded.
pub(crate) fn clean_city_name(raw: &str) -> Option<String> {
    let trimmed = raw
        .trim()
        .trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"'));

    let mut words: Vec<&str> = trimmed.split_whitespace().collect();
    while let Some(last) = words.last() {
        if STRAGGLER_WORDS.contains(&last.to_lowercase().as_str()) {
            words.pop();
        } else {
            break;
        }
    }

    let name = words.join(" ");
    if name.len() <= 1 {
        return None;
    }
    Some(name)
}

/// Stricter cleanup for origin/return captures: delimiter cutoff, then only
/// the leading capitalized word run is kept, then the common cleanup, then
/// rejection of short names and stop words.
pub(crate) fn clean_place_name(raw: &str) -> Option<String> {
    let cut = cut_at_delimiter(raw);
    let leading = CITY_AT_START_RE.find(cut.trim())?;
    let name = clean_city_name(leading.as_str())?;
    if name.len() <= 2 {
        return None;
    }
    if STOP_WORDS.contains(&name.to_lowercase().as_str()) {
        return None;
    }
    Some(name)
}

/// Splits a captured list ("Tokyo, Kyoto, and Osaka") into city names,
/// keeping only the leading capitalized word run of each piece and
/// deduplicating case-insensitively in listed order.
pub(crate) fn split_city_list(raw: &str) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for part in LIST_SPLIT_RE.split(raw) {
        let Some(found) = CITY_AT_START_RE.find(part.trim()) else {
            continue;
        };
        let Some(name) = clean_city_name(found.as_str()) else {
            continue;
        };
        if cities.iter().any(|c| c.eq_ignore_ascii_case(&name)) {
            continue;
        }
        cities.push(name);
    }
    cities
}

/// Finds the first whole-trip duration phrase ("10 days", "two weeks")
/// anywhere in the text and normalizes it.
pub(crate) fn find_trip_duration(text: &str) -> Option<(u32, String)> {
    TRIP_DURATION_RE
        .find(text)
        .map(|m| (duration::normalize(m.as_str()), m.as_str().to_string()))
}

/// Finds the first duration-looking substring of any kind (days, weeks,
/// nights, months, weekend) anywhere in the text.
pub(crate) fn find_any_duration(text: &str) -> Option<(u32, String)> {
    ANY_DURATION_RE
        .find(text)
        .map(|m| (duration::normalize(m.as_str()), m.as_str().to_string()))
}
