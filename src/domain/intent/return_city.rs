//! Explicit return-city extraction.
//!
//! Most trips end where they started, so callers substitute the origin when
//! this extractor finds nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns;

static RETURN_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:return(?:ing)?|go back|fly back|head back|back home)\s+(?i:to)\s+([A-Za-z][A-Za-z ]*)")
        .expect("RETURN_PHRASE_RE must compile")
});

static HOME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:home)\s+(?i:to|in)\s+([A-Za-z][A-Za-z ]*)").expect("HOME_RE must compile")
});

static BACK_TO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?i:back)\s+(?i:to)\s+([A-Za-z][A-Za-z ]*)").expect("BACK_TO_RE must compile")
});

/// Finds an explicitly named return city. Returns an empty string when no
/// pattern yields a usable name; the assembler falls back to the origin.
pub fn extract_return(text: &str) -> String {
    for re in [&*RETURN_PHRASE_RE, &*HOME_RE, &*BACK_TO_RE] {
        let Some(raw) = re.captures(text).and_then(|caps| caps.get(1)) else {
            continue;
        };
        if let Some(name) = patterns::clean_place_name(raw.as_str()) {
            return name;
        }
    }

    String::new()
}
