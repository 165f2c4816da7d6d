//! Destination-list extraction.
//!
//! Free-text trip descriptions follow a small number of recognizable idioms
//! ("Plan 3 weeks in Japan... visit Tokyo, Kyoto, Osaka", "2 weeks across
//! London, Paris, Rome"). The extractor runs an ordered cascade of stages,
//! most specific first, and stops at the first stage producing at least one
//! destination. Multi-city stages split a total duration evenly across the
//! named cities, which the generic per-phrase scan cannot do; that is why
//! they run first.

use once_cell::sync::Lazy;
use regex::Regex;

use super::duration::{self, DEFAULT_TRIP_DAYS, WEEKEND_DAYS};
use super::patterns::{self, CITY, DURATION, TRIP_DURATION, WEEKEND};
use super::types::{Destination, UNSPECIFIED_DURATION};

static PLAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?i:plan(?:ning)?)\s+({TRIP_DURATION})\s+(?i:in)\s+[A-Za-z]"
    ))
    .expect("PLAN_RE must compile")
});

static VISIT_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?i:visit)\s+([^.!?;]+)").expect("VISIT_LIST_RE must compile"));

static INCLUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?i:include)\s+([^.!?;]+)").expect("INCLUDE_RE must compile"));

// Capital V only: "Visit A, B, and C" as its own sentence is a strong
// multi-city signal; lowercase "visit" mid-sentence is handled later.
static VISIT_SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bVisit\s+([^.!?;]+)").expect("VISIT_SENTENCE_RE must compile"));

static ACROSS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b({TRIP_DURATION})\s+(?i:across)\s+([^.!?;]+)"
    ))
    .expect("ACROSS_RE must compile")
});

static EXPLORING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b({TRIP_DURATION})\s+(?i:exploring)\s+([^.!?;]+)"
    ))
    .expect("EXPLORING_RE must compile")
});

static VISITING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b({TRIP_DURATION})\s+(?i:visiting)\s+([^.!?;]+)"
    ))
    .expect("VISITING_RE must compile")
});

static LAST_RESORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?i:in|to|visit|explore)\s+({CITY})"))
        .expect("LAST_RESORT_RE must compile")
});

/// Which capture group holds what in a generic phrase pattern.
#[derive(Debug, Clone, Copy)]
enum Layout {
    /// Group 1 is the duration phrase, group 2 the city.
    DurationThenCity,
    /// Group 1 is the city, group 2 the duration phrase.
    CityThenDuration,
    /// Group 1 is a weekend mention, group 2 the city. Weekends are a fixed
    /// two days, applied inline rather than through the normalizer.
    WeekendThenCity,
    /// Group 1 is the city; the pattern carries no duration.
    CityOnly,
}

struct GenericPattern {
    name: &'static str,
    re: Regex,
    layout: Layout,
}

impl GenericPattern {
    fn new(name: &'static str, pattern: String, layout: Layout) -> Self {
        Self {
            name,
            re: Regex::new(&pattern).unwrap_or_else(|e| panic!("{name} must compile: {e}")),
            layout,
        }
    }
}

static GENERIC_PATTERNS: Lazy<Vec<GenericPattern>> = Lazy::new(|| {
    vec![
        GenericPattern::new(
            "days_in_city",
            format!(r"\b(\d+\s*-?\s*(?i:days?))\s+(?i:in)\s+({CITY})"),
            Layout::DurationThenCity,
        ),
        GenericPattern::new(
            "weeks_in_city",
            format!(r"\b((?:\d+|(?i:a|one|two|three|four))\s*-?\s*(?i:weeks?))\s+(?i:in)\s+({CITY})"),
            Layout::DurationThenCity,
        ),
        GenericPattern::new(
            "weekend_in_city",
            format!(r"\b({WEEKEND})\s+(?i:in)\s+({CITY})"),
            Layout::WeekendThenCity,
        ),
        GenericPattern::new(
            "weekend_trip_to_city",
            format!(r"\b({WEEKEND})\s+(?i:trip\s+to)\s+({CITY})"),
            Layout::WeekendThenCity,
        ),
        GenericPattern::new(
            "visit_city_for_duration",
            format!(r"\b(?i:visit(?:ing)?|explor(?:e|ing))\s+({CITY})\s+(?i:for)\s+({DURATION}|{WEEKEND})"),
            Layout::CityThenDuration,
        ),
        GenericPattern::new(
            "spend_duration_in_city",
            format!(r"\b(?i:spend(?:ing)?)\s+({DURATION}|{WEEKEND})\s+(?i:in)\s+({CITY})"),
            Layout::DurationThenCity,
        ),
        GenericPattern::new(
            "city_for_days",
            format!(r"\b({CITY})\s+(?i:for)\s+(\d+\s*-?\s*(?i:days?|nights?))"),
            Layout::CityThenDuration,
        ),
        GenericPattern::new(
            "travel_to_city",
            format!(r"\b(?i:travel|fly|go)\s+(?i:to)\s+({CITY})"),
            Layout::CityOnly,
        ),
    ]
});

struct Stage {
    name: &'static str,
    run: fn(&str, &str, &str) -> Vec<Destination>,
}

const CASCADE: &[Stage] = &[
    Stage {
        name: "plan_total_with_visit_list",
        run: stage_plan_with_visit_list,
    },
    Stage {
        name: "include_list",
        run: stage_include_list,
    },
    Stage {
        name: "visit_sentence_list",
        run: stage_visit_sentence_list,
    },
    Stage {
        name: "duration_across_list",
        run: stage_across,
    },
    Stage {
        name: "duration_exploring",
        run: stage_exploring,
    },
    Stage {
        name: "duration_visiting_list",
        run: stage_visiting,
    },
    Stage {
        name: "generic_phrase_scan",
        run: stage_generic_scan,
    },
    Stage {
        name: "last_resort",
        run: stage_last_resort,
    },
];

/// Extracts the ordered destination list from free text.
///
/// Stages are evaluated top to bottom; the first stage yielding at least one
/// destination wins and the rest are skipped. Returns an empty list when
/// nothing in the text looks like a destination.
pub fn extract_destinations(text: &str, origin: &str, return_to: &str) -> Vec<Destination> {
    for stage in CASCADE {
        let found = (stage.run)(text, origin, return_to);
        if !found.is_empty() {
            tracing::debug!(
                stage = stage.name,
                count = found.len(),
                "Destination cascade stage matched"
            );
            return found;
        }
    }

    tracing::debug!("No destination cascade stage matched");
    Vec::new()
}

/// Splits `total_days` evenly across the cities, giving the remainder one
/// extra day each to the earliest cities in listed order.
fn distribute(cities: Vec<String>, total_days: u32, duration_text: &str) -> Vec<Destination> {
    let count = cities.len() as u32;
    let base = total_days / count;
    let remainder = (total_days % count) as usize;

    cities
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let extra = u32::from(idx < remainder);
            Destination::new(name, base + extra, duration_text, idx as u32 + 1)
        })
        .collect()
}

/// "Plan N days/weeks in REGION ... visit A, B, and C"
fn stage_plan_with_visit_list(text: &str, _origin: &str, _return_to: &str) -> Vec<Destination> {
    let Some(total_phrase) = PLAN_RE.captures(text).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };
    let Some(list) = VISIT_LIST_RE.captures(text).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    let cities = patterns::split_city_list(list.as_str());
    if cities.is_empty() {
        return Vec::new();
    }

    let total = duration::normalize(total_phrase.as_str());
    distribute(cities, total, total_phrase.as_str())
}

/// "Include A, B, and C", duration taken from anywhere in the text.
fn stage_include_list(text: &str, _origin: &str, _return_to: &str) -> Vec<Destination> {
    list_with_ambient_duration(&INCLUDE_RE, text)
}

/// "Visit A, B, and C" as a standalone sentence.
fn stage_visit_sentence_list(text: &str, _origin: &str, _return_to: &str) -> Vec<Destination> {
    list_with_ambient_duration(&VISIT_SENTENCE_RE, text)
}

fn list_with_ambient_duration(re: &Regex, text: &str) -> Vec<Destination> {
    let Some(list) = re.captures(text).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    let cities = patterns::split_city_list(list.as_str());
    if cities.is_empty() {
        return Vec::new();
    }

    match patterns::find_trip_duration(text) {
        Some((total, phrase)) => distribute(cities, total, &phrase),
        None => distribute(cities, DEFAULT_TRIP_DAYS, UNSPECIFIED_DURATION),
    }
}

/// "N days/weeks across A, B, C"
fn stage_across(text: &str, _origin: &str, _return_to: &str) -> Vec<Destination> {
    list_with_leading_duration(&ACROSS_RE, text)
}

/// "N days/weeks visiting A, B, C"
fn stage_visiting(text: &str, _origin: &str, _return_to: &str) -> Vec<Destination> {
    list_with_leading_duration(&VISITING_RE, text)
}

fn list_with_leading_duration(re: &Regex, text: &str) -> Vec<Destination> {
    let Some(caps) = re.captures(text) else {
        return Vec::new();
    };
    let (Some(phrase), Some(tail)) = (caps.get(1), caps.get(2)) else {
        return Vec::new();
    };

    let cities = patterns::split_city_list(tail.as_str());
    if cities.is_empty() {
        return Vec::new();
    }

    distribute(cities, duration::normalize(phrase.as_str()), phrase.as_str())
}

/// "N days/weeks exploring REGION-or-list": comma/and lists distribute like
/// the other multi-city stages; a bare name goes through region expansion,
/// falling back to a single destination for unknown regions.
fn stage_exploring(text: &str, _origin: &str, _return_to: &str) -> Vec<Destination> {
    let Some(caps) = EXPLORING_RE.captures(text) else {
        return Vec::new();
    };
    let (Some(phrase), Some(tail)) = (caps.get(1), caps.get(2)) else {
        return Vec::new();
    };

    let tail_text = tail.as_str();
    if tail_text.contains(',') || tail_text.to_lowercase().contains(" and ") {
        let cities = patterns::split_city_list(tail_text);
        if cities.is_empty() {
            return Vec::new();
        }
        return distribute(cities, duration::normalize(phrase.as_str()), phrase.as_str());
    }

    let Some(name) = patterns::clean_place_name(tail_text) else {
        return Vec::new();
    };
    let total = duration::normalize(phrase.as_str());

    match patterns::region_cities(&name) {
        Some(region) => {
            tracing::debug!(region = %name, cities = region.len(), "Expanded region into cities");
            let cities = region.iter().map(|c| c.to_string()).collect();
            distribute(cities, total, phrase.as_str())
        }
        None => vec![Destination::new(name, total, phrase.as_str(), 1)],
    }
}

/// Generic per-phrase scan: every non-overlapping match of every pattern,
/// in pattern order, with dedupe and origin/return exclusion.
fn stage_generic_scan(text: &str, origin: &str, return_to: &str) -> Vec<Destination> {
    let mut found: Vec<Destination> = Vec::new();

    for pattern in GENERIC_PATTERNS.iter() {
        for caps in pattern.re.captures_iter(text) {
            let (city_group, resolved) = match pattern.layout {
                Layout::DurationThenCity => {
                    let resolved = caps
                        .get(1)
                        .map(|m| (duration::normalize(m.as_str()), m.as_str().to_string()));
                    (caps.get(2), resolved)
                }
                Layout::CityThenDuration => {
                    let resolved = caps
                        .get(2)
                        .map(|m| (duration::normalize(m.as_str()), m.as_str().to_string()));
                    (caps.get(1), resolved)
                }
                Layout::WeekendThenCity => {
                    let resolved = caps
                        .get(1)
                        .map(|m| (WEEKEND_DAYS, m.as_str().to_string()));
                    (caps.get(2), resolved)
                }
                Layout::CityOnly => (caps.get(1), None),
            };

            let Some(name) = city_group.and_then(|m| patterns::clean_city_name(m.as_str())) else {
                continue;
            };
            if !accept(&name, &found, origin, return_to) {
                tracing::debug!(pattern = pattern.name, name = %name, "Rejected candidate destination");
                continue;
            }

            let (days, phrase) =
                resolved.unwrap_or((DEFAULT_TRIP_DAYS, UNSPECIFIED_DURATION.to_string()));
            let order = found.len() as u32 + 1;
            found.push(Destination::new(name, days, phrase, order));
        }
    }

    found
}

/// Last resort: the first "in/to/visit/explore City" anywhere, paired with
/// the first duration-looking substring anywhere (default one week).
fn stage_last_resort(text: &str, origin: &str, return_to: &str) -> Vec<Destination> {
    let Some(name) = LAST_RESORT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| patterns::clean_city_name(m.as_str()))
    else {
        return Vec::new();
    };
    if !accept(&name, &[], origin, return_to) {
        return Vec::new();
    }

    let (days, phrase) = patterns::find_any_duration(text)
        .unwrap_or((DEFAULT_TRIP_DAYS, "one week".to_string()));
    vec![Destination::new(name, days, phrase, 1)]
}

fn accept(name: &str, found: &[Destination], origin: &str, return_to: &str) -> bool {
    if !origin.is_empty() && name.eq_ignore_ascii_case(origin) {
        return false;
    }
    if !return_to.is_empty() && name.eq_ignore_ascii_case(return_to) {
        return false;
    }
    !found.iter().any(|d| d.name.eq_ignore_ascii_case(name))
}
