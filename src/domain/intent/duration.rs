//! Duration phrase normalization.
//!
//! Converts free-text duration phrases ("a week", "weekend", "10-day",
//! "5 nights") into a day count. Rules are applied in priority order; when
//! nothing matches, a low-confidence fallback of [`FALLBACK_STAY_DAYS`] is
//! substituted and logged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Days substituted when no duration rule matches a phrase.
pub const FALLBACK_STAY_DAYS: u32 = 5;

/// Days assumed for a whole trip when the text carries no duration at all.
pub const DEFAULT_TRIP_DAYS: u32 = 7;

/// Days assigned to a weekend stay.
pub const WEEKEND_DAYS: u32 = 2;

static WEEK_COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+|a|one|two|three|four)\s*-?\s*weeks?\b")
        .expect("WEEK_COUNT_RE must compile")
});

static DAYS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+)\s*-?\s*days?\b").expect("DAYS_RE must compile"));

static NIGHTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+)\s*-?\s*nights?\b").expect("NIGHTS_RE must compile"));

/// Converts a duration phrase into a day count.
///
/// Rules, in priority order:
/// 1. Exact `"weekend"` / `"a weekend"` / `"the weekend"` -> 2
/// 2. Contains `"week"`: leading count token (digit or a/one/two/three/four)
///    multiplied by 7, defaulting to one week
/// 3. Digit + `"day(s)"`, optionally hyphenated ("10-day") -> that value
/// 4. Digit + `"night(s)"` -> that value (nights count as days here)
/// 5. Contains `"month"` -> 30
/// 6. Fallback [`FALLBACK_STAY_DAYS`], logged as a warning
///
/// The result is always at least 1.
pub fn normalize(text: &str) -> u32 {
    let lower = text.trim().to_lowercase();

    if matches!(lower.as_str(), "weekend" | "a weekend" | "the weekend") {
        return WEEKEND_DAYS;
    }

    if lower.contains("week") {
        if let Some(caps) = WEEK_COUNT_RE.captures(&lower) {
            if let Some(count) = caps.get(1).and_then(|m| parse_count(m.as_str())) {
                return (count.saturating_mul(7)).max(1);
            }
        }
        // "week" present but no countable token; assume one week
        return 7;
    }

    if let Some(days) = DAYS_RE
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    {
        return days.max(1);
    }

    if let Some(nights) = NIGHTS_RE
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    {
        return nights.max(1);
    }

    if lower.contains("month") {
        return 30;
    }

    tracing::warn!(
        phrase = %lower,
        fallback_days = FALLBACK_STAY_DAYS,
        "No duration rule matched, applying fallback"
    );
    FALLBACK_STAY_DAYS
}

fn parse_count(token: &str) -> Option<u32> {
    match token {
        "a" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        digits => digits.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod weekends {
        use super::*;

        #[test]
        fn weekend_variants_resolve_to_two_days() {
            assert_eq!(normalize("weekend"), 2);
            assert_eq!(normalize("a weekend"), 2);
            assert_eq!(normalize("the weekend"), 2);
            assert_eq!(normalize("  Weekend  "), 2);
        }
    }

    mod weeks {
        use super::*;

        #[test]
        fn article_and_word_counts_multiply_by_seven() {
            assert_eq!(normalize("a week"), 7);
            assert_eq!(normalize("one week"), 7);
            assert_eq!(normalize("two weeks"), 14);
            assert_eq!(normalize("three weeks"), 21);
            assert_eq!(normalize("four weeks"), 28);
        }

        #[test]
        fn digit_counts_multiply_by_seven() {
            assert_eq!(normalize("2 weeks"), 14);
            assert_eq!(normalize("3 weeks"), 21);
            assert_eq!(normalize("1-week"), 7);
        }

        #[test]
        fn bare_week_mention_defaults_to_one_week() {
            assert_eq!(normalize("next week sometime"), 7);
        }
    }

    mod days_and_nights {
        use super::*;

        #[test]
        fn digit_days_parse_directly() {
            assert_eq!(normalize("10 days"), 10);
            assert_eq!(normalize("1 day"), 1);
        }

        #[test]
        fn hyphenated_day_counts_parse() {
            assert_eq!(normalize("10-day"), 10);
        }

        #[test]
        fn nights_are_treated_as_days() {
            assert_eq!(normalize("5 nights"), 5);
            assert_eq!(normalize("1 night"), 1);
        }

        #[test]
        fn zero_days_clamps_to_one() {
            assert_eq!(normalize("0 days"), 1);
        }
    }

    mod months_and_fallback {
        use super::*;

        #[test]
        fn month_mentions_resolve_to_thirty() {
            assert_eq!(normalize("a month"), 30);
            assert_eq!(normalize("about a month or so"), 30);
        }

        #[test]
        fn unrecognized_phrases_fall_back() {
            assert_eq!(normalize("a while"), FALLBACK_STAY_DAYS);
            assert_eq!(normalize(""), FALLBACK_STAY_DAYS);
            assert_eq!(normalize("soonish"), FALLBACK_STAY_DAYS);
        }

        #[test]
        fn day_rule_outranks_month_rule() {
            // "3 days this month" carries both; the day count wins.
            assert_eq!(normalize("3 days this month"), 3);
        }
    }
}
