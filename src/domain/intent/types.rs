//! Trip-intent value types.
//!
//! [`TripIntent`] is the extraction result handed to downstream consumers
//! (prompt builders, dialog layers). It is created fresh for every inbound
//! message and never mutated after assembly; JSON field names are part of
//! that downstream contract and use camelCase.

use serde::{Deserialize, Serialize};

/// Sentinel recorded in `duration_text` when no duration phrase was found
/// and a default day count was applied.
pub const UNSPECIFIED_DURATION: &str = "unspecified";

/// One stop on the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Free-text city or region name, trimmed, no trailing punctuation.
    pub name: String,
    /// Resolved length of stay, always at least 1.
    pub duration_days: u32,
    /// The phrase that produced `duration_days`, or [`UNSPECIFIED_DURATION`]
    /// when a default was applied.
    pub duration_text: String,
    /// 1-based position in the itinerary sequence.
    pub order: u32,
}

impl Destination {
    /// Creates a destination, clamping the stay length to at least one day.
    pub fn new(
        name: impl Into<String>,
        duration_days: u32,
        duration_text: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            name: name.into(),
            duration_days: duration_days.max(1),
            duration_text: duration_text.into(),
            order,
        }
    }

    /// Creates a destination whose stay length was defaulted rather than
    /// parsed from the text.
    pub fn with_default_duration(
        name: impl Into<String>,
        duration_days: u32,
        order: u32,
    ) -> Self {
        Self::new(name, duration_days, UNSPECIFIED_DURATION, order)
    }
}

/// The fully assembled extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripIntent {
    /// Departure city. Empty string means "unknown, must ask user".
    pub origin: String,
    /// Ordered stops. May be empty if extraction found nothing usable.
    pub destinations: Vec<Destination>,
    /// Explicit return city, falling back to `origin`.
    pub return_to: String,
    /// Sum of all destination stay lengths, defaulted to 7 when no
    /// destinations were found.
    pub total_duration_days: u32,
}

impl TripIntent {
    /// True when the caller should ask a clarifying question instead of
    /// planning: no origin or no destinations were recognized.
    pub fn is_low_confidence(&self) -> bool {
        self.origin.is_empty() || self.destinations.is_empty()
    }

    /// Destination names in itinerary order.
    pub fn destination_names(&self) -> Vec<&str> {
        self.destinations.iter().map(|d| d.name.as_str()).collect()
    }
}
