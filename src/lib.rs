//! Wayfarer - Trip Intent Extraction
//!
//! This crate turns a free-text travel request ("Plan 3 weeks in Japan from
//! Los Angeles. Visit Tokyo, Kyoto, and Osaka.") into a structured
//! [`TripIntent`]: origin, an ordered list of destinations with resolved
//! stay lengths, a return city, and a total duration.
//!
//! Extraction is a pure, synchronous, in-memory transform. It never fails:
//! unrecognizable input yields an empty destination list and defaulted
//! durations, and callers decide whether to ask the user for clarification.

pub mod config;
pub mod domain;

pub use config::AppConfig;
pub use domain::intent::{Destination, TripIntent, TripIntentExtractor};
