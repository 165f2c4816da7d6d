//! Trip-intent extraction.
//!
//! # Module Organization
//!
//! - `types` - `TripIntent` and `Destination` value types
//! - `duration` - duration phrase normalization
//! - `origin` / `return_city` - departure and return city extraction
//! - `destinations` - the first-match-wins destination cascade
//! - `extractor` - assembly of the pieces into one `TripIntent`

pub mod destinations;
pub mod duration;
pub mod extractor;
pub mod origin;
mod patterns;
pub mod return_city;
pub mod types;

pub use duration::{DEFAULT_TRIP_DAYS, FALLBACK_STAY_DAYS, WEEKEND_DAYS};
pub use extractor::TripIntentExtractor;
pub use types::{Destination, TripIntent, UNSPECIFIED_DURATION};
