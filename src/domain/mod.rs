//! Domain layer containing the trip-intent extraction logic.
//!
//! # Module Organization
//!
//! - `intent` - Trip-intent types and the extraction cascade

pub mod intent;
