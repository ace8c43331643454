//! Zip Locator - nearest-location lookup for postal codes
//!
//! This library resolves a zip code to coordinates from a bundled reference
//! table and ranks a fixed list of target locations by great-circle distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{lookup, Locator, LookupError, ReferenceStore, HistoryLog, distance::{haversine_km, haversine_miles}};
pub use models::{Coordinate, Target, RankedMatch, LookupResult, default_targets};
