//! Cache implementations
//!
//! Provides the caching adapter for the application layer plus the key
//! builders shared by the read-through adapters:
//! - `MokaCache`: in-memory cache with per-entry TTL support

mod moka_cache;

use domain::value_objects::Coordinates;
pub use moka_cache::MokaCache;

/// Cache key for a geocoding lookup
///
/// Keyed by the lower-cased place name so "Tokyo" and "tokyo" share an
/// entry.
#[must_use]
pub fn geocode_cache_key(place: &str) -> String {
    format!("geocode:{}", place.to_lowercase())
}

/// Cache key for a forecast lookup
///
/// Uses the literal float values; float-identical coordinates share an
/// entry, nearby floats are distinct.
#[must_use]
pub fn forecast_cache_key(coordinates: Coordinates) -> String {
    format!("forecast:{}", coordinates.cache_key_fragment())
}
