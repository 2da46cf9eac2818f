//! Cache configuration with TTL settings.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Cache configuration with TTL settings per lookup type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// TTL for geocoding results in seconds (default: 1 hour)
    #[serde(default = "default_geocode_ttl")]
    pub geocode_ttl_secs: u64,

    /// TTL for forecast bundles in seconds (default: 10 minutes)
    #[serde(default = "default_forecast_ttl")]
    pub forecast_ttl_secs: u64,

    /// Maximum number of entries in the shared in-memory cache
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_geocode_ttl() -> u64 {
    60 * 60 // 1 hour
}

const fn default_forecast_ttl() -> u64 {
    10 * 60 // 10 minutes
}

const fn default_max_entries() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            geocode_ttl_secs: default_geocode_ttl(),
            forecast_ttl_secs: default_forecast_ttl(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Get the geocoding TTL as a Duration
    #[must_use]
    pub const fn geocode_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.geocode_ttl_secs)
    }

    /// Get the forecast TTL as a Duration
    #[must_use]
    pub const fn forecast_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.forecast_ttl_secs)
    }
}
