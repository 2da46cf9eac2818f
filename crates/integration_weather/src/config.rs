//! Weather integration configuration

use serde::{Deserialize, Serialize};

/// Configuration shared by the Open-Meteo geocoding and forecast clients
///
/// Both APIs are keyless; only the base URLs, the request timeout, and the
/// forecast window are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the geocoding API (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Base URL for the forecast API (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of forecast days to request (1-16, default: 3)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    3
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout_secs(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherConfig {
    /// Create a configuration pointed at a single test server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            geocoding_base_url: base_url.to_string(),
            forecast_base_url: base_url.to_string(),
            timeout_secs: 5,
            forecast_days: 3,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.geocoding_base_url.is_empty() {
            return Err("geocoding_base_url must not be empty".to_string());
        }
        if self.forecast_base_url.is_empty() {
            return Err("forecast_base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        if !(1..=16).contains(&self.forecast_days) {
            return Err("forecast_days must be between 1 and 16".to_string());
        }
        Ok(())
    }
}
