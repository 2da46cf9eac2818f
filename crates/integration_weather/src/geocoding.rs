//! Open-Meteo geocoding client
//!
//! Resolves free-form place names to coordinates using the
//! [Open-Meteo Geocoding API](https://open-meteo.com/en/docs/geocoding-api).
//! Requests a single best match per lookup; no API key required.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinates, ResolvedLocation};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;

/// Errors that can occur while resolving a place name
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// No result matched the place name
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Service is temporarily unavailable
    #[error("Geocoding service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form place name to its best match
    async fn search(&self, place: &str) -> Result<ResolvedLocation, GeocodingError>;
}

/// Open-Meteo HTTP geocoding client
#[derive(Debug)]
pub struct OpenMeteoGeocodingClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoGeocodingClient {
    /// Create a new geocoding client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Map the best API match to a resolved location
    fn location_from(result: GeocodingMatch) -> Result<ResolvedLocation, GeocodingError> {
        let coordinates = Coordinates::new(result.latitude, result.longitude)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(ResolvedLocation {
            coordinates,
            name: result.name,
            admin1: result.admin1.unwrap_or_default(),
            country: result.country.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, place: &str) -> Result<ResolvedLocation, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::PlaceNotFound(
                "Place must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.geocoding_base_url);
        let params = [
            ("name", place),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
        ];

        debug!(%place, "Resolving place name");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let best = body
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::PlaceNotFound(place.to_string()))?;

        let location = Self::location_from(best)?;
        debug!(label = %location.label(), "Resolved place name");
        Ok(location)
    }
}

/// Raw geocoding API response
///
/// Open-Meteo omits the `results` key entirely when nothing matches.
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingMatch>>,
}

/// Raw single match from the geocoding API
#[derive(Debug, Deserialize)]
struct GeocodingMatch {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    admin1: Option<String>,
    #[serde(default)]
    country: Option<String>,
}
