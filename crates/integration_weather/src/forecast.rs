//! Open-Meteo daily forecast client
//!
//! Fetches daily forecast bundles from the
//! [Open-Meteo Forecast API](https://open-meteo.com/en/docs). The response's
//! `daily` block is column-oriented and maps directly onto
//! [`domain::DailyForecast`].

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinates, DailyForecast};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;

/// Daily metrics requested from the forecast API
const DAILY_METRICS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,uv_index_max,sunrise,sunset";

/// Errors that can occur while fetching a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Connection to the forecast service failed
    #[error("Forecast connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Forecast request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the forecast response
    #[error("Forecast parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Forecast service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timeout
    #[error("Forecast request timed out")]
    Timeout,
}

/// Trait for forecast clients
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the daily forecast bundle for a location
    ///
    /// `timezone` is passed through to the API verbatim; `"auto"` lets the
    /// API pick the location's own timezone.
    async fn daily_forecast(
        &self,
        coordinates: Coordinates,
        timezone: &str,
    ) -> Result<DailyForecast, ForecastError>;
}

/// Open-Meteo HTTP forecast client
#[derive(Debug)]
pub struct OpenMeteoForecastClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoForecastClient {
    /// Create a new forecast client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Extract the daily block from a raw API response
    fn daily_from(response: ForecastResponse) -> Result<DailyForecast, ForecastError> {
        response
            .daily
            .ok_or_else(|| ForecastError::ParseError("No daily block in response".to_string()))
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoForecastClient {
    #[instrument(skip(self), fields(lat = coordinates.latitude(), lon = coordinates.longitude()))]
    async fn daily_forecast(
        &self,
        coordinates: Coordinates,
        timezone: &str,
    ) -> Result<DailyForecast, ForecastError> {
        let url = format!("{}/forecast", self.config.forecast_base_url);
        let days = self.config.forecast_days.clamp(1, 16);
        let params = [
            ("latitude", coordinates.latitude().to_string()),
            ("longitude", coordinates.longitude().to_string()),
            ("timezone", timezone.to_string()),
            ("daily", DAILY_METRICS.to_string()),
            ("forecast_days", days.to_string()),
        ];

        debug!(days, "Fetching daily forecast");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ForecastError::Timeout
                } else {
                    ForecastError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ForecastError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ForecastError::RequestFailed(format!("HTTP {status}")));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::ParseError(e.to_string()))?;

        let forecast = Self::daily_from(body)?;
        debug!(days = forecast.days(), "Fetched daily forecast");
        Ok(forecast)
    }
}

/// Raw forecast API response
///
/// Only the `daily` block is consumed; the surrounding metadata
/// (timezone echo, elevation, units) is ignored.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    daily: Option<DailyForecast>,
}
