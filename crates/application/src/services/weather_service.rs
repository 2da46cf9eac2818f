//! Weather lookup service

use std::{fmt, sync::Arc};

use domain::{
    entities::{DailyForecast, ResolvedLocation},
    value_objects::Language,
};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{ForecastPort, GeocodingPort},
    services::summary::format_summary,
};

/// Result of a weather lookup: resolved place, localized summary, raw daily block
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// Where the place name resolved to
    pub location: ResolvedLocation,
    /// One-line human summary of today's forecast
    pub summary: String,
    /// The full daily bundle as fetched
    pub forecast: DailyForecast,
}

/// Service answering place-name weather lookups
///
/// Resolves the place, fetches the forecast for the resolved coordinates,
/// and formats the localized summary. Input validation (trimming, length
/// limits) happens at the HTTP boundary before this service is called.
pub struct WeatherService {
    geocoding: Arc<dyn GeocodingPort>,
    forecast: Arc<dyn ForecastPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(geocoding: Arc<dyn GeocodingPort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self {
            geocoding,
            forecast,
        }
    }

    /// Resolve a place and fetch its daily forecast with a localized summary
    ///
    /// An unresolvable place maps to `NotFound`; a failed forecast fetch
    /// maps to `UpstreamUnavailable`. The forecast fetcher is never called
    /// when resolution comes back empty.
    #[instrument(skip(self, language), fields(lang = %language))]
    pub async fn lookup(
        &self,
        place: &str,
        timezone: &str,
        language: Language,
    ) -> Result<WeatherReport, ApplicationError> {
        let location = self.geocoding.resolve(place).await?.ok_or_else(|| {
            ApplicationError::NotFound(format!("Could not find location: {place}"))
        })?;

        let forecast = self
            .forecast
            .fetch(location.coordinates, timezone)
            .await?
            .ok_or_else(|| {
                ApplicationError::UpstreamUnavailable("Could not fetch weather data".to_string())
            })?;

        let summary = format_summary(&forecast, language);

        debug!(
            label = %location.label(),
            days = forecast.days(),
            "Weather lookup completed"
        );

        Ok(WeatherReport {
            location,
            summary,
            forecast,
        })
    }
}
