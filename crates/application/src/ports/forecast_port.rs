//! Forecast port
//!
//! Defines the interface for fetching the daily forecast bundle for a
//! resolved pair of coordinates.

use async_trait::async_trait;
use domain::{entities::DailyForecast, value_objects::Coordinates};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the daily forecast for the given coordinates
    ///
    /// `timezone` is passed through to the upstream ("auto" lets it pick
    /// the local zone). Returns `Ok(None)` when the upstream call fails;
    /// callers map absence to a service-unavailable response.
    async fn fetch(
        &self,
        coordinates: Coordinates,
        timezone: &str,
    ) -> Result<Option<DailyForecast>, ApplicationError>;
}
