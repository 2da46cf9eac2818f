//! Forecast adapter - read-through cache over the Open-Meteo forecast client

use std::{sync::Arc, time::Duration};

use application::{
    error::ApplicationError,
    ports::{CachePort, CachePortExt, ForecastPort},
};
use async_trait::async_trait;
use domain::{entities::DailyForecast, value_objects::Coordinates};
use integration_weather::{ForecastClient, OpenMeteoForecastClient, WeatherConfig};
use tracing::{debug, error, instrument, warn};

use crate::cache::forecast_cache_key;

/// Caching decorator that exposes a forecast client as [`ForecastPort`]
///
/// Successful bundles are cached under the literal coordinate pair. Any
/// upstream failure collapses to `Ok(None)`; callers map absence to a
/// service-unavailable response.
pub struct CachedForecastAdapter<F: ForecastClient, C: CachePort> {
    client: F,
    cache: Arc<C>,
    ttl: Duration,
    enabled: bool,
}

impl<F: ForecastClient, C: CachePort> std::fmt::Debug for CachedForecastAdapter<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedForecastAdapter")
            .field("ttl", &self.ttl)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<F: ForecastClient, C: CachePort> CachedForecastAdapter<F, C> {
    /// Wrap a forecast client with the shared cache
    pub const fn new(client: F, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            client,
            cache,
            ttl,
            enabled: true,
        }
    }

    /// Disable caching; every fetch goes upstream
    #[must_use]
    pub const fn with_caching_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    async fn get_cached(&self, cache_key: &str) -> Option<DailyForecast> {
        if !self.enabled {
            return None;
        }

        match self.cache.get::<DailyForecast>(cache_key).await {
            Ok(Some(forecast)) => {
                debug!(key = %cache_key, "Returning cached forecast");
                Some(forecast)
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, key = %cache_key, "Cache read error");
                None
            },
        }
    }

    async fn store(&self, cache_key: &str, forecast: &DailyForecast) {
        if !self.enabled {
            return;
        }

        if let Err(e) = self.cache.set(cache_key, forecast, self.ttl).await {
            warn!(error = %e, key = %cache_key, "Cache write error");
        }
    }
}

impl<C: CachePort> CachedForecastAdapter<OpenMeteoForecastClient, C> {
    /// Build the Open-Meteo backed adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(
        config: WeatherConfig,
        cache: Arc<C>,
        ttl: Duration,
    ) -> Result<Self, ApplicationError> {
        let client = OpenMeteoForecastClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client, cache, ttl))
    }
}

#[async_trait]
impl<F: ForecastClient, C: CachePort> ForecastPort for CachedForecastAdapter<F, C> {
    #[instrument(
        skip(self),
        fields(
            lat = coordinates.latitude(),
            lon = coordinates.longitude(),
            cached = tracing::field::Empty
        )
    )]
    async fn fetch(
        &self,
        coordinates: Coordinates,
        timezone: &str,
    ) -> Result<Option<DailyForecast>, ApplicationError> {
        let cache_key = forecast_cache_key(coordinates);

        if let Some(cached) = self.get_cached(&cache_key).await {
            tracing::Span::current().record("cached", true);
            return Ok(Some(cached));
        }
        tracing::Span::current().record("cached", false);

        match self.client.daily_forecast(coordinates, timezone).await {
            Ok(forecast) => {
                debug!(days = forecast.days(), "Retrieved daily forecast");
                self.store(&cache_key, &forecast).await;
                Ok(Some(forecast))
            },
            Err(e) => {
                error!(error = %e, "Forecast fetch failed");
                Ok(None)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use integration_weather::ForecastError;

    use super::*;
    use crate::cache::MokaCache;

    struct ScriptedForecaster {
        calls: AtomicU32,
        fail: bool,
    }

    impl ScriptedForecaster {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail,
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn sample_forecast() -> DailyForecast {
        serde_json::from_value(serde_json::json!({
            "time": ["2026-08-23", "2026-08-24", "2026-08-25"],
            "temperature_2m_max": [31.2, 29.8, 30.4],
            "temperature_2m_min": [24.1, 23.5, 24.0],
            "precipitation_sum": [0.0, 4.2, 1.1],
            "uv_index_max": [7.5, 5.0, 6.2],
            "sunrise": ["2026-08-23T05:05", "2026-08-24T05:06", "2026-08-25T05:07"],
            "sunset": ["2026-08-23T18:22", "2026-08-24T18:21", "2026-08-25T18:19"]
        }))
        .unwrap()
    }

    #[async_trait]
    impl ForecastClient for ScriptedForecaster {
        async fn daily_forecast(
            &self,
            _coordinates: Coordinates,
            _timezone: &str,
        ) -> Result<DailyForecast, ForecastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ForecastError::ServiceUnavailable("HTTP 502".to_string()))
            } else {
                Ok(sample_forecast())
            }
        }
    }

    fn adapter(fail: bool) -> CachedForecastAdapter<ScriptedForecaster, MokaCache> {
        CachedForecastAdapter::new(
            ScriptedForecaster::new(fail),
            Arc::new(MokaCache::new()),
            Duration::from_secs(600),
        )
    }

    const TOKYO: Coordinates = Coordinates::new_unchecked(35.6895, 139.6917);

    #[tokio::test]
    async fn caches_forecast_bundles() {
        let adapter = adapter(false);

        let first = adapter.fetch(TOKYO, "auto").await.unwrap();
        let second = adapter.fetch(TOKYO, "auto").await.unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(adapter.client.call_count(), 1);
    }

    #[tokio::test]
    async fn nearby_coordinates_are_distinct_entries() {
        let adapter = adapter(false);

        adapter.fetch(TOKYO, "auto").await.unwrap();
        adapter
            .fetch(Coordinates::new_unchecked(35.6896, 139.6917), "auto")
            .await
            .unwrap();

        assert_eq!(adapter.client.call_count(), 2);
    }

    #[tokio::test]
    async fn failure_is_absent_and_not_cached() {
        let adapter = adapter(true);

        assert!(adapter.fetch(TOKYO, "auto").await.unwrap().is_none());
        assert!(adapter.fetch(TOKYO, "auto").await.unwrap().is_none());

        assert_eq!(adapter.client.call_count(), 2);
    }

    #[tokio::test]
    async fn short_ttl_expires_entries() {
        let adapter = CachedForecastAdapter::new(
            ScriptedForecaster::new(false),
            Arc::new(MokaCache::new()),
            Duration::from_millis(50),
        );

        adapter.fetch(TOKYO, "auto").await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;
        adapter.fetch(TOKYO, "auto").await.unwrap();

        // Expired entry forces a fresh upstream call
        assert_eq!(adapter.client.call_count(), 2);
    }

    #[tokio::test]
    async fn caching_can_be_disabled() {
        let adapter = adapter(false).with_caching_disabled();

        adapter.fetch(TOKYO, "auto").await.unwrap();
        adapter.fetch(TOKYO, "auto").await.unwrap();

        assert_eq!(adapter.client.call_count(), 2);
    }

    #[tokio::test]
    async fn from_config_builds_adapter() {
        let adapter = CachedForecastAdapter::from_config(
            WeatherConfig::for_testing("http://localhost:1"),
            Arc::new(MokaCache::new()),
            Duration::from_secs(600),
        );
        assert!(adapter.is_ok());
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CachedForecastAdapter<ScriptedForecaster, MokaCache>>();
    }
}
