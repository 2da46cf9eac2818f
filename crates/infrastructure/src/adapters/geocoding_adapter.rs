//! Geocoding adapter - read-through cache over the Open-Meteo geocoding client

use std::{sync::Arc, time::Duration};

use application::{
    error::ApplicationError,
    ports::{CachePort, CachePortExt, GeocodingPort},
};
use async_trait::async_trait;
use domain::entities::ResolvedLocation;
use integration_weather::{
    GeocodingClient, GeocodingError, OpenMeteoGeocodingClient, WeatherConfig,
};
use tracing::{debug, error, instrument, warn};

use crate::cache::geocode_cache_key;

/// Caching decorator that exposes a geocoding client as [`GeocodingPort`]
///
/// Successful resolutions are cached under the lower-cased place name;
/// not-found and transport failures are never cached. Both failure shapes
/// collapse to `Ok(None)` so callers treat them as "location unknown",
/// with the distinction preserved in the logs.
pub struct CachedGeocodingAdapter<G: GeocodingClient, C: CachePort> {
    client: G,
    cache: Arc<C>,
    ttl: Duration,
    enabled: bool,
}

impl<G: GeocodingClient, C: CachePort> std::fmt::Debug for CachedGeocodingAdapter<G, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedGeocodingAdapter")
            .field("ttl", &self.ttl)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<G: GeocodingClient, C: CachePort> CachedGeocodingAdapter<G, C> {
    /// Wrap a geocoding client with the shared cache
    pub const fn new(client: G, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            client,
            cache,
            ttl,
            enabled: true,
        }
    }

    /// Disable caching; every resolve goes upstream
    #[must_use]
    pub const fn with_caching_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    async fn get_cached(&self, cache_key: &str) -> Option<ResolvedLocation> {
        if !self.enabled {
            return None;
        }

        match self.cache.get::<ResolvedLocation>(cache_key).await {
            Ok(Some(location)) => {
                debug!(key = %cache_key, "Returning cached location");
                Some(location)
            },
            Ok(None) => None,
            Err(e) => {
                // Cache errors never fail a lookup
                warn!(error = %e, key = %cache_key, "Cache read error");
                None
            },
        }
    }

    async fn store(&self, cache_key: &str, location: &ResolvedLocation) {
        if !self.enabled {
            return;
        }

        if let Err(e) = self.cache.set(cache_key, location, self.ttl).await {
            warn!(error = %e, key = %cache_key, "Cache write error");
        }
    }
}

impl<C: CachePort> CachedGeocodingAdapter<OpenMeteoGeocodingClient, C> {
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
        let client = OpenMeteoGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client, cache, ttl))
    }
}

#[async_trait]
impl<G: GeocodingClient, C: CachePort> GeocodingPort for CachedGeocodingAdapter<G, C> {
    #[instrument(skip(self), fields(cached = tracing::field::Empty))]
    async fn resolve(&self, place: &str) -> Result<Option<ResolvedLocation>, ApplicationError> {
        let cache_key = geocode_cache_key(place);

        if let Some(cached) = self.get_cached(&cache_key).await {
            tracing::Span::current().record("cached", true);
            return Ok(Some(cached));
        }
        tracing::Span::current().record("cached", false);

        match self.client.search(place).await {
            Ok(location) => {
                debug!(label = %location.label(), "Resolved place");
                self.store(&cache_key, &location).await;
                Ok(Some(location))
            },
            Err(GeocodingError::PlaceNotFound(reason)) => {
                debug!(reason = %reason, "Place not found");
                Ok(None)
            },
            Err(e) => {
                error!(error = %e, "Geocoding lookup failed");
                Ok(None)
            },
        }
    }
}
