//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Read-through geocoding adapter with wiremock
//! - Read-through forecast adapter with wiremock
//! - One shared cache serving both lookup types

use std::{sync::Arc, time::Duration};

use application::ports::{CachePort, ForecastPort, GeocodingPort};
use domain::value_objects::Coordinates;
use infrastructure::{CachedForecastAdapter, CachedGeocodingAdapter, MokaCache};
use integration_weather::{OpenMeteoForecastClient, OpenMeteoGeocodingClient, WeatherConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoding_response() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "latitude": 35.6895,
            "longitude": 139.6917,
            "name": "Tokyo",
            "admin1": "Tokyo",
            "country": "Japan"
        }]
    })
}

fn forecast_response() -> serde_json::Value {
    serde_json::json!({
        "daily": {
            "time": ["2026-08-23", "2026-08-24", "2026-08-25"],
            "temperature_2m_max": [31.2, 29.8, 30.4],
            "temperature_2m_min": [24.1, 23.5, 24.0],
            "precipitation_sum": [0.0, 4.2, 1.1],
            "uv_index_max": [7.5, 5.0, 6.2],
            "sunrise": ["2026-08-23T05:05", "2026-08-24T05:06", "2026-08-25T05:07"],
            "sunset": ["2026-08-23T18:22", "2026-08-24T18:21", "2026-08-25T18:19"]
        }
    })
}

fn geocoding_adapter(
    server: &MockServer,
    cache: Arc<MokaCache>,
    ttl: Duration,
) -> CachedGeocodingAdapter<OpenMeteoGeocodingClient, MokaCache> {
    CachedGeocodingAdapter::from_config(WeatherConfig::for_testing(&server.uri()), cache, ttl)
        .expect("Failed to create geocoding adapter")
}

fn forecast_adapter(
    server: &MockServer,
    cache: Arc<MokaCache>,
    ttl: Duration,
) -> CachedForecastAdapter<OpenMeteoForecastClient, MokaCache> {
    CachedForecastAdapter::from_config(WeatherConfig::for_testing(&server.uri()), cache, ttl)
        .expect("Failed to create forecast adapter")
}

const TOKYO: Coordinates = Coordinates::new_unchecked(35.6895, 139.6917);

// ============================================================================
// Geocoding Read-Through Tests
// ============================================================================

mod geocoding_tests {
    use super::*;

    #[tokio::test]
    async fn resolves_and_caches_place_lookups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("name", "Tokyo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = geocoding_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(3600),
        );

        let first = adapter.resolve("Tokyo").await.unwrap().unwrap();
        let second = adapter.resolve("Tokyo").await.unwrap().unwrap();

        assert_eq!(first.label(), "Tokyo, Tokyo, Japan");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn cache_key_ignores_place_casing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = geocoding_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(3600),
        );

        adapter.resolve("Tokyo").await.unwrap();
        let cached = adapter.resolve("TOKYO").await.unwrap();

        assert!(cached.is_some());
    }

    #[tokio::test]
    async fn distinct_places_hit_upstream_separately() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_response()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let adapter = geocoding_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(3600),
        );

        adapter.resolve("Tokyo").await.unwrap();
        adapter.resolve("Osaka").await.unwrap();
    }

    #[tokio::test]
    async fn unknown_place_is_absent_and_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
            )
            .expect(2)
            .mount(&mock_server)
            .await;

        let adapter = geocoding_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(3600),
        );

        assert!(adapter.resolve("Atlantis").await.unwrap().is_none());
        // Absence is never cached; the second lookup goes upstream again
        assert!(adapter.resolve("Atlantis").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn server_error_resolves_to_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let adapter = geocoding_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(3600),
        );

        assert!(adapter.resolve("Tokyo").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn disabled_cache_always_goes_upstream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_response()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let adapter = geocoding_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(3600),
        )
        .with_caching_disabled();

        adapter.resolve("Tokyo").await.unwrap();
        adapter.resolve("Tokyo").await.unwrap();
    }
}

// ============================================================================
// Forecast Read-Through Tests
// ============================================================================

mod forecast_tests {
    use super::*;

    #[tokio::test]
    async fn fetches_and_caches_daily_forecasts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("forecast_days", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = forecast_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(600),
        );

        let first = adapter.fetch(TOKYO, "auto").await.unwrap().unwrap();
        let second = adapter.fetch(TOKYO, "auto").await.unwrap().unwrap();

        assert_eq!(first.days(), 3);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn expired_entry_refreshes_from_upstream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
            .expect(2)
            .mount(&mock_server)
            .await;

        let adapter = forecast_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_millis(50),
        );

        adapter.fetch(TOKYO, "auto").await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;
        adapter.fetch(TOKYO, "auto").await.unwrap();
    }

    #[tokio::test]
    async fn upstream_error_is_absent_and_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&mock_server)
            .await;

        let adapter = forecast_adapter(
            &mock_server,
            Arc::new(MokaCache::new()),
            Duration::from_secs(600),
        );

        assert!(adapter.fetch(TOKYO, "auto").await.unwrap().is_none());
        assert!(adapter.fetch(TOKYO, "auto").await.unwrap().is_none());
    }
}

// ============================================================================
// Shared Cache Tests
// ============================================================================

mod shared_cache_tests {
    use super::*;

    #[tokio::test]
    async fn one_cache_serves_both_lookup_types() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(geocoding_response()))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = Arc::new(MokaCache::new());
        let geocoding = geocoding_adapter(&mock_server, Arc::clone(&cache), Duration::from_secs(3600));
        let forecast = forecast_adapter(&mock_server, Arc::clone(&cache), Duration::from_secs(600));

        geocoding.resolve("Tokyo").await.unwrap();
        geocoding.resolve("Tokyo").await.unwrap();
        forecast.fetch(TOKYO, "auto").await.unwrap();
        forecast.fetch(TOKYO, "auto").await.unwrap();

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 2);
    }
}
