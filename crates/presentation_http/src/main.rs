//! Soracast HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    SuggestionService, WeatherService,
    ports::{IdentityPort, SearchHistoryPort},
};
use infrastructure::{
    AppConfig, CachedForecastAdapter, CachedGeocodingAdapter, InMemorySearchHistory, MokaCache,
    StaticIdentityAdapter, SuggestionAdapter,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can come from it
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server.log_format);

    info!("🌦️ Soracast v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        provider = %config.suggestions.default_provider,
        "Configuration loaded"
    );

    // One cache shared by the geocoding and forecast adapters
    let cache = Arc::new(MokaCache::with_max_entries(config.cache.max_entries));

    let geocoding = CachedGeocodingAdapter::from_config(
        config.weather.clone(),
        Arc::clone(&cache),
        config.cache.geocode_ttl(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize geocoding client: {e}"))?;
    let forecast = CachedForecastAdapter::from_config(
        config.weather.clone(),
        Arc::clone(&cache),
        config.cache.forecast_ttl(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize forecast client: {e}"))?;

    let (geocoding, forecast) = if config.cache.enabled {
        (geocoding, forecast)
    } else {
        (
            geocoding.with_caching_disabled(),
            forecast.with_caching_disabled(),
        )
    };

    info!(
        enabled = config.cache.enabled,
        geocode_ttl_secs = config.cache.geocode_ttl_secs,
        forecast_ttl_secs = config.cache.forecast_ttl_secs,
        max_entries = config.cache.max_entries,
        "Cache policy"
    );

    let suggestion_backend = SuggestionAdapter::from_config(&config.suggestions)
        .map_err(|e| anyhow::anyhow!("Failed to initialize suggestion backends: {e}"))?;

    // Initialize services
    let identity: Arc<dyn IdentityPort> = Arc::new(StaticIdentityAdapter::new(config.auth.clone()));
    let history: Arc<dyn SearchHistoryPort> = Arc::new(InMemorySearchHistory::new());

    let weather_service = WeatherService::new(Arc::new(geocoding), Arc::new(forecast));
    let suggestion_service =
        SuggestionService::new(Arc::new(suggestion_backend), Arc::clone(&history));

    let shutdown_timeout = config.server.shutdown_timeout();
    let addr = config.server.bind_address();

    let state = AppState {
        weather_service: Arc::new(weather_service),
        suggestion_service: Arc::new(suggestion_service),
        identity,
        history,
        config: Arc::new(config),
    };

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Initialize the tracing subscriber with text or JSON output
fn init_tracing(log_format: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "soracast_server=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    // Connection draining is handled by axum's graceful_shutdown
}
