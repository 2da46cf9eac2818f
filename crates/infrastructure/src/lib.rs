//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the shared cache, weather and suggestion adapters, and the
//! typed application configuration.

pub mod adapters;
pub mod cache;
pub mod config;

pub use adapters::*;
pub use cache::{MokaCache, forecast_cache_key, geocode_cache_key};
pub use config::{AppConfig, AuthConfig, CacheConfig, ServerConfig, SuggestionsConfig};
