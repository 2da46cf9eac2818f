//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `cache`: Cache TTL configuration
//! - `auth`: Static bearer token table
//! - `suggestions`: LLM suggestion providers

mod auth;
mod cache;
mod server;
mod suggestions;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use server::ServerConfig;
pub use suggestions::SuggestionsConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Open-Meteo endpoints and timeouts
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Suggestion provider configuration
    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    /// Bearer token authentication
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error when a source cannot be read or a value fails to
    /// deserialize into the typed config.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("suggestions.default_provider", "openai")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SORACAST_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("SORACAST")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate cross-field constraints before serving
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        self.weather
            .validate()
            .map_err(|e| format!("weather: {e}"))?;
        self.suggestions.validate()?;
        Ok(())
    }
}
