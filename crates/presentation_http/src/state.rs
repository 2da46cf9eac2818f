//! Application state shared across handlers

use std::sync::Arc;

use application::{
    SuggestionService, WeatherService,
    ports::{IdentityPort, SearchHistoryPort},
};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather lookup service
    pub weather_service: Arc<WeatherService>,
    /// Suggestion generation service
    pub suggestion_service: Arc<SuggestionService>,
    /// Resolves bearer credentials to users
    pub identity: Arc<dyn IdentityPort>,
    /// Per-user search history store
    pub history: Arc<dyn SearchHistoryPort>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
