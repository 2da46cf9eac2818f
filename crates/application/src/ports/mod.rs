//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod forecast_port;
mod geocoding_port;
mod identity_port;
mod search_history_port;
mod suggestion_port;

pub use cache_port::{CachePort, CachePortExt, CacheStats};
pub use forecast_port::ForecastPort;
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use identity_port::{CurrentUser, IdentityPort};
#[cfg(test)]
pub use identity_port::MockIdentityPort;
pub use search_history_port::SearchHistoryPort;
#[cfg(test)]
pub use search_history_port::MockSearchHistoryPort;
pub use suggestion_port::{CompletionPrompt, SuggestionPort};
#[cfg(test)]
pub use suggestion_port::MockSuggestionPort;
