//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod forecast_adapter;
mod geocoding_adapter;
mod memory_search_history;
mod static_identity;
mod suggestion_adapter;

pub use forecast_adapter::CachedForecastAdapter;
pub use geocoding_adapter::CachedGeocodingAdapter;
pub use memory_search_history::InMemorySearchHistory;
pub use static_identity::StaticIdentityAdapter;
pub use suggestion_adapter::SuggestionAdapter;
