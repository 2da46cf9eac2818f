//! Application services - Use case implementations

mod suggestion_service;
mod summary;
mod weather_service;

pub use suggestion_service::{SuggestionRequest, SuggestionService};
pub use summary::format_summary;
pub use weather_service::{WeatherReport, WeatherService};
