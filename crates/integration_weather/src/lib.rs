//! Open-Meteo weather integration
//!
//! Clients for the Open-Meteo APIs (<https://open-meteo.com>): place-name
//! geocoding and daily forecasts. Both APIs are keyless; results map onto
//! domain types directly.

pub mod config;
pub mod forecast;
pub mod geocoding;

pub use config::WeatherConfig;
pub use forecast::{ForecastClient, ForecastError, OpenMeteoForecastClient};
pub use geocoding::{GeocodingClient, GeocodingError, OpenMeteoGeocodingClient};
