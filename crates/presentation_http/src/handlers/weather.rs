//! Weather lookup handler

use axum::{Json, extract::State};
use domain::{
    entities::DailyForecast,
    value_objects::{Coordinates, Language},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Longest accepted place name after trimming
const MAX_PLACE_CHARS: usize = 100;

/// Weather request body
#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    /// Free-text place name
    pub place: String,
    /// IANA timezone for the forecast, upstream-resolved when omitted
    #[serde(default)]
    pub timezone: Option<String>,
    /// Summary language code, lenient
    #[serde(default)]
    pub lang: Option<String>,
}

/// Weather response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    /// "name, admin1, country" label of the resolved place
    pub place_label: String,
    /// Resolved coordinates
    pub coords: Coordinates,
    /// Localized one-line summary of today
    pub summary: String,
    /// The daily forecast block as fetched
    pub raw: DailyForecast,
}

/// Handle a place-name weather lookup
#[instrument(skip(state, request), fields(place_len = request.place.len()))]
pub async fn lookup_weather(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let place = request.place.trim();
    if place.is_empty() {
        return Err(ApiError::BadRequest("Place is required".to_string()));
    }
    if place.chars().count() > MAX_PLACE_CHARS {
        return Err(ApiError::BadRequest("Place name too long".to_string()));
    }

    // Empty strings fall back the same as omitted fields
    let timezone = request
        .timezone
        .as_deref()
        .map(str::trim)
        .filter(|tz| !tz.is_empty())
        .unwrap_or("auto");
    let language = Language::from_code_lenient(request.lang.as_deref().unwrap_or("en"));

    let report = state
        .weather_service
        .lookup(place, timezone, language)
        .await?;

    Ok(Json(WeatherResponse {
        place_label: report.location.label(),
        coords: report.location.coordinates,
        summary: report.summary,
        raw: report.forecast,
    }))
}
