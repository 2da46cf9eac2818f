//! Suggestion generation handler

use application::SuggestionRequest;
use axum::{Json, extract::State, http::HeaderMap};
use domain::value_objects::{Language, Persona};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, handlers::common::resolve_current_user, state::AppState};

/// Longest accepted query after trimming
const MAX_QUERY_CHARS: usize = 500;

/// Suggestion request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// Free-text question to answer with suggestions
    pub query: String,
    /// Place the query refers to
    #[serde(default)]
    pub place: Option<String>,
    /// Weather context to ground the suggestions in
    #[serde(default)]
    pub weather_summary: Option<String>,
    /// Persona key, strict
    #[serde(default)]
    pub persona: Option<String>,
    /// Output language code, strict
    #[serde(default)]
    pub output_lang: Option<String>,
    /// Provider name, case-insensitive
    #[serde(default)]
    pub provider: Option<String>,
}

/// Suggestion response body
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    /// Generated suggestion text
    pub text: String,
}

/// Handle a suggestion generation request
///
/// All validation happens before the provider backend is invoked; an
/// invalid persona or language never costs an upstream call.
#[instrument(skip(state, headers, request), fields(query_len = request.query.len()))]
pub async fn generate_suggestions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query is required".to_string()));
    }
    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(ApiError::BadRequest("Query too long".to_string()));
    }

    let persona = match request.persona.as_deref() {
        Some(value) => value
            .parse::<Persona>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => Persona::default(),
    };
    let language = match request.output_lang.as_deref() {
        Some(value) => value
            .parse::<Language>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => Language::default(),
    };
    let provider = request.provider.map_or_else(
        || state.config.suggestions.default_provider.clone(),
        |name| name.to_lowercase(),
    );

    let user = resolve_current_user(&state, &headers).await?;

    let text = state
        .suggestion_service
        .suggest(
            SuggestionRequest {
                query: query.to_string(),
                place: request.place.unwrap_or_default(),
                weather_summary: request.weather_summary.unwrap_or_default(),
                persona,
                language,
                provider,
            },
            user.as_ref(),
        )
        .await?;

    Ok(Json(SuggestResponse { text }))
}
