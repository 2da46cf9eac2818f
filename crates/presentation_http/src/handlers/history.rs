//! Search history handler

use axum::{Json, extract::State, http::HeaderMap};
use chrono::{DateTime, Utc};
use domain::{
    entities::SearchRecord,
    value_objects::{Language, Persona},
};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, handlers::common::resolve_current_user, state::AppState};

/// How many searches one response returns at most
const HISTORY_LIMIT: usize = 20;

/// One search in the history response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Place the search referred to, possibly empty
    pub place: String,
    /// The free-text query
    pub query: String,
    /// Persona the suggestions were generated with
    pub persona: Persona,
    /// Output language of the suggestions
    pub language: Language,
    /// When the search happened
    pub searched_at: DateTime<Utc>,
}

impl From<SearchRecord> for HistoryEntry {
    fn from(record: SearchRecord) -> Self {
        Self {
            place: record.place,
            query: record.query,
            persona: record.persona,
            language: record.language,
            searched_at: record.searched_at,
        }
    }
}

/// History response body
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Recent searches, newest first
    pub searches: Vec<HistoryEntry>,
}

/// Return the caller's most recent searches, newest first
#[instrument(skip(state, headers))]
pub async fn recent_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>, ApiError> {
    let Some(user) = resolve_current_user(&state, &headers).await? else {
        return Err(ApiError::Unauthorized("Authentication required".to_string()));
    };

    let searches = state
        .history
        .recent_searches(&user.id, HISTORY_LIMIT)
        .await?
        .into_iter()
        .map(HistoryEntry::from)
        .collect();

    Ok(Json(HistoryResponse { searches }))
}
