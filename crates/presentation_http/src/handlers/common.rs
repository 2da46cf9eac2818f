//! Shared helper functions for HTTP handlers
//!
//! Bearer-token extraction and identity resolution used by the suggest and
//! history handlers.

use application::ports::CurrentUser;
use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::{error::ApiError, state::AppState};

/// Extract the bearer token from the Authorization header, if any
///
/// Returns `None` for a missing header, a non-Bearer scheme, or an empty
/// token. The caller stays anonymous in all of those cases.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Resolve the calling user from request headers
///
/// Anonymous requests and unknown tokens both resolve to `None`; endpoints
/// that require identity reject `None` themselves.
pub async fn resolve_current_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<CurrentUser>, ApiError> {
    let user = state
        .identity
        .current_user(bearer_token(headers))
        .await
        .map_err(ApiError::from)?;
    Ok(user)
}
