//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather lookup
        .route("/weather", post(handlers::weather::lookup_weather))
        // Suggestion generation
        .route("/suggest", post(handlers::suggest::generate_suggestions))
        // Per-user search history
        .route("/history", get(handlers::history::recent_history))
        // Attach state
        .with_state(state)
}
