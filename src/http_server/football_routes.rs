//! Football Opinion HTTP Routes
//!
//! Dispatches free-text questions through the opinion lookup and serves
//! the hot-takes document.

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Deserialize;

use super::server::AppState;
use crate::opinions::{HotTakes, OpinionMatch};

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct FootballQueryRequest {
    pub query: String,
}

// ==================
// Routes
// ==================

/// Create football opinion routes
pub fn football_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/football_query", post(football_query_handler))
        .route("/football_hot_takes", get(hot_takes_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn football_query_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FootballQueryRequest>,
) -> Json<OpinionMatch> {
    Json(state.football.consult(&request.query))
}

async fn hot_takes_handler(State(state): State<Arc<AppState>>) -> Json<HotTakes> {
    Json(state.football.hot_takes())
}
