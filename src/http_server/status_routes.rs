//! Travel Status HTTP Routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::server::AppState;
use crate::status::StatusReport;

/// Create travel status routes
pub fn status_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .with_state(state)
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    Json(state.travel.report())
}
