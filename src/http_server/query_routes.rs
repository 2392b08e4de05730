//! SQL Query HTTP Routes
//!
//! The constrained free-form query endpoint. The body is handed to the
//! query gate unmodified; the gate decides whether it runs.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::server::AppState;
use crate::db::JsonRow;
use crate::gate::QueryGate;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SqlQueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SqlQueryResponse {
    pub results: Vec<JsonRow>,
    pub row_count: usize,
    pub query_executed: String,
}

// ==================
// Routes
// ==================

/// Create SQL query routes
pub fn query_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sql_query", post(sql_query_handler))
        .with_state(state)
}

async fn sql_query_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SqlQueryRequest>,
) -> Result<Json<SqlQueryResponse>, ApiError> {
    let outcome = QueryGate::execute(&state.store, &request.query).await?;

    Ok(Json(SqlQueryResponse {
        results: outcome.results,
        row_count: outcome.row_count,
        query_executed: outcome.query_executed,
    }))
}
