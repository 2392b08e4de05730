//! Resume HTTP Routes
//!
//! Fixed lookup endpoints over the seeded dataset.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::errors::ApiError;
use super::server::AppState;
use crate::db::JsonRow;
use crate::resume::{self, EducationRecord};

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    #[serde(default)]
    pub category: Option<String>,
}

// ==================
// Routes
// ==================

/// Create resume lookup routes
pub fn resume_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/skills", get(skills_handler))
        .route("/experience", get(experience_handler))
        .route("/education", get(education_handler))
        .route("/achievements", get(achievements_handler))
        .route("/personal_info", get(personal_info_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn skills_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let rows = resume::skills(&state.store, query.category.as_deref()).await?;
    Ok(Json(rows))
}

async fn experience_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let rows = resume::experience(&state.store).await?;
    Ok(Json(rows))
}

async fn education_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EducationRecord>, ApiError> {
    let record = resume::education(&state.store).await?;
    Ok(Json(record))
}

async fn achievements_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<JsonRow>>, ApiError> {
    let rows = resume::achievements(&state.store).await?;
    Ok(Json(rows))
}

async fn personal_info_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<JsonRow>, ApiError> {
    let row = resume::personal_info(&state.store).await?;
    Ok(Json(row))
}
