//! # API Errors
//!
//! Error type surfaced by the HTTP handlers. Every variant maps to a
//! status code and a `{error, code}` JSON body; requests are independent
//! and no failure is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::db::errors::DatabaseError;
use crate::gate::GateError;

/// HTTP-surface errors.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Query gate rejection or execution failure
    #[error("{0}")]
    Gate(#[from] GateError),

    /// Expected exactly one row, found none
    #[error("Resource not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure outside the gated path
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Gate rejections and execution failures are the caller's
            // fault: bad query text.
            ApiError::Gate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NoResult => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
