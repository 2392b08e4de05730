//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! Initialization opens and seeds the store, loads the static documents,
//! and builds the router; after that everything is immutable shared
//! state, so handlers never coordinate.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::football_routes::football_routes;
use super::query_routes::query_routes;
use super::resume_routes::resume_routes;
use super::status_routes::status_routes;
use crate::config::ServerConfig;
use crate::db::{DatabaseError, ResumeStore};
use crate::docs::DocumentError;
use crate::opinions::FootballOpinions;
use crate::status::TravelPlans;

/// Errors during server initialization.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("store: {0}")]
    Store(#[from] DatabaseError),

    #[error("document: {0}")]
    Document(#[from] DocumentError),
}

/// Immutable application state shared by all handlers.
pub struct AppState {
    pub store: ResumeStore,
    pub travel: TravelPlans,
    pub football: FootballOpinions,
}

/// HTTP server for the query service
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Open the store, load the documents, and build the router.
    pub async fn init(config: ServerConfig) -> Result<Self, InitError> {
        let store = ResumeStore::open(&config.db_path).await?;
        let travel = TravelPlans::load(&config.data_dir)?;
        let football = FootballOpinions::load(&config.data_dir)?;

        let state = Arc::new(AppState {
            store,
            travel,
            football,
        });
        let router = Self::build_router(&config, state);
        Ok(Self { config, router })
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(allow_origin(config.cors_origins.clone()))
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .merge(status_routes(state.clone()))
            .merge(football_routes(state.clone()))
            .merge(query_routes(state.clone()))
            .merge(resume_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting persona-api");
        tracing::info!("health check: http://{}/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Configured origins, plus any `https://*.vercel.app` preview deploy.
fn allow_origin(origins: Vec<String>) -> AllowOrigin {
    AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
        origin_allowed(origin, &origins)
    })
}

fn origin_allowed(origin: &HeaderValue, origins: &[String]) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    origins.iter().any(|allowed| allowed == origin)
        || (origin.starts_with("https://") && origin.ends_with(".vercel.app"))
}

// ==================
// Root Handlers
// ==================

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "healthy",
        "service": "persona-api",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// Root index: service name and the endpoints it serves
async fn index_handler() -> impl IntoResponse {
    let response = serde_json::json!({
        "name": "persona-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/status",
            "/football_query",
            "/football_hot_takes",
            "/sql_query",
            "/skills",
            "/experience",
            "/education",
            "/achievements",
            "/personal_info",
            "/health",
        ],
    });
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(s: &str) -> HeaderValue {
        HeaderValue::from_str(s).unwrap()
    }

    #[test]
    fn test_configured_origin_allowed() {
        let origins = vec!["http://localhost:3000".to_string()];
        assert!(origin_allowed(&value("http://localhost:3000"), &origins));
        assert!(!origin_allowed(&value("http://evil.example"), &origins));
    }

    #[test]
    fn test_vercel_preview_allowed() {
        let origins = vec![];
        assert!(origin_allowed(&value("https://my-site.vercel.app"), &origins));
        // Pattern requires https and the exact suffix
        assert!(!origin_allowed(&value("http://my-site.vercel.app"), &origins));
        assert!(!origin_allowed(&value("https://vercel.app.evil.example"), &origins));
    }
}
