//! # HTTP Server
//!
//! axum router and route modules for the query service. One module per
//! surface, each taking the shared application state; the server module
//! assembles them, layers CORS and request tracing on top, and serves.

pub mod errors;
pub mod football_routes;
pub mod query_routes;
pub mod resume_routes;
pub mod server;
pub mod status_routes;

pub use errors::ApiError;
pub use server::{AppState, HttpServer};
