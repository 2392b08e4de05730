//! Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS origins,
//! data directory, and database path. Defaults can be overridden from the
//! environment (`PORT`, `FRONTEND_URL`, `PERSONA_DATA_DIR`,
//! `PERSONA_DB_PATH`) and from CLI flags on top of that.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Any `https://*.vercel.app` origin is
    /// additionally allowed regardless of this list.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Directory holding the static JSON documents (default: "data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Database path, or ":memory:" for an in-memory store (default)
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(), // Next.js dev server
        "http://127.0.0.1:3000".to_string(),
        "http://localhost:5173".to_string(), // Vite dev server
    ]
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_db_path() -> String {
    ":memory:".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            data_dir: default_data_dir(),
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        if let Ok(frontend) = std::env::var("FRONTEND_URL") {
            if !frontend.is_empty() {
                config.cors_origins.push(frontend);
            }
        }
        if let Ok(dir) = std::env::var("PERSONA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("PERSONA_DB_PATH") {
            config.db_path = path;
        }

        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
