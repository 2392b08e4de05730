//! CLI argument definitions using clap
//!
//! Commands:
//! - persona-api serve [--host H] [--port P] [--db-path PATH] [--data-dir DIR]
//! - persona-api seed [--path PATH]
//!
//! `serve` is the default when no subcommand is given. Flags override
//! environment overrides, which override the built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::db::{DatabaseError, ResumeStore};
use crate::http_server::{server::InitError, HttpServer};

/// persona-api - read-only query service over a personal resume dataset
#[derive(Parser, Debug)]
#[command(name = "persona-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Database path, or ":memory:"
        #[arg(long)]
        db_path: Option<String>,

        /// Directory holding the static JSON documents
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Create and seed an on-disk database, then exit
    Seed {
        /// Where to write the database
        #[arg(long, default_value = "data/resume.db")]
        path: String,
    },
}

/// CLI-level errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("initialization failed: {0}")]
    Init(#[from] InitError),

    #[error("seed failed: {0}")]
    Seed(#[from] DatabaseError),

    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments and dispatch.
pub async fn run() -> Result<(), CliError> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        db_path: None,
        data_dir: None,
    }) {
        Command::Serve {
            host,
            port,
            db_path,
            data_dir,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(db_path) = db_path {
                config.db_path = db_path;
            }
            if let Some(data_dir) = data_dir {
                config.data_dir = data_dir;
            }

            let server = HttpServer::init(config).await?;
            server.start().await?;
            Ok(())
        }
        Command::Seed { path } => {
            ResumeStore::open(&path).await?;
            tracing::info!(path = %path, "database seeded");
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
