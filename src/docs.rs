//! Static JSON document loading.
//!
//! The travel-status and football-opinions documents are read once at
//! startup from the data directory and held immutably for the life of the
//! process. A missing or malformed document is a startup error, never a
//! per-request one.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors loading a static document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {name}: {source}")]
    Read {
        name: &'static str,
        source: std::io::Error,
    },

    #[error("cannot parse {name}: {source}")]
    Parse {
        name: &'static str,
        source: serde_json::Error,
    },
}

/// Load and parse a JSON document from the data directory.
pub fn load_json<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<T, DocumentError> {
    let raw = std::fs::read_to_string(dir.join(name))
        .map_err(|source| DocumentError::Read { name, source })?;
    serde_json::from_str(&raw).map_err(|source| DocumentError::Parse { name, source })
}
