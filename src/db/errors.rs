//! # Store Errors
//!
//! Error types for the relational store.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("query failed: {0}")]
    Query(String),

    /// Schema creation or seeding failed.
    #[error("seed failed: {0}")]
    Seed(String),

    /// Expected exactly one row but none was returned.
    #[error("no matching row")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
