//! # Query Gate
//!
//! Validates caller-supplied query text and executes it read-only against
//! the store. A query passes only if, after trimming, its uppercased form
//! starts with `SELECT` and contains none of the denylisted sequences.
//!
//! This is a denylist-based sanitizer, not a parser. It is conservative on
//! purpose: a forbidden sequence is rejected anywhere in the string, even
//! inside literals or identifiers, and the statement separator is banned
//! outright, so multi-statement input can never reach the store. The trade
//! is false positives (a legitimate SELECT whose literal text contains
//! e.g. "UPDATE" is refused) and it does not understand vendor syntax
//! beyond the listed keywords.

pub mod errors;

pub use errors::GateError;

use serde::Serialize;

use crate::db::{JsonRow, ResumeStore};

/// Sequences that fail the content check. Mutating/DDL keywords, the
/// comment opener, and the statement separator.
pub const DENYLIST: &[&str] = &[
    "DROP", "DELETE", "INSERT", "UPDATE", "ALTER", "CREATE", "--", ";",
];

/// Successful gate execution: rows in store order, their count, and an
/// echo of the exact string that ran.
#[derive(Debug, Serialize)]
pub struct GateOutcome {
    pub results: Vec<JsonRow>,
    pub row_count: usize,
    pub query_executed: String,
}

/// The read-only query gate.
pub struct QueryGate;

impl QueryGate {
    /// Run the intent and content checks, returning the trimmed query.
    ///
    /// # Errors
    ///
    /// `RejectedIntent` if the trimmed query does not start with SELECT
    /// (case-insensitive); `RejectedContent` if any denylisted sequence
    /// occurs anywhere in it.
    pub fn validate(raw: &str) -> Result<&str, GateError> {
        let query = raw.trim();
        let upper = query.to_uppercase();

        if !upper.starts_with("SELECT") {
            return Err(GateError::RejectedIntent);
        }

        if let Some(hit) = DENYLIST.iter().find(|d| upper.contains(**d)) {
            return Err(GateError::RejectedContent(*hit));
        }

        Ok(query)
    }

    /// Validate and execute `raw` verbatim against the store.
    ///
    /// # Errors
    ///
    /// Validation errors as in [`Self::validate`]; any store failure
    /// (malformed SQL, unknown column or table) surfaces as
    /// `GateError::Execution` with the store's message.
    pub async fn execute(store: &ResumeStore, raw: &str) -> Result<GateOutcome, GateError> {
        let query = Self::validate(raw)?;

        let results = store
            .query_rows(query, ())
            .await
            .map_err(|e| GateError::Execution(e.to_string()))?;

        Ok(GateOutcome {
            row_count: results.len(),
            query_executed: query.to_string(),
            results,
        })
    }
}
