//! # Query Gate Errors
//!
//! Rejection and execution failures for the read-only query gate. All of
//! these are client errors; none are retried and none affect later
//! requests.

use thiserror::Error;

/// Why a submitted query was not (successfully) executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The trimmed query does not start with SELECT.
    #[error("only SELECT queries are allowed")]
    RejectedIntent,

    /// The query contains a denylisted sequence. Carries the first match.
    #[error("query contains forbidden sequence `{0}`")]
    RejectedContent(&'static str),

    /// The store rejected the query at execution time.
    #[error("SQL error: {0}")]
    Execution(String),
}
