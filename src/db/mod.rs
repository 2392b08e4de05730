//! # Relational Store
//!
//! libSQL-backed store for the resume dataset. Opening a store creates the
//! fixed six-entity schema and bulk-inserts the seed data; nothing mutates
//! the dataset afterwards, so concurrent reads need no coordination.
//!
//! Uses the `libsql` crate (embedded `SQLite`), which supplies real SQL
//! execution for the query gate and parameter binding for the fixed
//! lookups.

pub mod errors;
pub mod rows;

use libsql::Builder;

pub use errors::DatabaseError;
pub use rows::JsonRow;

/// Schema: the six resume entities plus the soft-referenced projects table.
const SCHEMA: &str = include_str!("schema.sql");

/// One-time dataset seed. Idempotent on re-open of an on-disk database.
const SEED: &str = include_str!("seed.sql");

/// Handle to the seeded resume dataset.
pub struct ResumeStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ResumeStore {
    /// Open (or create) the store at the given path and seed it.
    ///
    /// Pass `":memory:"` for an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// schema/seed scripts fail.
    pub async fn open(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let store = Self { db, conn };
        store.seed().await?;
        Ok(store)
    }

    /// Open a seeded in-memory store.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::open(":memory:").await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run the embedded schema and seed scripts.
    async fn seed(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA)
            .await
            .map_err(|e| DatabaseError::Seed(format!("schema: {e}")))?;
        self.conn
            .execute_batch(SEED)
            .await
            .map_err(|e| DatabaseError::Seed(format!("seed data: {e}")))?;
        Ok(())
    }

    /// Execute a query and collect the result as JSON rows in column order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` with the store's message if the
    /// statement is rejected at execution time.
    pub async fn query_rows(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<JsonRow>, DatabaseError> {
        let rows = self
            .conn
            .query(sql, params)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;
        rows::collect_rows(rows).await
    }
}
