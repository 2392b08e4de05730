//! Resume convenience lookups.
//!
//! Fixed parameterized reads over the seeded dataset. The only shaping
//! worth noting is the experience listing: the current position sorts
//! first, the rest sort by end date descending, and every row is enriched
//! with its projects via a secondary lookup on the experience id.

use serde_json::Value;

use crate::db::{errors::DatabaseError, JsonRow, ResumeStore};

/// `/education` response: education rows plus the full course list.
#[derive(Debug, serde::Serialize)]
pub struct EducationRecord {
    pub education: Vec<JsonRow>,
    pub courses: Vec<JsonRow>,
}

/// Skills, proficiency descending, optionally filtered by category.
pub async fn skills(
    store: &ResumeStore,
    category: Option<&str>,
) -> Result<Vec<JsonRow>, DatabaseError> {
    match category {
        Some(category) => {
            store
                .query_rows(
                    "SELECT * FROM skills WHERE category = ?1",
                    libsql::params![category],
                )
                .await
        }
        None => {
            store
                .query_rows("SELECT * FROM skills ORDER BY proficiency DESC", ())
                .await
        }
    }
}

/// Work experience with nested projects.
///
/// The current position sorts first regardless of its end date; remaining
/// rows sort by the stored end-date text descending.
pub async fn experience(store: &ResumeStore) -> Result<Vec<JsonRow>, DatabaseError> {
    let mut experiences = store
        .query_rows(
            "SELECT * FROM work_experience ORDER BY \
             CASE WHEN is_current = 1 THEN 0 ELSE 1 END, \
             end_date DESC",
            (),
        )
        .await?;

    for exp in &mut experiences {
        let id = exp
            .get("id")
            .and_then(Value::as_i64)
            .ok_or(DatabaseError::NoResult)?;
        let projects = store
            .query_rows(
                "SELECT * FROM projects WHERE work_experience_id = ?1",
                libsql::params![id],
            )
            .await?;
        exp.insert("projects".to_string(), Value::Array(
            projects.into_iter().map(Value::Object).collect(),
        ));
    }

    Ok(experiences)
}

/// Education rows plus the course list.
pub async fn education(store: &ResumeStore) -> Result<EducationRecord, DatabaseError> {
    let education = store.query_rows("SELECT * FROM education", ()).await?;
    let courses = store.query_rows("SELECT * FROM courses", ()).await?;
    Ok(EducationRecord { education, courses })
}

/// Achievements, year descending.
pub async fn achievements(store: &ResumeStore) -> Result<Vec<JsonRow>, DatabaseError> {
    store
        .query_rows("SELECT * FROM achievements ORDER BY year DESC", ())
        .await
}

/// The singleton personal-info row. `NoResult` if the table is empty.
pub async fn personal_info(store: &ResumeStore) -> Result<JsonRow, DatabaseError> {
    let mut rows = store.query_rows("SELECT * FROM personal_info", ()).await?;
    if rows.is_empty() {
        return Err(DatabaseError::NoResult);
    }
    Ok(rows.swap_remove(0))
}
