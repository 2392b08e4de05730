//! Query Gate Invariant Tests
//!
//! End-to-end properties of the read-only gate against a real seeded
//! store:
//! - non-SELECT input never executes
//! - denylisted sequences reject anywhere in the string
//! - clean SELECTs return the same rows as direct store execution
//! - repeated execution of the same query is idempotent

use persona_api::db::ResumeStore;
use persona_api::gate::{GateError, QueryGate, DENYLIST};

async fn seeded_store() -> ResumeStore {
    ResumeStore::open_in_memory().await.unwrap()
}

// =============================================================================
// Intent Check
// =============================================================================

#[tokio::test]
async fn non_select_input_is_rejected_before_execution() {
    let store = seeded_store().await;

    for raw in [
        "DROP TABLE skills",
        "PRAGMA table_info(skills)",
        "EXPLAIN SELECT 1",
        "WITH x AS (SELECT 1) SELECT * FROM x",
        "",
    ] {
        let err = QueryGate::execute(&store, raw).await.unwrap_err();
        assert_eq!(err, GateError::RejectedIntent, "input: {raw:?}");
    }

    // The store is untouched by the attempts above.
    let rows = store
        .query_rows("SELECT COUNT(*) AS n FROM skills", ())
        .await
        .unwrap();
    assert_eq!(rows[0]["n"], serde_json::json!(17));
}

#[tokio::test]
async fn intent_check_trims_and_ignores_case() {
    let store = seeded_store().await;

    let outcome = QueryGate::execute(&store, "   select name from skills limit 1  ")
        .await
        .unwrap();
    assert_eq!(outcome.row_count, 1);
    assert_eq!(outcome.query_executed, "select name from skills limit 1");
}

// =============================================================================
// Denylist Check
// =============================================================================

#[tokio::test]
async fn denylisted_sequences_reject_even_with_select_prefix() {
    let store = seeded_store().await;

    for d in DENYLIST {
        let raw = format!("SELECT * FROM skills WHERE name = '{}'", d.to_lowercase());
        let err = QueryGate::execute(&store, &raw).await.unwrap_err();
        assert!(
            matches!(err, GateError::RejectedContent(_)),
            "sequence {d:?} passed the gate"
        );
    }
}

#[tokio::test]
async fn multi_statement_input_is_rejected() {
    let store = seeded_store().await;

    let err = QueryGate::execute(&store, "SELECT * FROM skills; DROP TABLE skills")
        .await
        .unwrap_err();
    assert!(matches!(err, GateError::RejectedContent(_)));

    // Table still exists.
    let rows = store.query_rows("SELECT COUNT(*) AS n FROM skills", ()).await;
    assert!(rows.is_ok());
}

// =============================================================================
// Execution
// =============================================================================

#[tokio::test]
async fn clean_select_matches_direct_store_execution() {
    let store = seeded_store().await;
    let sql = "SELECT * FROM skills WHERE category = 'Languages'";

    let outcome = QueryGate::execute(&store, sql).await.unwrap();
    let direct = store.query_rows(sql, ()).await.unwrap();

    assert_eq!(outcome.results, direct);
    assert_eq!(outcome.row_count, direct.len());
    assert_eq!(outcome.query_executed, sql);
    assert!(outcome
        .results
        .iter()
        .all(|row| row["category"] == "Languages"));
}

#[tokio::test]
async fn repeated_execution_is_idempotent() {
    let store = seeded_store().await;
    let sql = "SELECT name, proficiency FROM skills ORDER BY proficiency DESC";

    let first = QueryGate::execute(&store, sql).await.unwrap();
    let second = QueryGate::execute(&store, sql).await.unwrap();

    assert_eq!(first.results, second.results);
    assert_eq!(first.row_count, second.row_count);
}

#[tokio::test]
async fn store_rejection_surfaces_as_execution_error() {
    let store = seeded_store().await;

    let err = QueryGate::execute(&store, "SELECT * FROM no_such_table")
        .await
        .unwrap_err();
    match err {
        GateError::Execution(msg) => assert!(!msg.is_empty()),
        other => panic!("expected Execution, got {other:?}"),
    }
}

#[tokio::test]
async fn joins_and_aggregates_pass_the_gate() {
    let store = seeded_store().await;

    let outcome = QueryGate::execute(
        &store,
        "SELECT w.company, COUNT(p.id) AS n FROM work_experience w \
         JOIN projects p ON p.work_experience_id = w.id GROUP BY w.company",
    )
    .await
    .unwrap();
    assert_eq!(outcome.row_count, 3);
}
