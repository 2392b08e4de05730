//! Store Ordering and Enrichment Tests
//!
//! Shaping rules for the convenience lookups:
//! - experience: current entry first, remainder end-date descending,
//!   each row enriched with its own projects
//! - skills: proficiency descending by default
//! - achievements: year descending

use persona_api::db::ResumeStore;
use persona_api::resume;
use serde_json::Value;

async fn seeded_store() -> ResumeStore {
    ResumeStore::open_in_memory().await.unwrap()
}

// =============================================================================
// Experience Ordering
// =============================================================================

#[tokio::test]
async fn current_experience_sorts_first() {
    let store = seeded_store().await;
    let experiences = resume::experience(&store).await.unwrap();

    assert_eq!(experiences.len(), 3);
    assert_eq!(experiences[0]["is_current"], serde_json::json!(1));
    assert!(experiences[1..]
        .iter()
        .all(|e| e["is_current"] == serde_json::json!(0)));
}

#[tokio::test]
async fn non_current_experiences_sort_by_end_date_descending() {
    let store = seeded_store().await;
    let experiences = resume::experience(&store).await.unwrap();

    // End dates are the stored text representation, so the order is
    // descending over that text.
    let end_dates: Vec<&str> = experiences[1..]
        .iter()
        .map(|e| e["end_date"].as_str().unwrap())
        .collect();
    let mut sorted = end_dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(end_dates, sorted);
}

// =============================================================================
// Project Enrichment
// =============================================================================

#[tokio::test]
async fn each_experience_carries_its_own_projects() {
    let store = seeded_store().await;
    let experiences = resume::experience(&store).await.unwrap();

    let mut total = 0;
    for exp in &experiences {
        let id = exp["id"].as_i64().unwrap();
        let projects = exp["projects"].as_array().unwrap();
        total += projects.len();

        for project in projects {
            assert_eq!(
                project["work_experience_id"],
                Value::from(id),
                "project attached to wrong experience"
            );
        }
    }
    assert_eq!(total, 8);
}

#[tokio::test]
async fn current_experience_has_expected_projects() {
    let store = seeded_store().await;
    let experiences = resume::experience(&store).await.unwrap();

    let current = &experiences[0];
    assert_eq!(current["company"], "Newme");
    assert_eq!(current["projects"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Other Lookups
// =============================================================================

#[tokio::test]
async fn achievements_are_year_descending() {
    let store = seeded_store().await;
    let rows = resume::achievements(&store).await.unwrap();

    assert_eq!(rows.len(), 5);
    let years: Vec<&str> = rows.iter().map(|r| r["year"].as_str().unwrap()).collect();
    let mut sorted = years.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);
}

#[tokio::test]
async fn skills_filter_returns_exactly_that_category() {
    let store = seeded_store().await;

    let languages = resume::skills(&store, Some("Languages")).await.unwrap();
    assert_eq!(languages.len(), 4);
    assert!(languages.iter().all(|r| r["category"] == "Languages"));

    let none = resume::skills(&store, Some("Cooking")).await.unwrap();
    assert!(none.is_empty());
}
