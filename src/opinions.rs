//! Football opinion lookup.
//!
//! A static keyword table dispatches free-text questions to canned
//! opinions. Topics are tried in declaration order and the first topic
//! with any keyword substring-hit against the lowercased input wins. No
//! match falls back to the `general` topic backed by the `"current take"`
//! opinion.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::docs::{self, DocumentError};

const FILE_NAME: &str = "football_opinions.json";

/// Fallback when no keyword matches.
const FALLBACK_TOPIC: &str = "general";
const FALLBACK_OPINION_KEY: &str = "current take";
const FALLBACK_OPINION: &str = "Barcelona is the best team in the world!";

/// Topic dispatch table, in priority order. First hit wins.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("messi", &["messi", "leo", "goat", "greatest"]),
    ("ronaldo", &["ronaldo", "cr7", "cristiano"]),
    ("barcelona", &["barcelona", "barca", "fcb", "blaugrana"]),
    ("real madrid", &["real madrid", "madrid", "los blancos"]),
    ("el clasico", &["clasico", "el clasico", "rivalry"]),
    ("lamine yamal", &["lamine", "yamal"]),
    ("pedri", &["pedri"]),
    ("premier league", &["premier league", "epl", "english"]),
    ("world cup 2022", &["world cup", "qatar", "argentina"]),
    ("champions league", &["champions league", "ucl"]),
    ("best match", &["best match", "remontada", "6-1", "psg"]),
];

/// The football-opinions document as stored on disk.
///
/// `opinions` stays an ordered JSON map: related-topic selection depends
/// on the document's declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootballOpinions {
    pub favorite_team: String,
    pub goat: String,
    pub hot_takes: Vec<String>,
    pub opinions: serde_json::Map<String, Value>,
}

/// Outcome of a dispatch: title-cased topic, opinion text, confidence,
/// and up to three related topics in document order.
#[derive(Debug, Clone, Serialize)]
pub struct OpinionMatch {
    pub topic: String,
    pub opinion: String,
    pub confidence: String,
    pub related_topics: Vec<String>,
}

/// `/football_hot_takes` response shape.
#[derive(Debug, Clone, Serialize)]
pub struct HotTakes {
    pub favorite_team: String,
    pub goat: String,
    pub hot_takes: Vec<String>,
}

impl FootballOpinions {
    /// Load the document from the data directory.
    pub fn load(dir: &Path) -> Result<Self, DocumentError> {
        docs::load_json(dir, FILE_NAME)
    }

    /// Dispatch a free-text question to an opinion.
    pub fn consult(&self, query: &str) -> OpinionMatch {
        let query_lower = query.to_lowercase();

        let matched = TOPIC_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| query_lower.contains(*kw)))
            .map(|(topic, _)| *topic)
            .unwrap_or(FALLBACK_TOPIC);

        let explicit = self.opinions.contains_key(matched);
        let opinion = self
            .opinion_text(matched)
            .or_else(|| self.opinion_text(FALLBACK_OPINION_KEY))
            .unwrap_or_else(|| FALLBACK_OPINION.to_string());

        let related_topics: Vec<String> = self
            .opinions
            .keys()
            .filter(|t| t.as_str() != matched)
            .take(3)
            .cloned()
            .collect();

        OpinionMatch {
            topic: title_case(matched),
            opinion,
            confidence: if explicit { "High" } else { "Medium" }.to_string(),
            related_topics,
        }
    }

    /// `/football_hot_takes` payload.
    pub fn hot_takes(&self) -> HotTakes {
        HotTakes {
            favorite_team: self.favorite_team.clone(),
            goat: self.goat.clone(),
            hot_takes: self.hot_takes.clone(),
        }
    }

    fn opinion_text(&self, topic: &str) -> Option<String> {
        self.opinions
            .get(topic)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
