use serde::{Deserialize, Serialize};

/// Coarse classification of a query, used to pick fusion weights and
/// category filters (spec §4.1, GLOSSARY "Query intent").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    Keyword,
    Semantic,
    Mixed,
}

impl QueryIntent {
    /// Category filter this intent maps to for vector search (spec §4.1
    /// "Mapping to vector-search category filter").
    pub fn category_filter(self) -> Option<&'static str> {
        match self {
            QueryIntent::Keyword => Some("code"),
            QueryIntent::Semantic | QueryIntent::Mixed => None,
        }
    }
}
