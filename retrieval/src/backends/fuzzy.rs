use std::sync::Arc;

use codesearch_core::{SearchResult, SourceId};
use codesearch_core::traits::{FtsHit, IndexStore};

use super::BackendAdapter;
use crate::fusion::normalize_bm25;

/// Fuzzy lexical FTS adapter: trigram/extended-tokenizer index over the same
/// corpus as [`super::ExactAdapter`] (spec §4.3 "Fuzzy FTS").
pub struct FuzzyAdapter {
    store: Arc<dyn IndexStore>,
}

impl FuzzyAdapter {
    pub fn new(store: Arc<dyn IndexStore>) -> Self {
        Self { store }
    }
}

impl BackendAdapter for FuzzyAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Fuzzy
    }

    fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        match self.store.search_fts_fuzzy(query, limit) {
            Ok(hits) => hits.into_iter().map(hit_to_result).collect(),
            Err(err) => {
                tracing::debug!(source = "fuzzy", error = %err, "fuzzy FTS backend failed, returning empty");
                Vec::new()
            }
        }
    }
}

fn hit_to_result(hit: FtsHit) -> SearchResult {
    let mut result = SearchResult::new(hit.file_path, normalize_bm25(hit.bm25_score), hit.excerpt);
    if let Some(content) = hit.content {
        result = result.with_content(content);
    }
    if let Some(symbol) = hit.symbol {
        result = result.with_symbol(symbol);
    }
    if let (Some(start), Some(end)) = (hit.start_line, hit.end_line) {
        result = result.with_lines(start, end);
    }
    result
}
