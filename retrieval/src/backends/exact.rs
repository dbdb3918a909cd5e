use std::sync::Arc;

use codesearch_core::{SearchResult, SourceId};
use codesearch_core::traits::{FtsHit, IndexStore};

use super::BackendAdapter;
use crate::fusion::normalize_bm25;

/// Exact lexical FTS adapter: whole-word BM25 ranking (spec §4.3 "Exact
/// FTS"). Bound to a single per-directory index at construction.
pub struct ExactAdapter {
    store: Arc<dyn IndexStore>,
}

impl ExactAdapter {
    pub fn new(store: Arc<dyn IndexStore>) -> Self {
        Self { store }
    }
}

impl BackendAdapter for ExactAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Exact
    }

    fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        match self.store.search_fts_exact(query, limit) {
            Ok(hits) => hits.into_iter().map(hit_to_result).collect(),
            Err(err) => {
                tracing::debug!(source = "exact", error = %err, "exact FTS backend failed, returning empty");
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
