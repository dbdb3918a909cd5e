use std::collections::HashMap;
use std::sync::Arc;

use codesearch_core::traits::{SparseEncoder, SpladeIndex};
use codesearch_core::{SearchResult, SourceId};

use super::BackendAdapter;

/// Sparse neural (SPLADE) adapter: dot product over an inverted index of
/// SPLADE-encoded chunks (spec §4.3 "SPLADE").
pub struct SpladeAdapter {
    index: Arc<dyn SpladeIndex>,
    encoder: Arc<dyn SparseEncoder>,
    min_score: f32,
}

impl SpladeAdapter {
    pub fn new(index: Arc<dyn SpladeIndex>, encoder: Arc<dyn SparseEncoder>, min_score: f32) -> Self {
        Self { index, encoder, min_score }
    }
}

impl BackendAdapter for SpladeAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Splade
    }

    fn is_available(&self) -> bool {
        self.index.has_index()
    }

    fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if !self.index.has_index() {
            return Vec::new();
        }

        let sparse_query = match self.encoder.encode_query(query) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(source = "splade", error = %err, "sparse encoding failed, returning empty");
                return Vec::new();
            }
        };

        let hits = match self.index.search(&sparse_query, limit, self.min_score) {
            Ok(hits) => hits,
            Err(err) => {
                tracing::debug!(source = "splade", error = %err, "splade search failed, returning empty");
                return Vec::new();
            }
        };
        if hits.is_empty() {
            return Vec::new();
        }

        let score_by_id: HashMap<i64, f32> = hits.iter().map(|h| (h.chunk_id, h.score)).collect();
        let ids: Vec<i64> = hits.iter().map(|h| h.chunk_id).collect();

        let chunks = match self.index.get_chunks_by_ids(&ids) {
            Ok(chunks) => chunks,
            Err(err) => {
                tracing::debug!(source = "splade", error = %err, "chunk lookup failed, returning empty");
                return Vec::new();
            }
        };

        let mut results: Vec<SearchResult> = chunks
            .into_iter()
            .filter_map(|chunk| {
                let score = *score_by_id.get(&chunk.chunk_id)? as f64;
                let mut result = SearchResult::new(chunk.file_path, score, String::new()).with_content(chunk.content);
                if let (Some(start), Some(end)) = (chunk.start_line, chunk.end_line) {
                    result = result.with_lines(start, end);
                }
                Some(result)
            })
            .collect();

        results.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(limit);
        results
    }
}
