use std::collections::HashMap;
use std::sync::Arc;

use codesearch_core::traits::{BinarySearcher, Embedder, VectorMetadataStore};
use codesearch_core::{SearchResult, SourceId};

use super::BackendAdapter;

/// Converts a Hamming distance over 256-bit packed codes to a `[0, 1]`
/// score (spec §4.5 "Hamming-to-score conversion").
pub fn hamming_to_score(distance: u32) -> f64 {
    (1.0 - distance as f64 / 256.0).clamp(0.0, 1.0)
}

/// Binary (packed Hamming) vector adapter (spec §4.3 "Binary", §4.5 "Binary
/// Vector Retrieval"). The centralized memory-mapped store, if present, is
/// what the caller binds in at construction; legacy per-directory fallback
/// is a caller-side concern (one adapter instance per resolved searcher).
pub struct BinaryAdapter {
    searcher: Arc<dyn BinarySearcher>,
    metadata_store: Arc<dyn VectorMetadataStore>,
    embedder: Arc<dyn Embedder>,
}

impl BinaryAdapter {
    pub fn new(searcher: Arc<dyn BinarySearcher>, metadata_store: Arc<dyn VectorMetadataStore>, embedder: Arc<dyn Embedder>) -> Self {
        Self { searcher, metadata_store, embedder }
    }
}

impl BackendAdapter for BinaryAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Binary
    }

    fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let query_vec = match self.embedder.embed_single(query) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(source = "binary", error = %err, "embedding failed, returning empty");
                return Vec::new();
            }
        };

        let (ids, distances) = match self.searcher.search(&query_vec, limit) {
            Ok(pair) => pair,
            Err(err) => {
                tracing::debug!(source = "binary", error = %err, "binary search failed, returning empty");
                return Vec::new();
            }
        };
        if ids.is_empty() {
            return Vec::new();
        }

        let score_by_id: HashMap<i64, f64> =
            ids.iter().copied().zip(distances.iter().copied().map(hamming_to_score)).collect();

        let chunks = match self.metadata_store.get_chunks_by_ids(&ids, None) {
            Ok(chunks) => chunks,
            Err(err) => {
                tracing::debug!(source = "binary", error = %err, "chunk metadata lookup failed, returning empty");
                return Vec::new();
            }
        };

        let mut results: Vec<SearchResult> = chunks
            .into_iter()
            .filter_map(|chunk| {
                let score = *score_by_id.get(&chunk.chunk_id)?;
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
