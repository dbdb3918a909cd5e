use std::collections::HashMap;
use std::sync::Arc;

use codesearch_core::traits::{AnnIndex, Embedder, EmbedderBackendKind, EmbedderRegistry, VectorMetadataStore};
use codesearch_core::{SearchResult, SourceId};

use super::BackendAdapter;

/// Dimension → embedder-profile fallback table, used only when an index
/// carries no persisted model config (spec §4.4 "Model-config pinning",
/// resolved precisely in `SPEC_FULL.md` §1.2). Any dimension outside the
/// table, including 512, falls back to `"code"`.
pub fn dimension_fallback_profile(dimension: usize) -> &'static str {
    match dimension {
        384 => "fast",
        768 => "code",
        1024 => "multilingual",
        1536 => "text-embedding-3-small",
        3072 => "text-embedding-3-large",
        _ => "code",
    }
}

/// Selects the embedder an index's vectors were actually encoded with (spec
/// §4.4 "Model-config pinning"). Tries the index's persisted model config
/// first; `dimension_fallback_profile` is only consulted once that config
/// is absent, matching `original_source`'s `get_model_config()` →
/// `get_embedder()` precedence rather than defaulting to dimension
/// detection unconditionally.
pub fn select_embedder(
    metadata_store: &dyn VectorMetadataStore,
    ann_dimension: usize,
    registry: &dyn EmbedderRegistry,
) -> anyhow::Result<Arc<dyn Embedder>> {
    match metadata_store.model_config()? {
        Some(config) => {
            let selector = match config.backend {
                EmbedderBackendKind::Litellm => config.model_name.as_str(),
                EmbedderBackendKind::Fastembed => config.model_profile.as_str(),
            };
            tracing::debug!(backend = ?config.backend, selector, "loaded stored model config");
            registry.resolve(config.backend, selector)
        }
        None => {
            let profile = dimension_fallback_profile(ann_dimension);
            tracing::debug!(dimension = ann_dimension, profile, "no stored model config, using dimension fallback table");
            registry.resolve(EmbedderBackendKind::Fastembed, profile)
        }
    }
}

/// Dense vector adapter over an HNSW-style ANN index, centralized or
/// per-directory (spec §4.4 "Vector Retrieval"). Bound at construction to
/// whichever `AnnIndex`/`VectorMetadataStore` the caller already resolved —
/// centralized-vs-distributed discovery happens one layer up, in the hybrid
/// engine, via `Registry::find_nearest_index`.
pub struct VectorAdapter {
    ann: Arc<dyn AnnIndex>,
    metadata_store: Arc<dyn VectorMetadataStore>,
    embedder: Arc<dyn Embedder>,
    category: Option<String>,
}

impl VectorAdapter {
    pub fn new(
        ann: Arc<dyn AnnIndex>,
        metadata_store: Arc<dyn VectorMetadataStore>,
        embedder: Arc<dyn Embedder>,
        category: Option<String>,
    ) -> Self {
        Self { ann, metadata_store, embedder, category }
    }

    /// Builds an adapter by resolving its embedder from the index's own
    /// stored model config (or the dimension fallback table) instead of
    /// taking an already-chosen one via DI (spec §4.4 "Model-config
    /// pinning"). The plausible construction path a `HybridSearchFactory`
    /// implementation uses once it knows which `AnnIndex`/
    /// `VectorMetadataStore` a directory resolved to.
    pub fn from_registry(
        ann: Arc<dyn AnnIndex>,
        metadata_store: Arc<dyn VectorMetadataStore>,
        registry: &dyn EmbedderRegistry,
        category: Option<String>,
    ) -> anyhow::Result<Self> {
        let embedder = select_embedder(metadata_store.as_ref(), ann.dimension(), registry)?;
        Ok(Self::new(ann, metadata_store, embedder, category))
    }
}

impl BackendAdapter for VectorAdapter {
    fn source_id(&self) -> SourceId {
        SourceId::Vector
    }

    fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let query_vec = match self.embedder.embed_single(query) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(source = "vector", error = %err, "embedding failed, returning empty");
                return Vec::new();
            }
        };

        if query_vec.len() != self.ann.dimension() {
            tracing::debug!(
                source = "vector",
                query_dim = query_vec.len(),
                index_dim = self.ann.dimension(),
                "dimension mismatch between query embedding and stored vectors"
            );
            return Vec::new();
        }

        // Over-fetch when a category filter will prune the candidate set,
        // so filtering doesn't starve the final result count (spec §4.4
        // "Query").
        let effective_k = if self.category.is_some() { limit.saturating_mul(2) } else { limit };

        let (ids, distances) = match self.ann.search(&query_vec, effective_k) {
            Ok(pair) => pair,
            Err(err) => {
                tracing::debug!(source = "vector", error = %err, "ANN search failed, returning empty");
                return Vec::new();
            }
        };
        if ids.is_empty() {
            return Vec::new();
        }

        let distance_by_id: HashMap<i64, f32> = ids.iter().copied().zip(distances.iter().copied()).collect();

        let chunks = match self.metadata_store.get_chunks_by_ids(&ids, self.category.as_deref()) {
            Ok(chunks) => chunks,
            Err(err) => {
                tracing::debug!(source = "vector", error = %err, "chunk metadata lookup failed, returning empty");
                return Vec::new();
            }
        };

        let mut results: Vec<SearchResult> = chunks
            .into_iter()
            .filter_map(|chunk| {
                let distance = *distance_by_id.get(&chunk.chunk_id)? as f64;
                let score = (1.0 - distance).max(0.0);
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

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use codesearch_core::traits::{ChunkRecord, EmbedderBackendKind, StoredModelConfig};
    use std::collections::BTreeMap;

    struct FakeAnn {
        ids: Vec<i64>,
        distances: Vec<f32>,
        dim: usize,
    }

    impl AnnIndex for FakeAnn {
        fn load(&mut self, _path: &std::path::Path) -> Result<()> {
            Ok(())
        }
        fn count(&self) -> usize {
            self.ids.len()
        }
        fn search(&self, _query_vec: &[f32], top_k: usize) -> Result<(Vec<i64>, Vec<f32>)> {
            Ok((self.ids.iter().take(top_k).copied().collect(), self.distances.iter().take(top_k).copied().collect()))
        }
        fn dimension(&self) -> usize {
            self.dim
        }
    }

    #[derive(Default)]
    struct FakeMetadataStore {
        chunks: Vec<ChunkRecord>,
        model_config: Option<StoredModelConfig>,
    }

    impl VectorMetadataStore for FakeMetadataStore {
        fn get_chunks_by_ids(&self, ids: &[i64], _category: Option<&str>) -> Result<Vec<ChunkRecord>> {
            Ok(self.chunks.iter().filter(|c| ids.contains(&c.chunk_id)).cloned().collect())
        }
        fn model_config(&self) -> Result<Option<StoredModelConfig>> {
            Ok(self.model_config.clone())
        }
    }

    struct FakeEmbedderRegistry;

    impl codesearch_core::traits::EmbedderRegistry for FakeEmbedderRegistry {
        fn resolve(&self, backend: EmbedderBackendKind, selector: &str) -> Result<Arc<dyn Embedder>> {
            let dim = match (backend, selector) {
                (EmbedderBackendKind::Fastembed, "fast") => 384,
                (EmbedderBackendKind::Fastembed, "code") => 768,
                (EmbedderBackendKind::Fastembed, "multilingual") => 1024,
                (EmbedderBackendKind::Litellm, _) => 1536,
                _ => anyhow::bail!("no embedder registered for {backend:?}/{selector}"),
            };
            Ok(Arc::new(FakeEmbedder { dim }))
        }
    }

    struct FakeEmbedder {
        dim: usize,
    }

    impl Embedder for FakeEmbedder {
        fn embed_single(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![0.1; self.dim])
        }
        fn embed_to_numpy(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![0.1; self.dim]).collect())
        }
        fn model_name(&self) -> &str {
            "fake"
        }
        fn dimension(&self) -> usize {
            self.dim
        }
        fn backend_kind(&self) -> EmbedderBackendKind {
            EmbedderBackendKind::Fastembed
        }
        fn max_input_tokens(&self) -> usize {
            8192
        }
    }

    fn chunk(id: i64, path: &str) -> ChunkRecord {
        ChunkRecord {
            chunk_id: id,
            file_path: path.to_string(),
            content: "fn example() {}".to_string(),
            metadata: BTreeMap::new(),
            start_line: Some(1),
            end_line: Some(2),
            category: Some("code".to_string()),
        }
    }

    #[test]
    fn converts_cosine_distance_to_clamped_score() {
        let ann = Arc::new(FakeAnn { ids: vec![1, 2], distances: vec![0.2, 1.5], dim: 4 });
        let store = Arc::new(FakeMetadataStore { chunks: vec![chunk(1, "a.rs"), chunk(2, "b.rs")], ..Default::default() });
        let embedder = Arc::new(FakeEmbedder { dim: 4 });
        let adapter = VectorAdapter::new(ann, store, embedder, None);
        let results = adapter.search("query", 10);
        assert_eq!(results.len(), 2);
        let b = results.iter().find(|r| r.path == "b.rs").unwrap();
        assert_eq!(b.score(), 0.0);
    }

    #[test]
    fn dimension_mismatch_returns_empty() {
        let ann = Arc::new(FakeAnn { ids: vec![1], distances: vec![0.1], dim: 8 });
        let store = Arc::new(FakeMetadataStore { chunks: vec![chunk(1, "a.rs")], ..Default::default() });
        let embedder = Arc::new(FakeEmbedder { dim: 4 });
        let adapter = VectorAdapter::new(ann, store, embedder, None);
        assert!(adapter.search("query", 10).is_empty());
    }

    #[test]
    fn fallback_profile_table() {
        assert_eq!(dimension_fallback_profile(384), "fast");
        assert_eq!(dimension_fallback_profile(768), "code");
        assert_eq!(dimension_fallback_profile(1024), "multilingual");
        assert_eq!(dimension_fallback_profile(1536), "text-embedding-3-small");
        assert_eq!(dimension_fallback_profile(3072), "text-embedding-3-large");
        assert_eq!(dimension_fallback_profile(512), "code");
    }

    #[test]
    fn select_embedder_prefers_stored_config_over_dimension() {
        let store = FakeMetadataStore {
            model_config: Some(StoredModelConfig {
                backend: EmbedderBackendKind::Fastembed,
                model_name: "bge-small".to_string(),
                model_profile: "fast".to_string(),
                embedding_dim: 384,
            }),
            ..Default::default()
        };
        // The ANN index itself reports a dimension the stored config
        // disagrees with; the stored config still wins.
        let embedder = select_embedder(&store, 768, &FakeEmbedderRegistry).unwrap();
        assert_eq!(embedder.dimension(), 384);
    }

    #[test]
    fn select_embedder_uses_litellm_model_name_as_selector() {
        let store = FakeMetadataStore {
            model_config: Some(StoredModelConfig {
                backend: EmbedderBackendKind::Litellm,
                model_name: "text-embedding-3-small".to_string(),
                model_profile: String::new(),
                embedding_dim: 1536,
            }),
            ..Default::default()
        };
        let embedder = select_embedder(&store, 1536, &FakeEmbedderRegistry).unwrap();
        assert_eq!(embedder.dimension(), 1536);
    }

    #[test]
    fn select_embedder_falls_back_to_dimension_table_when_config_absent() {
        let store = FakeMetadataStore::default();
        let embedder = select_embedder(&store, 1024, &FakeEmbedderRegistry).unwrap();
        assert_eq!(embedder.dimension(), 1024);
    }

    #[test]
    fn from_registry_builds_an_adapter_with_the_selected_embedder() {
        let ann = Arc::new(FakeAnn { ids: vec![1], distances: vec![0.1], dim: 768 });
        let store = Arc::new(FakeMetadataStore { chunks: vec![chunk(1, "a.rs")], ..Default::default() });
        let adapter = VectorAdapter::from_registry(ann, store, &FakeEmbedderRegistry, None).unwrap();
        let results = adapter.search("query", 10);
        assert_eq!(results.len(), 1);
    }
}
