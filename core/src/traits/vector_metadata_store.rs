use std::collections::BTreeMap;

use super::embedder::EmbedderBackendKind;
use crate::models::MetadataValue;

/// Chunk metadata as stored centrally (spec §6 `VectorMetadataStore`).
#[derive(Debug, Clone)]
pub struct ChunkRecord {
    pub chunk_id: i64,
    pub file_path: String,
    pub content: String,
    pub metadata: BTreeMap<String, MetadataValue>,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
    pub category: Option<String>,
}

/// Embedding-model identifier persisted alongside an index at build time
/// (spec §4.4 "Model-config pinning"): "backend kind + model name +
/// dimension". `model_profile` is the `fastembed` profile name (`"code"`,
/// `"fast"`, ...); `model_name` is the concrete model/deployment id, used
/// directly when `backend` is `Litellm`.
#[derive(Debug, Clone)]
pub struct StoredModelConfig {
    pub backend: EmbedderBackendKind,
    pub model_name: String,
    pub model_profile: String,
    pub embedding_dim: usize,
}

/// Centralized chunk-metadata table, keyed by a globally unique chunk id
/// (spec §4.4 "Centralized" deployment shape).
pub trait VectorMetadataStore: Send + Sync {
    fn get_chunks_by_ids(
        &self,
        ids: &[i64],
        category: Option<&str>,
    ) -> anyhow::Result<Vec<ChunkRecord>>;

    /// The model config this index was built with, if any was persisted
    /// (spec §4.4 "Model-config pinning"). `None` tells the caller to fall
    /// back to dimension-based detection instead.
    fn model_config(&self) -> anyhow::Result<Option<StoredModelConfig>> {
        Ok(None)
    }
}
