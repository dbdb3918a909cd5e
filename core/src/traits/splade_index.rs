use super::vector_metadata_store::ChunkRecord;

/// Sparse query/document vector: dimension index -> weight (spec §4.3
/// "SPLADE", GLOSSARY).
pub type SparseVector = std::collections::HashMap<u32, f32>;

#[derive(Debug, Clone)]
pub struct SpladeChunk {
    pub chunk_id: i64,
    pub score: f32,
}

/// Inverted sparse index over SPLADE-encoded chunks (spec §6 `SpladeIndex`).
pub trait SpladeIndex: Send + Sync {
    fn has_index(&self) -> bool;

    /// Dot product between `sparse_query` and each indexed document vector,
    /// computed by iterating posting lists for the query's active
    /// dimensions (spec §4.3).
    fn search(
        &self,
        sparse_query: &SparseVector,
        limit: usize,
        min_score: f32,
    ) -> anyhow::Result<Vec<SpladeChunk>>;

    fn get_chunks_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<ChunkRecord>>;
}
