/// Approximate-nearest-neighbor dense vector index (spec §6 `ANNIndex`,
/// GLOSSARY "HNSW"). Distance is cosine distance, `count()` is the number of
/// indexed vectors.
pub trait AnnIndex: Send + Sync {
    fn load(&mut self, path: &std::path::Path) -> anyhow::Result<()>;
    fn count(&self) -> usize;
    /// Returns `(chunk_ids, cosine_distances)`, both of length `<= top_k`,
    /// ordered by ascending distance.
    fn search(&self, query_vec: &[f32], top_k: usize) -> anyhow::Result<(Vec<i64>, Vec<f32>)>;
    fn dimension(&self) -> usize;
}
