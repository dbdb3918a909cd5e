/// Memory-mapped packed binary (256-bit Hamming) vector store (spec §4.5,
/// §6 `BinarySearcher`). The centralized mmap'd file takes precedence over
/// any legacy per-directory binary index when both are present.
pub trait BinarySearcher: Send + Sync {
    /// Accepts either a float query vector (to be packed internally) or an
    /// already-packed 32-byte code.
    fn search(&self, query_vec: &[f32], top_k: usize) -> anyhow::Result<(Vec<i64>, Vec<u32>)>;

    fn search_packed(&self, packed_query: &[u8; 32], top_k: usize) -> anyhow::Result<(Vec<i64>, Vec<u32>)>;

    fn vector_count(&self) -> usize;
}
