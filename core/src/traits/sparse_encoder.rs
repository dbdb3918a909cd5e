use super::splade_index::SparseVector;

/// Produces the sparse query vector the SPLADE backend searches with (spec
/// §4.3 "SPLADE": "Query is encoded to a sparse vector by the external
/// encoder"). Out of scope to implement, like [`super::Embedder`] — consumed
/// only through this trait.
pub trait SparseEncoder: Send + Sync {
    fn encode_query(&self, text: &str) -> anyhow::Result<SparseVector>;
}
