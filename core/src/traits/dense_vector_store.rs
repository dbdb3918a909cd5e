/// Raw dense embedding fetch by chunk id, used only by the binary cascade's
/// second stage (spec §4.8 "binary | ... | dense cosine rerank (fetch dense
/// vectors by chunk id, batched cosine matrix product)"). Distinct from
/// `VectorMetadataStore`, which returns chunk text/metadata, not vectors.
pub trait DenseVectorStore: Send + Sync {
    fn get_vectors_by_ids(&self, ids: &[i64]) -> anyhow::Result<Vec<(i64, Vec<f32>)>>;
}
