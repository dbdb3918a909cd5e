/// Which family of embedding backend produced a stored vector (spec §4.4
/// "Model-config pinning").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderBackendKind {
    Fastembed,
    Litellm,
}

/// Embedding provider (spec §6 `Embedder`). Out of scope to implement —
/// consumed only through this trait.
pub trait Embedder: Send + Sync {
    fn embed_single(&self, text: &str) -> anyhow::Result<Vec<f32>>;
    fn embed_to_numpy(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;

    fn model_name(&self) -> &str;
    fn dimension(&self) -> usize;
    fn backend_kind(&self) -> EmbedderBackendKind;
    fn max_input_tokens(&self) -> usize;
}
