/// Query/document pair submitted to a cross-encoder for relevance scoring
/// (spec §4.6 "Reranking").
#[derive(Debug, Clone)]
pub struct RerankPair {
    pub query: String,
    pub document: String,
}

/// Cross-encoder reranker, local (ONNX) or remote (HTTP provider) (spec §6
/// `CrossEncoderReranker`). Implementations own their own batching and retry
/// behavior; this trait only exposes the scoring contract.
pub trait CrossEncoderReranker: Send + Sync {
    /// Returns one relevance score per input pair, same order, same length.
    fn score_pairs(&self, pairs: &[RerankPair]) -> anyhow::Result<Vec<f32>>;

    fn max_input_tokens(&self) -> usize;
}
