use serde::{Deserialize, Serialize};

/// Cross-encoder reranker provider family (spec §6 "Configuration" →
/// Reranker). `Legacy` denotes the pre-cross-encoder embedding-cosine
/// reranker (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RerankerBackend {
    Fastembed,
    Onnx,
    Api,
    Legacy,
}

impl Default for RerankerBackend {
    fn default() -> Self {
        RerankerBackend::Legacy
    }
}

/// Fusion kernel selector (spec §6 "Configuration" → Hybrid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionMethod {
    Rrf,
    Simple,
}

impl Default for FusionMethod {
    fn default() -> Self {
        FusionMethod::Rrf
    }
}
