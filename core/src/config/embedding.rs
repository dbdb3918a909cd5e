use serde::{Deserialize, Serialize};

/// Embedding provider family (spec §6 "Configuration" → Embedding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingBackend {
    Fastembed,
    Litellm,
}

impl Default for EmbeddingBackend {
    fn default() -> Self {
        EmbeddingBackend::Fastembed
    }
}

/// Load-balancing policy across `embedding_endpoints` when pooling is
/// enabled (spec §6 "Configuration" → Embedding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingStrategy {
    RoundRobin,
    LatencyAware,
    WeightedRandom,
}

impl Default for EmbeddingStrategy {
    fn default() -> Self {
        EmbeddingStrategy::RoundRobin
    }
}
