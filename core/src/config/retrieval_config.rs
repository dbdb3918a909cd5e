use serde::{Deserialize, Serialize};

use super::embedding::{EmbeddingBackend, EmbeddingStrategy};
use super::reranker::{FusionMethod, RerankerBackend};
use crate::errors::ConfigError;
use crate::models::CascadeStrategy;

/// Single construction-time configuration surface, deserialized from TOML
/// (spec §6 "Configuration", enumerated field-by-field).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    // Embedding
    pub embedding_backend: EmbeddingBackend,
    pub embedding_model: String,
    pub embedding_use_gpu: bool,
    pub embedding_endpoints: Vec<String>,
    pub embedding_pool_enabled: bool,
    pub embedding_strategy: EmbeddingStrategy,
    pub embedding_cooldown: u64,

    // Reranker
    pub enable_reranking: bool,
    pub enable_cross_encoder_rerank: bool,
    pub reranker_backend: RerankerBackend,
    pub reranker_model: String,
    pub reranker_top_k: usize,
    pub reranker_max_input_tokens: usize,

    // Hybrid
    pub fusion_method: FusionMethod,
    pub rrf_k: f64,
    pub enable_category_filter: bool,
    pub enable_splade: bool,
    pub use_fts_fallback: bool,
    pub symbol_boost_factor: f64,

    // Cascade
    pub cascade_strategy: CascadeStrategy,
    pub cascade_coarse_k: usize,
    pub cascade_fine_k: usize,

    // Search
    pub global_symbol_index_enabled: bool,
    pub enable_graph_expansion: bool,
    pub graph_expansion_depth: u32,
    pub api_max_workers: usize,
    pub api_batch_size: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            embedding_backend: EmbeddingBackend::default(),
            embedding_model: "code".to_string(),
            embedding_use_gpu: false,
            embedding_endpoints: Vec::new(),
            embedding_pool_enabled: false,
            embedding_strategy: EmbeddingStrategy::default(),
            embedding_cooldown: 30,

            enable_reranking: false,
            enable_cross_encoder_rerank: false,
            reranker_backend: RerankerBackend::default(),
            reranker_model: "default".to_string(),
            reranker_top_k: 50,
            reranker_max_input_tokens: 8192,

            fusion_method: FusionMethod::default(),
            rrf_k: 60.0,
            enable_category_filter: true,
            enable_splade: false,
            use_fts_fallback: false,
            symbol_boost_factor: 1.5,

            cascade_strategy: CascadeStrategy::default(),
            cascade_coarse_k: 100,
            cascade_fine_k: 20,

            global_symbol_index_enabled: false,
            enable_graph_expansion: false,
            graph_expansion_depth: 1,
            api_max_workers: 8,
            api_batch_size: 32,
        }
    }
}

impl RetrievalConfig {
    /// Parses a config from TOML, then validates numeric fields that the
    /// type system alone can't rule out (spec §7.1 "Configuration fault").
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rrf_k <= 0.0 || !self.rrf_k.is_finite() {
            return Err(ConfigError::InvalidField {
                field: "rrf_k",
                reason: "must be a positive finite number".to_string(),
            });
        }
        if self.symbol_boost_factor < 0.0 || !self.symbol_boost_factor.is_finite() {
            return Err(ConfigError::InvalidField {
                field: "symbol_boost_factor",
                reason: "must be a non-negative finite number".to_string(),
            });
        }
        if self.api_max_workers == 0 {
            return Err(ConfigError::InvalidField {
                field: "api_max_workers",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.cascade_coarse_k == 0 {
            return Err(ConfigError::InvalidField {
                field: "cascade_coarse_k",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
