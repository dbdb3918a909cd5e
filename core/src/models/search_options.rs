use serde::{Deserialize, Serialize};

use super::fusion_weights::FusionWeights;
use super::source_id::SourceId;

/// Cascade strategy selector (spec §4.8 "Cascade search"). The dispatcher's
/// accepted set is authoritative per `SPEC_FULL.md` §1.3 — it is a strict
/// superset of what older config validation lists allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeStrategy {
    Binary,
    Hybrid,
    BinaryRerank,
    DenseRerank,
}

impl Default for CascadeStrategy {
    fn default() -> Self {
        CascadeStrategy::Binary
    }
}

/// Per-call search configuration (spec §3 `SearchOptions`).
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// -1 = unlimited, 0 = current directory only.
    pub depth: i32,
    pub max_workers: usize,
    pub limit_per_dir: usize,
    pub total_limit: usize,
    pub offset: usize,
    pub include_symbols: bool,
    pub files_only: bool,
    pub code_only: bool,
    pub exclude_extensions: Vec<String>,
    pub enable_fuzzy: bool,
    pub enable_vector: bool,
    pub pure_vector: bool,
    pub enable_splade: bool,
    pub enable_cascade: bool,
    pub hybrid_weights: Option<FusionWeights>,
    pub group_results: bool,
    pub grouping_threshold: f64,
    pub enabled_backends: Option<Vec<SourceId>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: -1,
            max_workers: 8,
            limit_per_dir: 10,
            total_limit: 100,
            offset: 0,
            include_symbols: false,
            files_only: false,
            code_only: false,
            exclude_extensions: Vec::new(),
            enable_fuzzy: true,
            enable_vector: false,
            pure_vector: false,
            enable_splade: false,
            enable_cascade: false,
            hybrid_weights: None,
            group_results: false,
            grouping_threshold: 0.01,
            enabled_backends: None,
        }
    }
}
