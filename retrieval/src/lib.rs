//! # codesearch-retrieval
//!
//! Hybrid code-search retrieval: per-index fusion of exact/fuzzy FTS, dense
//! vector, SPLADE and binary-Hamming backends (`hybrid`), whole-project
//! fan-out and two-stage cascade ranking across a directory-index tree
//! (`chain`), query intent classification (`intent`), the pure fusion
//! kernel (`fusion`), backend adapters (`backends`) and rerank adapters
//! (`rerank`).

pub mod backends;
pub mod chain;
pub mod fusion;
pub mod hybrid;
pub mod intent;
pub mod rerank;

pub use chain::{CascadeResources, ChainSearch, HybridSearchFactory};
pub use hybrid::HybridSearch;
pub use intent::classify;
