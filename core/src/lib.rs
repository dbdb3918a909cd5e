//! # codesearch-core
//!
//! Foundation crate for the hybrid code-search retrieval engine.
//! Defines the data model, the collaborator trait interfaces, the error
//! taxonomy and the configuration surface. Every other crate in the
//! workspace depends on this one; this crate depends on nothing but serde,
//! toml, thiserror and anyhow (the last for the `Result` type the
//! collaborator traits return).

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::RetrievalConfig;
pub use errors::{ConfigError, RerankError};
pub use models::{
    BackendResults, ChainSearchResult, FusionWeights, IndexHandle, QueryIntent, SearchOptions,
    SearchResult, SearchStats, SourceId, Symbol,
};
