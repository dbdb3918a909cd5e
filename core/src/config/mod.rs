//! Construction-time configuration surface (spec §6 "Configuration").
//!
//! `RetrievalConfig` is deserialized once from TOML at process bootstrap and
//! handed to `HybridSearch`/`ChainSearch` by construction; nothing in the
//! retrieval path re-reads the environment or a config file mid-query
//! (spec §9 "Singletons and global state").

mod embedding;
mod reranker;
mod retrieval_config;

pub use embedding::{EmbeddingBackend, EmbeddingStrategy};
pub use reranker::{FusionMethod, RerankerBackend};
pub use retrieval_config::RetrievalConfig;
