//! Error taxonomy (spec §7). Only [`ConfigError`] (construction-time) and
//! [`RerankError`] (401/403 from a remote reranker) are allowed to escape
//! the retrieval path to a caller — every other fault class is absorbed at
//! the point of occurrence and downgraded to a log line plus, for
//! chain-level operations, a `SearchStats.errors` entry.

mod config_error;
mod rerank_error;

pub use config_error::ConfigError;
pub use rerank_error::RerankError;
