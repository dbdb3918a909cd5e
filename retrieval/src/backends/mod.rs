//! Backend adapters: uniform thin wrappers over five retrieval backends
//! (spec §4.3 "Backend Adapters"). Each adapter absorbs its own errors —
//! nothing here ever returns `Err` into the orchestrator; a failure becomes
//! a `tracing::debug!` and an empty list (spec §7.2/§7.3).

mod binary;
mod exact;
mod fuzzy;
mod splade;
mod vector;

pub use binary::{hamming_to_score, BinaryAdapter};
pub use exact::ExactAdapter;
pub use fuzzy::FuzzyAdapter;
pub use splade::SpladeAdapter;
pub use vector::{dimension_fallback_profile, select_embedder, VectorAdapter};

use codesearch_core::{SearchResult, SourceId};

/// Common contract every backend adapter implements (spec §9 "Multi-backend
/// adapters in a static type system"). Adapters are registered in a table
/// keyed by [`SourceId`] rather than discovered via runtime subclassing.
pub trait BackendAdapter: Send + Sync {
    fn source_id(&self) -> SourceId;
    fn search(&self, query: &str, limit: usize) -> Vec<SearchResult>;

    /// Whether this backend is usable right now (spec §4.7 "SPLADE
    /// available"). Always `true` except for [`SpladeAdapter`], which probes
    /// its table/dependency at call time.
    fn is_available(&self) -> bool {
        true
    }
}
