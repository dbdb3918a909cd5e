use codesearch_core::models::IndexHandle;

use crate::hybrid::HybridSearch;

/// Builds a ready [`HybridSearch`] for a directory the chain engine has
/// just discovered. Lives in this crate rather than `codesearch-core`
/// because it composes `IndexStoreFactory` with whatever centralized or
/// per-directory backend adapters the deployment has wired up — exactly the
/// kind of assembly `core`'s traits deliberately stay silent about (spec §6
/// "Collaborator interfaces").
pub trait HybridSearchFactory: Send + Sync {
    fn build(&self, handle: &IndexHandle) -> anyhow::Result<HybridSearch>;
}
