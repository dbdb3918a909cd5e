use std::sync::Arc;

use super::index_store::IndexStore;
use crate::models::IndexHandle;

/// Opens the per-directory store a [`super::Registry`] or subdirectory-link
/// lookup only hands back a path for (spec §3 `IndexHandle`: "Created on
/// demand, closed after use"). The chain engine never opens a storage file
/// itself — storage is out of scope — it only asks this factory for a
/// ready `IndexStore` each time it needs to descend into a new directory.
pub trait IndexStoreFactory: Send + Sync {
    fn open(&self, handle: &IndexHandle) -> anyhow::Result<Arc<dyn IndexStore>>;
}
