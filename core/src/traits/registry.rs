use std::path::{Path, PathBuf};

use crate::models::IndexHandle;

/// Discovers per-directory and centralized index locations (spec §4.4
/// "Centralized vs. distributed discovery", §6 `Registry`).
pub trait Registry: Send + Sync {
    /// Walks upward from `start_dir`, bounded by depth, looking for the
    /// nearest ancestor directory that owns an index.
    fn find_nearest_index(&self, start_dir: &Path, max_depth: u32) -> anyhow::Result<Option<IndexHandle>>;

    /// Resolves the index that indexed `source_path`, if any.
    fn find_by_source_path(&self, source_path: &Path) -> anyhow::Result<Option<IndexHandle>>;

    fn root(&self) -> PathBuf;
}
