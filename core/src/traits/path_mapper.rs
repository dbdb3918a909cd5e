use std::path::{Path, PathBuf};

/// Maps a source file back to the index database that indexed it (spec §6
/// `PathMapper`). Distinct from `Registry`: a registry finds an index for a
/// *directory*, a path mapper finds the index for a specific *file*.
pub trait PathMapper: Send + Sync {
    fn source_to_index_db(&self, source_path: &Path) -> anyhow::Result<Option<PathBuf>>;
}
