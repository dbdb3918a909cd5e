use std::path::{Path, PathBuf};

/// Opaque handle to a per-directory index database (spec §3 `IndexHandle`).
///
/// The handle itself carries nothing but the path — the actual FTS/symbol/
/// subdirectory/chunk access it "yields iterators to" is reached through the
/// `IndexStore` collaborator trait (spec §6), which the engine holds
/// separately and calls with this handle. Keeping the handle inert (no
/// trait object inside it) is what lets it be cheap to construct per call
/// and still be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexHandle {
    path: PathBuf,
}

impl IndexHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent directory of the index database file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }
}

/// Handle to a centralized, project-root-level store: a single memory-mapped
/// binary vector file, a single HNSW file, a chunk-metadata table, and
/// optionally a SPLADE inverted index (spec §3 `CentralizedIndexHandle`).
/// Discovered by walking upward from a per-directory `IndexHandle`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CentralizedIndexHandle {
    root: PathBuf,
}

impl CentralizedIndexHandle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
