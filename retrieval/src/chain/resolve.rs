use std::collections::HashSet;
use std::path::{Path, PathBuf};

use codesearch_core::models::IndexHandle;
use codesearch_core::traits::{IndexStore, IndexStoreFactory, PathMapper, Registry};

/// Resolves the index database a chain search should start from (spec §4.8
/// "Resolve start index"). A `PathMapper` hit on the exact path wins; a
/// registry directory lookup is the fallback, then the nearest ancestor.
pub fn resolve_start_index(
    registry: &dyn Registry,
    path_mapper: &dyn PathMapper,
    start: &Path,
    max_ancestor_depth: u32,
) -> anyhow::Result<Option<IndexHandle>> {
    if let Some(db_path) = path_mapper.source_to_index_db(start)? {
        return Ok(Some(IndexHandle::new(db_path)));
    }
    if let Some(handle) = registry.find_by_source_path(start)? {
        return Ok(Some(handle));
    }
    registry.find_nearest_index(start, max_ancestor_depth)
}

/// Depth-first walk of the subdirectory-link table starting at `start`
/// (spec §4.8 "Collect descendants"). `depth` is `-1` for unlimited, `0` for
/// the start directory only. Cycles are broken by a visited set keyed on
/// the canonicalized directory path.
pub fn collect_descendants(
    factory: &dyn IndexStoreFactory,
    start: &IndexHandle,
    depth: i32,
) -> Vec<IndexHandle> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(factory, start, 0, depth, &mut visited, &mut order);
    order
}

fn visit(
    factory: &dyn IndexStoreFactory,
    handle: &IndexHandle,
    level: i32,
    depth: i32,
    visited: &mut HashSet<PathBuf>,
    order: &mut Vec<IndexHandle>,
) {
    if !visited.insert(canonical_key(handle.dir())) {
        return;
    }
    order.push(handle.clone());

    if depth >= 0 && level >= depth {
        return;
    }

    let store: std::sync::Arc<dyn IndexStore> = match factory.open(handle) {
        Ok(store) => store,
        Err(err) => {
            tracing::debug!(dir = %handle.dir().display(), error = %err, "failed to open index while collecting descendants");
            return;
        }
    };

    let links = match store.subdirectories() {
        Ok(links) => links,
        Err(err) => {
            tracing::debug!(dir = %handle.dir().display(), error = %err, "failed to read subdirectory links");
            return;
        }
    };

    for link in links {
        let child = IndexHandle::new(link.index_db_path);
        visit(factory, &child, level + 1, depth, visited, order);
    }
}

fn canonical_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use codesearch_core::traits::{FtsHit, SubdirLink};

    use super::*;

    struct FakeRegistry {
        by_source: Option<IndexHandle>,
        nearest: Option<IndexHandle>,
    }

    impl Registry for FakeRegistry {
        fn find_nearest_index(&self, _start_dir: &Path, _max_depth: u32) -> anyhow::Result<Option<IndexHandle>> {
            Ok(self.nearest.clone())
        }
        fn find_by_source_path(&self, _source_path: &Path) -> anyhow::Result<Option<IndexHandle>> {
            Ok(self.by_source.clone())
        }
        fn root(&self) -> PathBuf {
            PathBuf::from("/project")
        }
    }

    struct FakePathMapper {
        hit: Option<PathBuf>,
    }

    impl PathMapper for FakePathMapper {
        fn source_to_index_db(&self, _source_path: &Path) -> anyhow::Result<Option<PathBuf>> {
            Ok(self.hit.clone())
        }
    }

    struct FakeStore {
        subdirs: Vec<SubdirLink>,
    }

    impl IndexStore for FakeStore {
        fn is_empty(&self) -> anyhow::Result<bool> {
            Ok(false)
        }
        fn search_fts_exact(&self, _query: &str, _limit: usize) -> anyhow::Result<Vec<FtsHit>> {
            Ok(Vec::new())
        }
        fn search_fts_fuzzy(&self, _query: &str, _limit: usize) -> anyhow::Result<Vec<FtsHit>> {
            Ok(Vec::new())
        }
        fn find_symbol(&self, _name: &str, _kind: Option<&str>) -> anyhow::Result<Vec<(String, codesearch_core::models::Symbol)>> {
            Ok(Vec::new())
        }
        fn subdirectories(&self) -> anyhow::Result<Vec<SubdirLink>> {
            Ok(self.subdirs.clone())
        }
        fn has_semantic_chunks(&self) -> anyhow::Result<bool> {
            Ok(false)
        }
    }

    struct FakeFactory {
        stores: HashMap<PathBuf, Vec<SubdirLink>>,
    }

    impl IndexStoreFactory for FakeFactory {
        fn open(&self, handle: &IndexHandle) -> anyhow::Result<Arc<dyn IndexStore>> {
            let subdirs = self.stores.get(handle.path()).cloned().unwrap_or_default();
            Ok(Arc::new(FakeStore { subdirs }))
        }
    }

    #[test]
    fn path_mapper_hit_wins_over_registry() {
        let registry = FakeRegistry { by_source: None, nearest: None };
        let mapper = FakePathMapper { hit: Some(PathBuf::from("/project/a/index.db")) };
        let resolved = resolve_start_index(&registry, &mapper, Path::new("/project/a/file.rs"), 16).unwrap();
        assert_eq!(resolved.unwrap().path(), Path::new("/project/a/index.db"));
    }

    #[test]
    fn falls_back_to_registry_by_source_path() {
        let registry = FakeRegistry {
            by_source: Some(IndexHandle::new("/project/a/index.db")),
            nearest: None,
        };
        let mapper = FakePathMapper { hit: None };
        let resolved = resolve_start_index(&registry, &mapper, Path::new("/project/a"), 16).unwrap();
        assert_eq!(resolved.unwrap().path(), Path::new("/project/a/index.db"));
    }

    #[test]
    fn falls_back_to_nearest_ancestor() {
        let registry = FakeRegistry { by_source: None, nearest: Some(IndexHandle::new("/project/index.db")) };
        let mapper = FakePathMapper { hit: None };
        let resolved = resolve_start_index(&registry, &mapper, Path::new("/project/a/b"), 16).unwrap();
        assert_eq!(resolved.unwrap().path(), Path::new("/project/index.db"));
    }

    #[test]
    fn depth_zero_returns_only_start() {
        let start = IndexHandle::new("/project/index.db");
        let factory = FakeFactory {
            stores: HashMap::from([(
                PathBuf::from("/project/index.db"),
                vec![SubdirLink { dir_path: "/project/a".into(), index_db_path: "/project/a/index.db".into() }],
            )]),
        };
        let descendants = collect_descendants(&factory, &start, 0);
        assert_eq!(descendants.len(), 1);
    }

    #[test]
    fn unlimited_depth_walks_full_tree() {
        let start = IndexHandle::new("/project/index.db");
        let factory = FakeFactory {
            stores: HashMap::from([
                (
                    PathBuf::from("/project/index.db"),
                    vec![SubdirLink { dir_path: "/project/a".into(), index_db_path: "/project/a/index.db".into() }],
                ),
                (
                    PathBuf::from("/project/a/index.db"),
                    vec![SubdirLink { dir_path: "/project/a/b".into(), index_db_path: "/project/a/b/index.db".into() }],
                ),
            ]),
        };
        let descendants = collect_descendants(&factory, &start, -1);
        assert_eq!(descendants.len(), 3);
    }

    #[test]
    fn cycle_is_broken_by_visited_set() {
        let start = IndexHandle::new("/project/index.db");
        let factory = FakeFactory {
            stores: HashMap::from([(
                PathBuf::from("/project/index.db"),
                vec![SubdirLink { dir_path: "/project".into(), index_db_path: "/project/index.db".into() }],
            )]),
        };
        let descendants = collect_descendants(&factory, &start, -1);
        assert_eq!(descendants.len(), 1);
    }
}
