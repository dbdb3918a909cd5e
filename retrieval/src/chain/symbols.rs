use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;

use codesearch_core::models::{IndexHandle, Symbol};
use codesearch_core::traits::{GlobalSymbolIndex, IndexStoreFactory};

/// Fast path for chain-level symbol search: a single keyed lookup against a
/// project-wide index, then depth filtering and dedup/sort locally (spec
/// §4.8 "Symbol chain search").
pub fn symbol_search_fast(
    index: &dyn GlobalSymbolIndex,
    start_dir: &Path,
    name: &str,
    kind: Option<&str>,
    depth: i32,
    total_limit: usize,
) -> anyhow::Result<Vec<Symbol>> {
    let candidates = index.lookup(name, kind, total_limit.saturating_mul(10))?;

    let mut filtered: Vec<(String, Symbol)> = candidates
        .into_iter()
        .filter(|(path, _)| match relative_depth(start_dir, path) {
            Some(rel) => depth < 0 || rel as i32 <= depth,
            None => false,
        })
        .collect();

    dedup_and_sort(&mut filtered);
    Ok(filtered.into_iter().map(|(_, symbol)| symbol).take(total_limit).collect())
}

/// Fallback when no global symbol index is available or enabled: fan out
/// `IndexStore::find_symbol` over every discovered directory in parallel.
pub fn symbol_search_fallback(
    factory: &dyn IndexStoreFactory,
    descendants: &[IndexHandle],
    name: &str,
    kind: Option<&str>,
    workers: usize,
    total_limit: usize,
) -> Vec<Symbol> {
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers.max(1)).build() {
        Ok(pool) => pool,
        Err(err) => {
            tracing::debug!(error = %err, "failed to build symbol search pool");
            return Vec::new();
        }
    };

    let mut hits: Vec<(String, Symbol)> = pool.install(|| {
        descendants
            .par_iter()
            .flat_map(|handle| match factory.open(handle).and_then(|store| store.find_symbol(name, kind)) {
                Ok(hits) => hits,
                Err(err) => {
                    tracing::debug!(dir = %handle.dir().display(), error = %err, "per-directory symbol search failed");
                    Vec::new()
                }
            })
            .collect()
    });

    dedup_and_sort(&mut hits);
    hits.into_iter().map(|(_, symbol)| symbol).take(total_limit).collect()
}

/// `None` when `candidate`'s directory isn't under `start_dir` at all —
/// including a Windows-style cross-drive mismatch, where `strip_prefix`
/// fails rather than producing a nonsensical depth.
fn relative_depth(start_dir: &Path, candidate: &str) -> Option<usize> {
    let candidate_path = Path::new(candidate);
    let candidate_dir = candidate_path.parent().unwrap_or(candidate_path);
    candidate_dir.strip_prefix(start_dir).ok().map(|rel| rel.components().count())
}

fn dedup_and_sort(items: &mut Vec<(String, Symbol)>) {
    let mut seen = HashSet::new();
    items.retain(|(_, symbol)| seen.insert((symbol.name.clone(), symbol.kind.clone(), symbol.start_line, symbol.end_line)));
    items.sort_by(|a, b| a.1.name.cmp(&b.1.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeGlobalIndex {
        hits: Vec<(String, Symbol)>,
    }

    impl GlobalSymbolIndex for FakeGlobalIndex {
        fn lookup(&self, _name: &str, _kind: Option<&str>, _limit: usize) -> anyhow::Result<Vec<(String, Symbol)>> {
            Ok(self.hits.clone())
        }
    }

    #[test]
    fn depth_filter_excludes_deeper_directories() {
        let index = FakeGlobalIndex {
            hits: vec![
                ("/project/a/file.rs".into(), Symbol::new("foo", "function", 1, 2)),
                ("/project/a/b/file.rs".into(), Symbol::new("bar", "function", 1, 2)),
            ],
        };
        let found = symbol_search_fast(&index, Path::new("/project/a"), "foo", None, 0, 10).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "foo");
    }

    #[test]
    fn cross_root_candidate_is_excluded_not_panicking() {
        let index = FakeGlobalIndex { hits: vec![("/other/root/file.rs".into(), Symbol::new("foo", "function", 1, 2))] };
        let found = symbol_search_fast(&index, Path::new("/project/a"), "foo", None, -1, 10).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn duplicates_by_name_kind_range_collapse() {
        let index = FakeGlobalIndex {
            hits: vec![
                ("/project/a/file.rs".into(), Symbol::new("foo", "function", 1, 2)),
                ("/project/a/other.rs".into(), Symbol::new("foo", "function", 1, 2)),
            ],
        };
        let found = symbol_search_fast(&index, Path::new("/project/a"), "foo", None, -1, 10).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn results_sorted_by_name() {
        let index = FakeGlobalIndex {
            hits: vec![
                ("/project/a/file.rs".into(), Symbol::new("zeta", "function", 1, 2)),
                ("/project/a/file.rs".into(), Symbol::new("alpha", "function", 3, 4)),
            ],
        };
        let found = symbol_search_fast(&index, Path::new("/project/a"), "*", None, -1, 10).unwrap();
        assert_eq!(found[0].name, "alpha");
        assert_eq!(found[1].name, "zeta");
    }
}
