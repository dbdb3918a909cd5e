//! Integration tests driving `HybridSearch` and `ChainSearch` end to end
//! against in-memory fake collaborators, the way a golden-dataset test
//! drives an engine against fixture-backed storage rather than a real
//! database.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use codesearch_core::traits::{
    FtsHit, GlobalSymbolIndex, IndexStore, IndexStoreFactory, PathMapper, Registry, SubdirLink,
};
use codesearch_core::{IndexHandle, RetrievalConfig, SearchOptions, SourceId, Symbol};

use codesearch_retrieval::backends::BackendAdapter;
use codesearch_retrieval::chain::{CascadeResources, ChainSearch, HybridSearchFactory};
use codesearch_retrieval::hybrid::HybridSearch;

/// One fake per-directory index, holding exact-FTS hits, fuzzy-FTS hits,
/// symbols and a list of subdirectory links to its children.
#[derive(Default, Clone)]
struct FakeDir {
    exact: Vec<FtsHit>,
    fuzzy: Vec<FtsHit>,
    symbols: Vec<(String, Symbol)>,
    subdirs: Vec<SubdirLink>,
}

struct FakeIndexStore(FakeDir);

impl IndexStore for FakeIndexStore {
    fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(false)
    }
    fn search_fts_exact(&self, _query: &str, limit: usize) -> anyhow::Result<Vec<FtsHit>> {
        Ok(self.0.exact.iter().take(limit).cloned().collect())
    }
    fn search_fts_fuzzy(&self, _query: &str, limit: usize) -> anyhow::Result<Vec<FtsHit>> {
        Ok(self.0.fuzzy.iter().take(limit).cloned().collect())
    }
    fn find_symbol(&self, name: &str, _kind: Option<&str>) -> anyhow::Result<Vec<(String, Symbol)>> {
        Ok(self.0.symbols.iter().filter(|(n, _)| n == name).cloned().collect())
    }
    fn subdirectories(&self) -> anyhow::Result<Vec<SubdirLink>> {
        Ok(self.0.subdirs.clone())
    }
    fn has_semantic_chunks(&self) -> anyhow::Result<bool> {
        Ok(false)
    }
}

struct ExactFuzzyAdapter {
    source: SourceId,
    store: Arc<dyn IndexStore>,
}

impl BackendAdapter for ExactFuzzyAdapter {
    fn source_id(&self) -> SourceId {
        self.source
    }
    fn search(&self, query: &str, limit: usize) -> Vec<codesearch_core::SearchResult> {
        let hits = match self.source {
            SourceId::Exact => self.store.search_fts_exact(query, limit),
            SourceId::Fuzzy => self.store.search_fts_fuzzy(query, limit),
            _ => Ok(Vec::new()),
        };
        hits.unwrap_or_default()
            .into_iter()
            .map(|h| codesearch_core::SearchResult::new(h.file_path, h.bm25_score.abs(), h.excerpt))
            .collect()
    }
}

/// Fixture: a small project tree.
///
/// ```text
/// /project              (src/a.rs, docs/b.md)
/// /project/lib          (src/lib/c.rs)
/// ```
fn project_tree() -> HashMap<PathBuf, FakeDir> {
    let mut tree = HashMap::new();
    tree.insert(
        PathBuf::from("/project/index.db"),
        FakeDir {
            exact: vec![fts_hit("src/a.rs", -5.0, "fn widget_create"), fts_hit("docs/b.md", -2.0, "widget_create notes")],
            fuzzy: vec![fts_hit("src/a.rs", -4.0, "fn widget_create")],
            symbols: vec![("widget_create".to_string(), Symbol::new("widget_create", "function", 10, 20))],
            subdirs: vec![SubdirLink { dir_path: "/project/lib".to_string(), index_db_path: "/project/lib/index.db".to_string() }],
        },
    );
    tree.insert(
        PathBuf::from("/project/lib/index.db"),
        FakeDir {
            exact: vec![fts_hit("lib/c.rs", -6.0, "fn widget_destroy")],
            fuzzy: Vec::new(),
            symbols: vec![("widget_destroy".to_string(), Symbol::new("widget_destroy", "function", 1, 5))],
            subdirs: Vec::new(),
        },
    );
    tree
}

fn fts_hit(path: &str, bm25: f64, excerpt: &str) -> FtsHit {
    FtsHit {
        chunk_id: 1,
        file_path: path.to_string(),
        bm25_score: bm25,
        excerpt: excerpt.to_string(),
        content: None,
        symbol: None,
        start_line: Some(1),
        end_line: Some(2),
    }
}

struct TreeRegistry {
    tree: HashMap<PathBuf, FakeDir>,
}

impl Registry for TreeRegistry {
    fn find_nearest_index(&self, start_dir: &Path, _max_depth: u32) -> anyhow::Result<Option<IndexHandle>> {
        let candidate = start_dir.join("index.db");
        if self.tree.contains_key(&candidate) {
            Ok(Some(IndexHandle::new(candidate)))
        } else {
            Ok(None)
        }
    }
    fn find_by_source_path(&self, _source_path: &Path) -> anyhow::Result<Option<IndexHandle>> {
        Ok(None)
    }
    fn root(&self) -> PathBuf {
        PathBuf::from("/project")
    }
}

struct NoopPathMapper;
impl PathMapper for NoopPathMapper {
    fn source_to_index_db(&self, _source_path: &Path) -> anyhow::Result<Option<PathBuf>> {
        Ok(None)
    }
}

struct TreeIndexStoreFactory {
    tree: HashMap<PathBuf, FakeDir>,
}

impl IndexStoreFactory for TreeIndexStoreFactory {
    fn open(&self, handle: &IndexHandle) -> anyhow::Result<Arc<dyn IndexStore>> {
        let dir = self.tree.get(handle.path()).cloned().unwrap_or_default();
        Ok(Arc::new(FakeIndexStore(dir)))
    }
}

struct TreeHybridFactory {
    tree: HashMap<PathBuf, FakeDir>,
}

impl HybridSearchFactory for TreeHybridFactory {
    fn build(&self, handle: &IndexHandle) -> anyhow::Result<HybridSearch> {
        let dir = self.tree.get(handle.path()).cloned().unwrap_or_default();
        let store: Arc<dyn IndexStore> = Arc::new(FakeIndexStore(dir));
        let mut adapters: HashMap<SourceId, Arc<dyn BackendAdapter>> = HashMap::new();
        adapters.insert(SourceId::Exact, Arc::new(ExactFuzzyAdapter { source: SourceId::Exact, store: store.clone() }));
        adapters.insert(SourceId::Fuzzy, Arc::new(ExactFuzzyAdapter { source: SourceId::Fuzzy, store: store.clone() }));
        Ok(HybridSearch::new(store, adapters, RetrievalConfig::default(), None, None))
    }
}

/// `entries` pairs a source file path with the symbol found there, mirroring
/// what `GlobalSymbolIndex::lookup` hands back for a project-wide index.
struct FlatGlobalSymbolIndex {
    entries: Vec<(String, Symbol)>,
}

impl GlobalSymbolIndex for FlatGlobalSymbolIndex {
    fn lookup(&self, name: &str, kind: Option<&str>, limit: usize) -> anyhow::Result<Vec<(String, Symbol)>> {
        Ok(self
            .entries
            .iter()
            .filter(|(_, s)| s.name == name && kind.map(|k| s.kind == k).unwrap_or(true))
            .take(limit)
            .cloned()
            .collect())
    }
}

fn chain_search() -> ChainSearch {
    let tree = project_tree();
    ChainSearch::new(
        Arc::new(TreeRegistry { tree: tree.clone() }),
        Arc::new(NoopPathMapper),
        Arc::new(TreeIndexStoreFactory { tree: tree.clone() }),
        Arc::new(TreeHybridFactory { tree }),
        RetrievalConfig::default(),
        None,
        None,
        None,
        CascadeResources::default(),
    )
}

#[test]
fn hybrid_search_fuses_exact_and_fuzzy_for_a_single_directory() {
    let tree = project_tree();
    let factory = TreeHybridFactory { tree };
    let hybrid = factory.build(&IndexHandle::new("/project/index.db")).unwrap();

    let mut opts = SearchOptions::default();
    opts.enable_fuzzy = true;
    let results = hybrid.search("widget_create", &opts);

    assert!(!results.is_empty());
    // a.rs matches both exact and fuzzy, so it should outrank the exact-only doc hit.
    assert_eq!(results[0].path, "src/a.rs");
    let paths: Vec<_> = results.iter().map(|r| r.path.as_str()).collect();
    assert!(paths.contains(&"docs/b.md"));
}

#[test]
fn chain_search_fans_out_across_the_whole_tree() {
    let chain = chain_search();
    let opts = SearchOptions { enable_fuzzy: true, ..SearchOptions::default() };
    let result = chain.search("widget", Path::new("/project"), &opts);

    assert_eq!(result.stats.dirs_searched, 2);
    let paths: Vec<_> = result.results.iter().map(|r| r.path.as_str()).collect();
    assert!(paths.contains(&"src/a.rs"));
    assert!(paths.contains(&"lib/c.rs"));
}

#[test]
fn chain_search_code_only_drops_non_code_extensions() {
    let chain = chain_search();
    let opts = SearchOptions { enable_fuzzy: true, code_only: true, ..SearchOptions::default() };
    let result = chain.search("widget", Path::new("/project"), &opts);

    assert!(result.results.iter().all(|r| r.path != "docs/b.md"));
}

#[test]
fn chain_search_depth_zero_stays_in_the_start_directory() {
    let chain = chain_search();
    let opts = SearchOptions { depth: 0, enable_fuzzy: true, ..SearchOptions::default() };
    let result = chain.search("widget", Path::new("/project"), &opts);

    assert_eq!(result.stats.dirs_searched, 1);
    assert!(result.results.iter().all(|r| !r.path.starts_with("lib/")));
}

#[test]
fn chain_search_returns_empty_for_an_unindexed_directory() {
    let chain = chain_search();
    let result = chain.search("widget", Path::new("/nowhere"), &SearchOptions::default());
    assert!(result.results.is_empty());
    assert_eq!(result.stats.dirs_searched, 0);
}

#[test]
fn chain_search_symbols_falls_back_to_per_directory_scan_without_a_global_index() {
    let chain = chain_search();
    let opts = SearchOptions::default();
    let symbols = chain.search_symbols("widget_destroy", Path::new("/project"), None, &opts);
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "widget_destroy");
}

#[test]
fn chain_search_symbols_prefers_the_global_index_when_enabled() {
    let tree = project_tree();
    let mut config = RetrievalConfig::default();
    config.global_symbol_index_enabled = true;
    let global_index = FlatGlobalSymbolIndex {
        entries: vec![("/project/src/a.rs".to_string(), Symbol::new("widget_create", "function", 10, 20))],
    };

    let chain = ChainSearch::new(
        Arc::new(TreeRegistry { tree: tree.clone() }),
        Arc::new(NoopPathMapper),
        Arc::new(TreeIndexStoreFactory { tree: tree.clone() }),
        Arc::new(TreeHybridFactory { tree }),
        config,
        None,
        Some(Arc::new(global_index)),
        None,
        CascadeResources::default(),
    );

    let symbols = chain.search_symbols("widget_create", Path::new("/project"), None, &SearchOptions::default());
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "widget_create");
}

#[test]
fn cascade_search_falls_back_to_hybrid_fan_out_without_binary_collaborators() {
    let chain = chain_search();
    let opts = SearchOptions { enable_fuzzy: true, ..SearchOptions::default() };
    let result = chain.cascade_search("widget", Path::new("/project"), 10, 10, &opts, None);

    let paths: Vec<_> = result.results.iter().map(|r| r.path.as_str()).collect();
    assert!(paths.contains(&"src/a.rs"));
    assert!(paths.contains(&"lib/c.rs"));
}
