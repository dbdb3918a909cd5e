use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use codesearch_core::models::CascadeStrategy;
use codesearch_core::traits::{Embedder, GlobalSymbolIndex, GraphExpander, IndexStoreFactory, PathMapper, Registry};
use codesearch_core::{ChainSearchResult, IndexHandle, RetrievalConfig, SearchOptions, SearchResult, SearchStats, Symbol};

use super::cascade::{run_cascade, CascadeResources};
use super::dispatch::{dispatch_directories, effective_workers};
use super::factory::HybridSearchFactory;
use super::merge::{filter_extensions, group_near_duplicates, merge_and_rank};
use super::resolve::{collect_descendants, resolve_start_index};
use super::symbols::{symbol_search_fallback, symbol_search_fast};

/// Bound on how far `resolve_start_index` walks upward looking for the
/// nearest ancestor index. Deep enough for any real project tree without
/// risking an unbounded walk past a misconfigured registry root.
const MAX_ANCESTOR_DEPTH: u32 = 64;

/// Whole-project search orchestrator (spec §4.8 "Chain Search Engine").
/// Holds the long-lived collaborators for one project: a `Registry` and
/// `PathMapper` to resolve where to start, an `IndexStoreFactory` and
/// `HybridSearchFactory` to open what it finds, and the centralized
/// collaborators a cascade search draws on directly.
pub struct ChainSearch {
    registry: Arc<dyn Registry>,
    path_mapper: Arc<dyn PathMapper>,
    index_store_factory: Arc<dyn IndexStoreFactory>,
    hybrid_factory: Arc<dyn HybridSearchFactory>,
    config: RetrievalConfig,
    embedder: Option<Arc<dyn Embedder>>,
    global_symbol_index: Option<Arc<dyn GlobalSymbolIndex>>,
    graph_expander: Option<Arc<dyn GraphExpander>>,
    cascade_resources: CascadeResources,
}

impl ChainSearch {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: Arc<dyn Registry>,
        path_mapper: Arc<dyn PathMapper>,
        index_store_factory: Arc<dyn IndexStoreFactory>,
        hybrid_factory: Arc<dyn HybridSearchFactory>,
        config: RetrievalConfig,
        embedder: Option<Arc<dyn Embedder>>,
        global_symbol_index: Option<Arc<dyn GlobalSymbolIndex>>,
        graph_expander: Option<Arc<dyn GraphExpander>>,
        cascade_resources: CascadeResources,
    ) -> Self {
        Self {
            registry,
            path_mapper,
            index_store_factory,
            hybrid_factory,
            config,
            embedder,
            global_symbol_index,
            graph_expander,
            cascade_resources,
        }
    }

    pub fn search(&self, query: &str, start_dir: &Path, opts: &SearchOptions) -> ChainSearchResult {
        let t0 = Instant::now();

        let start = match self.resolve(start_dir) {
            Ok(Some(handle)) => handle,
            Ok(None) => return ChainSearchResult::empty(query),
            Err(err) => {
                tracing::debug!(error = %err, "failed to resolve start index");
                return ChainSearchResult::empty(query);
            }
        };

        let descendants = collect_descendants(self.index_store_factory.as_ref(), &start, opts.depth);
        let workers = effective_workers(opts.max_workers, self.gpu_active());
        let (raw_results, dir_errors) = dispatch_directories(self.hybrid_factory.as_ref(), &descendants, query, opts, workers);

        let mut results = merge_and_rank(raw_results, opts.offset, opts.total_limit);
        if opts.code_only || !opts.exclude_extensions.is_empty() {
            results = filter_extensions(results, opts.code_only, &opts.exclude_extensions);
        }
        if opts.group_results {
            results = group_near_duplicates(results, opts.grouping_threshold);
        }

        let related_results = self.expand_related(&results);

        ChainSearchResult {
            query: query.to_string(),
            stats: SearchStats {
                dirs_searched: descendants.len(),
                files_matched: results.len(),
                time_ms: t0.elapsed().as_secs_f64() * 1000.0,
                errors: dir_errors,
            },
            results,
            related_results,
            symbols: Vec::new(),
        }
    }

    pub fn search_files_only(&self, query: &str, start_dir: &Path, opts: &SearchOptions) -> Vec<String> {
        self.search(query, start_dir, opts).results.into_iter().map(|r| r.path).collect()
    }

    pub fn search_symbols(&self, name: &str, start_dir: &Path, kind: Option<&str>, opts: &SearchOptions) -> Vec<Symbol> {
        let start = match self.resolve(start_dir) {
            Ok(Some(handle)) => handle,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::debug!(error = %err, "failed to resolve start index for symbol search");
                return Vec::new();
            }
        };

        if self.config.global_symbol_index_enabled {
            if let Some(index) = &self.global_symbol_index {
                match symbol_search_fast(index.as_ref(), start_dir, name, kind, opts.depth, opts.total_limit) {
                    Ok(found) => return found,
                    Err(err) => tracing::debug!(error = %err, "global symbol index lookup failed, falling back"),
                }
            }
        }

        let descendants = collect_descendants(self.index_store_factory.as_ref(), &start, opts.depth);
        let workers = effective_workers(opts.max_workers, self.gpu_active());
        symbol_search_fallback(self.index_store_factory.as_ref(), &descendants, name, kind, workers, opts.total_limit)
    }

    pub fn cascade_search(
        &self,
        query: &str,
        start_dir: &Path,
        k: usize,
        coarse_k: usize,
        opts: &SearchOptions,
        strategy: Option<CascadeStrategy>,
    ) -> ChainSearchResult {
        let t0 = Instant::now();
        let strategy = strategy.unwrap_or(self.config.cascade_strategy);

        let start = match self.resolve(start_dir) {
            Ok(Some(handle)) => handle,
            Ok(None) => return ChainSearchResult::empty(query),
            Err(err) => {
                tracing::debug!(error = %err, "failed to resolve start index for cascade search");
                return ChainSearchResult::empty(query);
            }
        };

        let descendants = collect_descendants(self.index_store_factory.as_ref(), &start, opts.depth);
        let workers = effective_workers(opts.max_workers, self.gpu_active());

        let mut hybrid_opts = opts.clone();
        hybrid_opts.enable_vector = true;

        let hybrid_factory = self.hybrid_factory.as_ref();
        let hybrid_fallback = || {
            let (raw, _errors) = dispatch_directories(hybrid_factory, &descendants, query, &hybrid_opts, workers);
            merge_and_rank(raw, 0, coarse_k)
        };

        let mut results = run_cascade(strategy, query, k, coarse_k, &self.cascade_resources, hybrid_fallback);
        results = merge_and_rank(results, opts.offset, opts.total_limit.min(k));

        if opts.code_only || !opts.exclude_extensions.is_empty() {
            results = filter_extensions(results, opts.code_only, &opts.exclude_extensions);
        }

        let related_results = self.expand_related(&results);

        ChainSearchResult {
            query: query.to_string(),
            stats: SearchStats {
                dirs_searched: descendants.len(),
                files_matched: results.len(),
                time_ms: t0.elapsed().as_secs_f64() * 1000.0,
                errors: Vec::new(),
            },
            results,
            related_results,
            symbols: Vec::new(),
        }
    }

    /// Convenience wrapper over `search` with default options (spec §4.8
    /// `quick_search`).
    pub fn quick_search(&self, query: &str, start_dir: &Path) -> Vec<SearchResult> {
        self.search(query, start_dir, &SearchOptions::default()).results
    }

    fn resolve(&self, start_dir: &Path) -> anyhow::Result<Option<IndexHandle>> {
        resolve_start_index(self.registry.as_ref(), self.path_mapper.as_ref(), start_dir, MAX_ANCESTOR_DEPTH)
    }

    fn gpu_active(&self) -> bool {
        self.embedder.is_some() && self.config.embedding_use_gpu
    }

    fn expand_related(&self, results: &[SearchResult]) -> Vec<SearchResult> {
        if !self.config.enable_graph_expansion {
            return Vec::new();
        }
        match &self.graph_expander {
            Some(expander) => expander.related(results, self.config.graph_expansion_depth).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "graph expansion failed");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }
}
