use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use codesearch_core::config::{FusionMethod, RetrievalConfig};
use codesearch_core::traits::{CrossEncoderReranker, Embedder, IndexStore, RerankPair};
use codesearch_core::{SearchOptions, SearchResult, SourceId};

use crate::backends::BackendAdapter;
use crate::fusion::{category_filter, fuse_rrf, fuse_simple, select_weights, symbol_boost, tag_source};
use crate::intent::classify;
use crate::rerank::embedding_rerank;

use super::dispatch::{dispatch_parallel, BackendTask};
use super::selection::select_backends;

const OVERALL_DEADLINE: Duration = Duration::from_secs(30);
const PER_TASK_DEADLINE: Duration = Duration::from_secs(10);
const EMBEDDING_RERANK_WINDOW: usize = 100;

/// Per-index-database orchestrator (spec §4.7 "Hybrid Search Engine").
pub struct HybridSearch {
    index_store: Arc<dyn IndexStore>,
    adapters: HashMap<SourceId, Arc<dyn BackendAdapter>>,
    config: RetrievalConfig,
    embedder: Option<Arc<dyn Embedder>>,
    cross_encoder: Option<Arc<dyn CrossEncoderReranker>>,
}

impl HybridSearch {
    pub fn new(
        index_store: Arc<dyn IndexStore>,
        adapters: HashMap<SourceId, Arc<dyn BackendAdapter>>,
        config: RetrievalConfig,
        embedder: Option<Arc<dyn Embedder>>,
        cross_encoder: Option<Arc<dyn CrossEncoderReranker>>,
    ) -> Self {
        Self { index_store, adapters, config, embedder, cross_encoder }
    }

    pub fn search(&self, query: &str, opts: &SearchOptions) -> Vec<SearchResult> {
        match self.index_store.is_empty() {
            Ok(true) => return Vec::new(),
            Err(err) => {
                tracing::debug!(error = %err, "index emptiness check failed, treating as empty");
                return Vec::new();
            }
            Ok(false) => {}
        }

        let splade_available = self.adapters.get(&SourceId::Splade).map(|a| a.is_available()).unwrap_or(false);

        let active_sources = if opts.pure_vector && !opts.enable_vector {
            tracing::warn!("pure_vector requested without enable_vector, falling back to exact");
            vec![SourceId::Exact]
        } else {
            select_backends(opts, &self.config, splade_available)
        };

        let intent = classify(query);
        let limit = opts.limit_per_dir.max(1);

        let tasks: Vec<BackendTask> = active_sources
            .iter()
            .filter_map(|source| {
                let adapter = self.adapters.get(source)?.clone();
                let query = query.to_string();
                Some((*source, Box::new(move || adapter.search(&query, limit)) as Box<dyn FnOnce() -> Vec<SearchResult> + Send>))
            })
            .collect();

        let mut backend_results = dispatch_parallel(tasks, OVERALL_DEADLINE, PER_TASK_DEADLINE);
        for (source, results) in backend_results.iter_mut() {
            *results = tag_source(results, *source);
        }

        let base_weights = opts
            .hybrid_weights
            .clone()
            .unwrap_or_else(|| active_sources.iter().map(|&s| (s, 1.0)).collect());
        let weights = select_weights(&active_sources, &base_weights, query);

        let fused = match self.config.fusion_method {
            FusionMethod::Rrf => fuse_rrf(&backend_results, &weights, self.config.rrf_k),
            FusionMethod::Simple => fuse_simple(&backend_results, &weights),
        };

        let mut ranked = symbol_boost(&fused, self.config.symbol_boost_factor);
        sort_desc(&mut ranked);

        // Each rerank stage below wholesale-replaces `ranked` with its own
        // output rather than merging a reranked head back against an
        // untouched tail: the two rerankers score on different scales, so a
        // merge-then-sort could let stale tail scores outrank items the
        // stage just reranked.
        if self.config.enable_reranking {
            if let Some(embedder) = &self.embedder {
                let window = EMBEDDING_RERANK_WINDOW.min(ranked.len());
                let mut reranked = embedding_rerank(&ranked[..window], query, embedder.as_ref());
                sort_desc(&mut reranked);
                // Keep the full window for the cross-encoder stage to draw
                // on; otherwise collapse straight to the configured limit.
                let keep = if self.config.enable_cross_encoder_rerank { window } else { self.config.reranker_top_k.min(window) };
                reranked.truncate(keep);
                ranked = reranked;
            }
        }

        if self.config.enable_cross_encoder_rerank {
            if let Some(cross_encoder) = &self.cross_encoder {
                let top_k = self.config.reranker_top_k.min(ranked.len());
                let pairs: Vec<RerankPair> =
                    ranked[..top_k].iter().map(|r| RerankPair { query: query.to_string(), document: rerank_text(r) }).collect();
                match cross_encoder.score_pairs(&pairs) {
                    Ok(scores) => {
                        let mut reranked: Vec<SearchResult> = ranked[..top_k].to_vec();
                        for (r, score) in reranked.iter_mut().zip(scores) {
                            r.set_score(score as f64);
                            r.set_meta("reranked", true);
                        }
                        sort_desc(&mut reranked);
                        ranked = reranked;
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "cross-encoder rerank failed, keeping prior ranking");
                    }
                }
            }
        }

        if self.config.enable_category_filter && !opts.pure_vector {
            ranked = category_filter(&ranked, intent, true);
        }

        ranked.truncate(limit);
        ranked
    }
}

fn rerank_text(result: &SearchResult) -> String {
    result.content.clone().unwrap_or_else(|| result.excerpt.clone())
}

fn sort_desc(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
}
