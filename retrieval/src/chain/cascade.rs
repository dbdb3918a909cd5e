use std::collections::HashMap;
use std::sync::Arc;

use codesearch_core::models::CascadeStrategy;
use codesearch_core::traits::{AnnIndex, BinarySearcher, ChunkRecord, CrossEncoderReranker, DenseVectorStore, Embedder, RerankPair, VectorMetadataStore};
use codesearch_core::SearchResult;

use crate::backends::hamming_to_score;

/// Centralized collaborators a two-stage cascade draws on, resolved once at
/// the project root rather than per directory (spec §4.4 "Centralized vs.
/// distributed discovery", §4.8 "Cascade search"). Any field may be absent;
/// absence degrades a strategy rather than erroring.
#[derive(Clone, Default)]
pub struct CascadeResources {
    pub binary_searcher: Option<Arc<dyn BinarySearcher>>,
    pub ann_index: Option<Arc<dyn AnnIndex>>,
    pub dense_vector_store: Option<Arc<dyn DenseVectorStore>>,
    pub metadata_store: Option<Arc<dyn VectorMetadataStore>>,
    pub embedder: Option<Arc<dyn Embedder>>,
    pub cross_encoder: Option<Arc<dyn CrossEncoderReranker>>,
}

pub enum BinaryCascadeOutcome {
    NoCandidates,
    Scored(Vec<SearchResult>),
}

/// Top-level cascade dispatcher (spec §4.8 "Cascade search" table).
/// `hybrid_fallback` is lazy: it fans out per-directory hybrid searches and
/// merges them, which is only worth paying for when a strategy actually
/// needs it (the `hybrid` strategy itself, or a `binary` cascade that found
/// no candidates).
pub fn run_cascade(
    strategy: CascadeStrategy,
    query: &str,
    k: usize,
    coarse_k: usize,
    resources: &CascadeResources,
    hybrid_fallback: impl FnOnce() -> Vec<SearchResult>,
) -> Vec<SearchResult> {
    match strategy {
        CascadeStrategy::Binary => match binary_cascade(query, k, coarse_k, resources) {
            Ok(BinaryCascadeOutcome::Scored(results)) => results,
            Ok(BinaryCascadeOutcome::NoCandidates) => hybrid_cascade(query, hybrid_fallback(), k, resources),
            Err(err) => {
                tracing::debug!(error = %err, "binary cascade failed, falling back to hybrid");
                hybrid_cascade(query, hybrid_fallback(), k, resources)
            }
        },
        CascadeStrategy::DenseRerank => dense_rerank_cascade(query, k, coarse_k, resources).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "dense_rerank cascade failed");
            Vec::new()
        }),
        CascadeStrategy::BinaryRerank => binary_rerank_cascade(query, k, coarse_k, resources).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "binary_rerank cascade failed");
            Vec::new()
        }),
        CascadeStrategy::Hybrid => hybrid_cascade(query, hybrid_fallback(), k, resources),
    }
}

/// `binary` strategy: Hamming-distance coarse pass over the centralized
/// packed file, then a dense cosine rerank fetched by chunk id. Falls back
/// to pure-Hamming scoring when no dense vectors are available for the
/// candidate ids (spec §4.8 "A binary cascade with no dense embeddings...").
fn binary_cascade(query: &str, k: usize, coarse_k: usize, resources: &CascadeResources) -> anyhow::Result<BinaryCascadeOutcome> {
    let (searcher, embedder) = match (&resources.binary_searcher, &resources.embedder) {
        (Some(searcher), Some(embedder)) => (searcher, embedder),
        _ => return Ok(BinaryCascadeOutcome::NoCandidates),
    };

    let query_vec = embedder.embed_single(query)?;
    let (ids, distances) = searcher.search(&query_vec, coarse_k)?;
    if ids.is_empty() {
        return Ok(BinaryCascadeOutcome::NoCandidates);
    }

    let hamming_score_by_id: HashMap<i64, f64> = ids.iter().copied().zip(distances.iter().copied().map(hamming_to_score)).collect();

    let chunks: Vec<ChunkRecord> = match &resources.metadata_store {
        Some(store) => store.get_chunks_by_ids(&ids, None)?,
        None => Vec::new(),
    };

    let dense_vectors = match &resources.dense_vector_store {
        Some(store) => store.get_vectors_by_ids(&ids).ok().filter(|v| !v.is_empty()),
        None => None,
    };

    let mut results: Vec<SearchResult> = match dense_vectors {
        Some(vectors) => {
            let vector_by_id: HashMap<i64, Vec<f32>> = vectors.into_iter().collect();
            let doc_vectors: Vec<Vec<f32>> = chunks.iter().map(|c| vector_by_id.get(&c.chunk_id).cloned().unwrap_or_default()).collect();
            let cosine_scores = cosine_batch(&query_vec, &doc_vectors);
            chunks.into_iter().zip(cosine_scores).map(|(chunk, score)| chunk_to_result(chunk, score as f64)).collect()
        }
        None => chunks
            .into_iter()
            .filter_map(|chunk| {
                let score = *hamming_score_by_id.get(&chunk.chunk_id)?;
                Some(chunk_to_result(chunk, score))
            })
            .collect(),
    };

    sort_and_truncate(&mut results, k);
    Ok(BinaryCascadeOutcome::Scored(results))
}

/// `dense_rerank` strategy: dense HNSW coarse pass, cross-encoder fine pass.
fn dense_rerank_cascade(query: &str, k: usize, coarse_k: usize, resources: &CascadeResources) -> anyhow::Result<Vec<SearchResult>> {
    let (ann, embedder) = match (&resources.ann_index, &resources.embedder) {
        (Some(ann), Some(embedder)) => (ann, embedder),
        _ => return Ok(Vec::new()),
    };

    let query_vec = embedder.embed_single(query)?;
    let (ids, distances) = ann.search(&query_vec, coarse_k)?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let coarse_score_by_id: HashMap<i64, f64> = ids.iter().copied().zip(distances.iter().copied().map(|d| (1.0 - d as f64).max(0.0))).collect();

    let chunks: Vec<ChunkRecord> = match &resources.metadata_store {
        Some(store) => store.get_chunks_by_ids(&ids, None)?,
        None => Vec::new(),
    };

    let results: Vec<SearchResult> = chunks
        .into_iter()
        .filter_map(|chunk| {
            let score = *coarse_score_by_id.get(&chunk.chunk_id)?;
            Some(chunk_to_result(chunk, score))
        })
        .collect();

    Ok(rerank_or_truncate(query, results, k, resources))
}

/// `binary_rerank` strategy: Hamming coarse pass, cross-encoder fine pass.
fn binary_rerank_cascade(query: &str, k: usize, coarse_k: usize, resources: &CascadeResources) -> anyhow::Result<Vec<SearchResult>> {
    let (searcher, embedder) = match (&resources.binary_searcher, &resources.embedder) {
        (Some(searcher), Some(embedder)) => (searcher, embedder),
        _ => return Ok(Vec::new()),
    };

    let query_vec = embedder.embed_single(query)?;
    let (ids, distances) = searcher.search(&query_vec, coarse_k)?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let hamming_score_by_id: HashMap<i64, f64> = ids.iter().copied().zip(distances.iter().copied().map(hamming_to_score)).collect();

    let chunks: Vec<ChunkRecord> = match &resources.metadata_store {
        Some(store) => store.get_chunks_by_ids(&ids, None)?,
        None => Vec::new(),
    };

    let results: Vec<SearchResult> = chunks
        .into_iter()
        .filter_map(|chunk| {
            let score = *hamming_score_by_id.get(&chunk.chunk_id)?;
            Some(chunk_to_result(chunk, score))
        })
        .collect();

    Ok(rerank_or_truncate(query, results, k, resources))
}

/// `hybrid` strategy's fine pass, and the shared fallback target for a dry
/// `binary` cascade: the caller already fanned the coarse candidates out
/// across directories and merged them (spec §4.8 "RRF over {exact, fuzzy,
/// vector, splade}") — this stage only applies the cross-encoder.
fn hybrid_cascade(query: &str, merged_candidates: Vec<SearchResult>, k: usize, resources: &CascadeResources) -> Vec<SearchResult> {
    rerank_or_truncate(query, merged_candidates, k, resources)
}

fn rerank_or_truncate(query: &str, mut results: Vec<SearchResult>, k: usize, resources: &CascadeResources) -> Vec<SearchResult> {
    if let Some(cross_encoder) = &resources.cross_encoder {
        let pairs: Vec<RerankPair> =
            results.iter().map(|r| RerankPair { query: query.to_string(), document: rerank_text(r) }).collect();
        match cross_encoder.score_pairs(&pairs) {
            Ok(scores) => {
                for (result, score) in results.iter_mut().zip(scores) {
                    result.set_score(score as f64);
                    result.set_meta("reranked", true);
                }
            }
            Err(err) => tracing::debug!(error = %err, "cross-encoder cascade rerank failed, keeping coarse ranking"),
        }
    }
    sort_and_truncate(&mut results, k);
    results
}

fn rerank_text(result: &SearchResult) -> String {
    result.content.clone().unwrap_or_else(|| result.excerpt.clone())
}

fn chunk_to_result(chunk: ChunkRecord, score: f64) -> SearchResult {
    let mut result = SearchResult::new(chunk.file_path, score, String::new()).with_content(chunk.content);
    if let (Some(start), Some(end)) = (chunk.start_line, chunk.end_line) {
        result = result.with_lines(start, end);
    }
    result
}

fn sort_and_truncate(results: &mut Vec<SearchResult>, k: usize) {
    results.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(k);
}

/// Batch cosine similarity between a query vector and a document matrix
/// (spec §4.8 "Cosine batch math"): both truncated to their shared minimum
/// dimension, zero-norm documents score `0.0` instead of dividing by zero,
/// computed as aligned dot products over iterator chains rather than
/// manually indexed per-row loops.
pub fn cosine_batch(query: &[f32], docs: &[Vec<f32>]) -> Vec<f32> {
    let dim = docs.iter().map(Vec::len).chain(std::iter::once(query.len())).min().unwrap_or(0);
    if dim == 0 {
        return vec![0.0; docs.len()];
    }

    let q = &query[..dim];
    let q_norm = l2_norm(q);
    if q_norm == 0.0 {
        return vec![0.0; docs.len()];
    }

    docs.iter()
        .map(|doc| {
            let d = &doc[..dim.min(doc.len())];
            if d.len() < dim {
                return 0.0;
            }
            let d_norm = l2_norm(d);
            if d_norm == 0.0 {
                return 0.0;
            }
            let dot: f32 = q.iter().zip(d.iter()).map(|(a, b)| a * b).sum();
            dot / (q_norm * d_norm)
        })
        .collect()
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}
