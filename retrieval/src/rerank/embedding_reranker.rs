use codesearch_core::traits::Embedder;
use codesearch_core::SearchResult;

/// Embedding-cosine reranker (spec §4.6 "Embedding cosine reranker"): a
/// second pass over fused results using the candidate's own text, blended
/// 50/50 with its incoming (RRF) score. Does not re-sort — the caller
/// re-sorts afterward.
pub fn embedding_rerank(results: &[SearchResult], query: &str, embedder: &dyn Embedder) -> Vec<SearchResult> {
    let query_vec = match embedder.embed_single(query) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(error = %err, "query embedding failed, skipping embedding rerank");
            return results.to_vec();
        }
    };

    results
        .iter()
        .cloned()
        .map(|mut r| {
            let rrf_score = r.score();
            let text = r.content.clone().unwrap_or_else(|| r.excerpt.clone());
            let cosine = match embedder.embed_single(&text) {
                Ok(candidate_vec) => cosine_similarity(&query_vec, &candidate_vec),
                Err(err) => {
                    tracing::debug!(error = %err, path = %r.path, "candidate embedding failed, treating as zero similarity");
                    0.0
                }
            };
            let final_score = 0.5 * rrf_score + 0.5 * cosine;
            r.set_score(final_score);
            r.set_meta("rrf_score", rrf_score);
            r.set_meta("cosine_similarity", cosine);
            r.set_meta("reranked", true);
            r
        })
        .collect()
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for i in 0..n {
        let (x, y) = (a[i] as f64, b[i] as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}
