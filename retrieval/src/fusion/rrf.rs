use std::collections::HashMap;

use codesearch_core::{BackendResults, FusionWeights, SearchResult};

use super::weights::normalize_weights;

pub const DEFAULT_RRF_K: f64 = 60.0;

/// Reciprocal-rank fusion (spec §4.2 "Reciprocal-rank fusion").
///
/// For each source `s` and each result at 1-based rank `r`, contributes
/// `w_s / (k + r)` to the path's accumulated score. A path appearing twice
/// within one source keeps only its first (best-ranked) occurrence. The
/// representative `SearchResult` kept per path is the richest one seen
/// (`SearchResult::richness`), and its `fusion_score`/`original_score`
/// metadata is set from the accumulated score. Output is sorted by score
/// descending; ties keep first-seen (insertion) order, which `sort_by` on a
/// stable sort gives for free.
pub fn fuse_rrf(results: &BackendResults, weights: &FusionWeights, k: f64) -> Vec<SearchResult> {
    let normalized = normalize_weights(weights);

    let mut scores: HashMap<String, f64> = HashMap::new();
    let mut representatives: HashMap<String, SearchResult> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for (source, source_results) in results.iter() {
        let w = normalized.get(*source);
        if w == 0.0 {
            continue;
        }
        let mut seen = std::collections::HashSet::new();
        let mut rank = 0usize;
        for result in source_results {
            if !seen.insert(result.path.clone()) {
                continue;
            }
            rank += 1;
            let contribution = w / (k + rank as f64);
            let entry = scores.entry(result.path.clone()).or_insert(0.0);
            *entry += contribution;

            match representatives.get(&result.path) {
                Some(existing) if existing.richness() >= result.richness() => {}
                _ => {
                    representatives.insert(result.path.clone(), result.clone());
                }
            }
            if !order.contains(&result.path) {
                order.push(result.path.clone());
            }
        }
    }

    let mut fused: Vec<SearchResult> = order
        .into_iter()
        .filter_map(|path| {
            let score = *scores.get(&path)?;
            let mut rep = representatives.remove(&path)?;
            rep.set_score(score);
            rep.set_meta("fusion_score", score);
            rep.set_meta("original_score", score);
            Some(rep)
        })
        .collect();

    fused.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
    fused
}
