use std::collections::HashMap;

use codesearch_core::{BackendResults, FusionWeights, SearchResult};

use super::weights::normalize_weights;

/// Simple weighted-sum fusion (spec §4.2 "Simple weighted fusion").
///
/// Each source's raw scores are linearly rescaled to `[0, 1]` within that
/// source before being weighted and summed, so no single source's absolute
/// score magnitude (BM25 vs. cosine vs. RRF) can dominate by scale alone.
pub fn fuse_simple(results: &BackendResults, weights: &FusionWeights) -> Vec<SearchResult> {
    let normalized = normalize_weights(weights);

    let mut scores: HashMap<String, f64> = HashMap::new();
    let mut representatives: HashMap<String, SearchResult> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for (source, source_results) in results.iter() {
        let w = normalized.get(*source);
        if w == 0.0 || source_results.is_empty() {
            continue;
        }
        let min = source_results.iter().map(|r| r.score()).fold(f64::INFINITY, f64::min);
        let max = source_results.iter().map(|r| r.score()).fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;

        let mut seen = std::collections::HashSet::new();
        for result in source_results {
            if !seen.insert(result.path.clone()) {
                continue;
            }
            let normalized_score = if span > 0.0 { (result.score() - min) / span } else { 1.0 };
            let contribution = w * normalized_score;
            *scores.entry(result.path.clone()).or_insert(0.0) += contribution;

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
