use codesearch_core::SearchResult;

/// Multiplies the score of every result carrying a symbol by `factor` (spec
/// §4.2 "Symbol boost", default factor 1.5). Records `original_fusion_score`
/// and `boosted = true` on boosted results; results without a symbol pass
/// through untouched. Does not re-sort — callers re-sort if they need to.
pub fn symbol_boost(results: &[SearchResult], factor: f64) -> Vec<SearchResult> {
    results
        .iter()
        .cloned()
        .map(|mut r| {
            if r.symbol.is_some() {
                let original = r.score();
                r.set_score(original * factor);
                r.set_meta("original_fusion_score", original);
                r.set_meta("boosted", true);
            }
            r
        })
        .collect()
}
