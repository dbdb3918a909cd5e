use codesearch_core::FusionWeights;

/// Normalizes a weight mapping to sum to 1 (spec §4.2 "Weight normalization").
///
/// If the total is not finite or not strictly positive, the input is
/// returned unchanged — this is what lets RRF accept NaN/∞/zero-sum weights
/// without raising (spec §3 invariant, §7.1 item 8).
pub fn normalize_weights(weights: &FusionWeights) -> FusionWeights {
    let total = weights.sum();
    if !total.is_finite() || total <= 0.0 {
        return weights.clone();
    }
    weights.iter().map(|(s, w)| (s, w / total)).collect()
}
