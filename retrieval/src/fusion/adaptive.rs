use codesearch_core::{FusionWeights, QueryIntent, SourceId};

use crate::intent::classify;

/// Boost applied to exact/SPLADE weights when the query reads as pure
/// keyword, or to vector weight when it reads as pure semantic (spec §4.2
/// "Adaptive weight selection"). Mixed-intent queries are left untouched —
/// this is the only place query text influences fusion weights.
const ADAPTIVE_BOOST: f64 = 1.5;

/// Restricts `base` to `active_sources` and, based on the query's intent,
/// boosts the lexical sources (keyword intent) or the vector source
/// (semantic intent).
pub fn select_weights(active_sources: &[SourceId], base: &FusionWeights, query: &str) -> FusionWeights {
    let intent = classify(query);

    active_sources
        .iter()
        .map(|&source| {
            let mut w = base.get(source);
            match (intent, source) {
                (QueryIntent::Keyword, SourceId::Exact | SourceId::Splade) => w *= ADAPTIVE_BOOST,
                (QueryIntent::Semantic, SourceId::Vector | SourceId::Dense) => w *= ADAPTIVE_BOOST,
                _ => {}
            }
            (source, w)
        })
        .collect()
}
