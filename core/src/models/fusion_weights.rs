use std::collections::HashMap;

use super::source_id::SourceId;

/// Per-source weights used by the fusion kernel (spec §3 `FusionWeights`,
/// §4.2 "Weight normalization").
///
/// A thin newtype over the map rather than a bare `HashMap` so that
/// normalization lives next to the type it operates on; the fusion kernel in
/// `codesearch-retrieval::fusion` is still the single place that calls it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FusionWeights(HashMap<SourceId, f64>);

impl FusionWeights {
    pub fn new(weights: HashMap<SourceId, f64>) -> Self {
        Self(weights)
    }

    pub fn get(&self, source: SourceId) -> f64 {
        self.0.get(&source).copied().unwrap_or(0.0)
    }

    pub fn insert(&mut self, source: SourceId, weight: f64) {
        self.0.insert(source, weight);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceId, f64)> + '_ {
        self.0.iter().map(|(&s, &w)| (s, w))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn into_inner(self) -> HashMap<SourceId, f64> {
        self.0
    }
}

impl From<HashMap<SourceId, f64>> for FusionWeights {
    fn from(map: HashMap<SourceId, f64>) -> Self {
        Self(map)
    }
}

impl FromIterator<(SourceId, f64)> for FusionWeights {
    fn from_iter<T: IntoIterator<Item = (SourceId, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
