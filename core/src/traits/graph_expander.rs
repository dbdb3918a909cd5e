use crate::models::SearchResult;

/// Optional "enrichment pipeline" that attaches precomputed related results
/// via neighbor edges (spec §4.8 "Graph expansion (optional)"). Attaching
/// its output never affects primary ranking — the chain engine only carries
/// it as `ChainSearchResult.related_results`.
pub trait GraphExpander: Send + Sync {
    fn related(&self, results: &[SearchResult], depth: u32) -> anyhow::Result<Vec<SearchResult>>;
}
