use codesearch_core::{SearchResult, SourceId};

/// Tags a copy of each result with its `search_source` (spec §4.2 "Source
/// tagging"). Never mutates the caller's list — returns a fresh `Vec`.
///
/// Tagging twice is idempotent: re-tagging with the same source overwrites
/// the same metadata key with the same value.
pub fn tag_source(results: &[SearchResult], source: SourceId) -> Vec<SearchResult> {
    results
        .iter()
        .cloned()
        .map(|mut r| {
            r.set_meta("search_source", source.as_str());
            r
        })
        .collect()
}
