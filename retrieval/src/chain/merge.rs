use std::collections::HashMap;

use codesearch_core::SearchResult;

use crate::fusion::is_non_code_extension;

/// Merges per-directory result lists into one ranked list (spec §4.8 "Merge
/// across directories"): dedup by path keeping the highest score, sort
/// descending, then apply `offset` before `total_limit`.
pub fn merge_and_rank(results: Vec<SearchResult>, offset: usize, total_limit: usize) -> Vec<SearchResult> {
    let mut best: HashMap<String, SearchResult> = HashMap::new();
    for result in results {
        best.entry(result.path.clone())
            .and_modify(|existing| {
                if result.score() > existing.score() {
                    *existing = result.clone();
                }
            })
            .or_insert(result);
    }

    let mut merged: Vec<SearchResult> = best.into_values().collect();
    merged.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
    merged.into_iter().skip(offset).take(total_limit).collect()
}

/// Drops results whose extension is in the fixed non-code set (when
/// `code_only`) or in `exclude_extensions` (spec §4.8 "Extension filter").
pub fn filter_extensions(results: Vec<SearchResult>, code_only: bool, exclude_extensions: &[String]) -> Vec<SearchResult> {
    let excluded: Vec<String> = exclude_extensions.iter().map(|ext| ext.to_lowercase()).collect();
    results
        .into_iter()
        .filter(|result| {
            if code_only && is_non_code_extension(&result.path) {
                return false;
            }
            match crate::fusion::extension_of(&result.path) {
                Some(ext) => !excluded.contains(&ext.to_lowercase()),
                None => true,
            }
        })
        .collect()
}

/// Clusters near-duplicate results whose score differs by less than
/// `threshold`, keeping the best of each cluster and stashing the rest
/// under a `grouped_paths` metadata key, comma-joined (spec §4.8 "Optional
/// grouping"). Input is assumed already sorted descending by score.
pub fn group_near_duplicates(results: Vec<SearchResult>, threshold: f64) -> Vec<SearchResult> {
    let mut groups: Vec<SearchResult> = Vec::new();
    for result in results {
        match groups.last_mut() {
            Some(head) if (head.score() - result.score()).abs() < threshold => {
                let count = head.metadata.get("grouped_count").and_then(|v| v.as_f64()).unwrap_or(1.0);
                let mut grouped_paths: Vec<String> = head
                    .metadata
                    .get("grouped_paths")
                    .and_then(|v| v.as_str())
                    .map(|paths| paths.split(',').map(str::to_string).collect())
                    .unwrap_or_default();
                grouped_paths.push(result.path);
                head.set_meta("grouped_count", count + 1.0);
                head.set_meta("grouped_paths", grouped_paths.join(","));
                head.set_meta("grouped", true);
            }
            _ => groups.push(result),
        }
    }
    groups
}
