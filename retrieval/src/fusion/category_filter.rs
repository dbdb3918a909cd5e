use codesearch_core::{QueryIntent, SearchResult};

use super::extensions::is_non_code_extension;

/// Coarse classification a path maps to for category filtering (spec §4.2
/// "Category filter").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Code,
    Doc,
}

pub fn path_category(path: &str) -> Category {
    if is_non_code_extension(path) {
        Category::Doc
    } else {
        Category::Code
    }
}

/// Filters (or reorders) results according to query intent (spec §4.2
/// "Category filter").
///
/// - KEYWORD keeps only "code"-category results, unless that would leave
///   zero results and `allow_mixed` is set, in which case the unfiltered
///   list is returned instead.
/// - SEMANTIC keeps every result but stable-sorts so that, among results
///   tied on score, "doc" results sort first.
/// - MIXED keeps every result, untouched.
pub fn category_filter(results: &[SearchResult], intent: QueryIntent, allow_mixed: bool) -> Vec<SearchResult> {
    match intent {
        QueryIntent::Keyword => {
            let filtered: Vec<SearchResult> = results
                .iter()
                .cloned()
                .filter(|r| path_category(&r.path) == Category::Code)
                .collect();
            if filtered.is_empty() && allow_mixed && !results.is_empty() {
                results.to_vec()
            } else {
                filtered
            }
        }
        QueryIntent::Semantic => {
            let mut out = results.to_vec();
            out.sort_by(|a, b| {
                b.score()
                    .partial_cmp(&a.score())
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| match (path_category(&a.path), path_category(&b.path)) {
                        (Category::Doc, Category::Code) => std::cmp::Ordering::Less,
                        (Category::Code, Category::Doc) => std::cmp::Ordering::Greater,
                        _ => std::cmp::Ordering::Equal,
                    })
            });
            out
        }
        QueryIntent::Mixed => results.to_vec(),
    }
}
