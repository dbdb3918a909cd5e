use super::search_result::SearchResult;
use super::symbol::Symbol;

/// Execution statistics collected during a chain search (spec §3, §6).
/// Every absorbed backend/per-directory error is recorded here with its
/// source identifier rather than failing the call (spec §7 "Propagation
/// policy").
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub dirs_searched: usize,
    pub files_matched: usize,
    pub time_ms: f64,
    pub errors: Vec<String>,
}

/// Top-level result of a `ChainSearch` call (spec §6 `ChainSearchResult`).
#[derive(Debug, Clone)]
pub struct ChainSearchResult {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub related_results: Vec<SearchResult>,
    pub symbols: Vec<Symbol>,
    pub stats: SearchStats,
}

impl ChainSearchResult {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            related_results: Vec::new(),
            symbols: Vec::new(),
            stats: SearchStats::default(),
        }
    }
}
