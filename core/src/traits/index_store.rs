use crate::models::Symbol;

/// A single FTS hit before it is turned into a `SearchResult` — just what
/// the store itself knows (spec §6 `IndexStore`).
#[derive(Debug, Clone)]
pub struct FtsHit {
    pub chunk_id: i64,
    pub file_path: String,
    /// BM25 score as returned by the store — negative, more negative is
    /// better (spec §4.3, GLOSSARY "BM25").
    pub bm25_score: f64,
    pub excerpt: String,
    pub content: Option<String>,
    pub symbol: Option<Symbol>,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
}

/// A subdirectory link recorded in a per-directory index, used by the chain
/// engine to walk the directory-index tree (spec §4.8 "Collect descendants").
#[derive(Debug, Clone)]
pub struct SubdirLink {
    pub dir_path: String,
    pub index_db_path: String,
}

/// Per-directory index database (spec §6 `IndexStore`). Opened read-only,
/// short-lived, safe for concurrent reads from multiple threads at once
/// (spec §5 "Shared resources and mutation policy").
pub trait IndexStore: Send + Sync {
    /// `true` if the backing file is missing or zero bytes (spec §4.7
    /// "Early guards").
    fn is_empty(&self) -> anyhow::Result<bool>;

    fn search_fts_exact(&self, query: &str, limit: usize) -> anyhow::Result<Vec<FtsHit>>;
    fn search_fts_fuzzy(&self, query: &str, limit: usize) -> anyhow::Result<Vec<FtsHit>>;

    fn find_symbol(&self, name: &str, kind: Option<&str>) -> anyhow::Result<Vec<(String, Symbol)>>;

    fn subdirectories(&self) -> anyhow::Result<Vec<SubdirLink>>;

    /// `true` if this index carries an embedded semantic-chunks table
    /// (distributed vector deployment, spec §4.4).
    fn has_semantic_chunks(&self) -> anyhow::Result<bool>;
}
