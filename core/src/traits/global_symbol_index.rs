use crate::models::Symbol;

/// Project-wide symbol index consulted as the fast path for chain-level
/// symbol search (spec §4.8 "Symbol chain search"). Optional: when absent
/// or disabled by config, the chain engine falls back to a per-directory
/// `IndexStore::find_symbol` fan-out instead.
pub trait GlobalSymbolIndex: Send + Sync {
    /// Up to `limit` candidates across the whole project, keyed by
    /// `(name, optional kind)`. Depth filtering and final dedup/sort happen
    /// in the caller, not here.
    fn lookup(&self, name: &str, kind: Option<&str>, limit: usize) -> anyhow::Result<Vec<(String, Symbol)>>;
}
