//! Per-index-database orchestrator (spec §4.7 "Hybrid Search Engine").

mod dispatch;
mod engine;
mod selection;

pub use engine::HybridSearch;
pub use selection::select_backends;
