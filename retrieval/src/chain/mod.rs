//! Whole-project orchestrator (spec §4.8 "Chain Search Engine"): resolves a
//! start directory to an index, walks its subdirectory tree, fans
//! `HybridSearch` out across what it finds, and merges the result.

mod cascade;
mod dispatch;
mod engine;
mod factory;
mod merge;
mod resolve;
mod symbols;

pub use cascade::{cosine_batch, CascadeResources};
pub use engine::ChainSearch;
pub use factory::HybridSearchFactory;
pub use merge::{filter_extensions, group_near_duplicates, merge_and_rank};
pub use resolve::{collect_descendants, resolve_start_index};
