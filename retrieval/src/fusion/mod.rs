//! Pure ranking primitives (spec §4.2 "Fusion Kernel"). No I/O; every
//! function here takes value types and returns new value types, never
//! mutating a caller's list in place (spec §9 "Fusion as a pure kernel").

mod adaptive;
mod bm25;
mod category_filter;
mod extensions;
mod rrf;
mod simple;
mod symbol_boost;
mod tagging;
mod weights;

pub use adaptive::select_weights;
pub use bm25::normalize_bm25;
pub use category_filter::{category_filter, path_category, Category};
pub use extensions::{extension_of, is_non_code_extension};
pub use rrf::fuse_rrf;
pub use simple::fuse_simple;
pub use symbol_boost::symbol_boost;
pub use tagging::tag_source;
pub use weights::normalize_weights;
