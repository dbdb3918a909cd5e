//! Query intent classifier (spec §4.1).

mod classifier;

pub use classifier::classify;
