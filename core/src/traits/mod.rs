//! Collaborator interfaces (spec §6 "Collaborator interfaces (consumed)").
//!
//! Everything in this module is a behavioral contract for a component the
//! core does not implement: the tokenizer/parser, the embedders, the raw
//! storage layers, and the file watcher are all out of scope (spec §1) and
//! are consumed only through these traits. Test code implements them with
//! in-memory fakes; production wiring implements them against real SQLite
//! FTS5 tables, an HNSW file, a memory-mapped packed binary vector file, and
//! so on — none of which this crate owns.

mod ann_index;
mod binary_searcher;
mod cross_encoder;
mod dense_vector_store;
mod embedder;
mod embedder_registry;
mod global_symbol_index;
mod graph_expander;
mod index_store;
mod index_store_factory;
mod path_mapper;
mod registry;
mod sparse_encoder;
mod splade_index;
mod vector_metadata_store;

pub use ann_index::AnnIndex;
pub use binary_searcher::BinarySearcher;
pub use cross_encoder::{CrossEncoderReranker, RerankPair};
pub use dense_vector_store::DenseVectorStore;
pub use embedder::{Embedder, EmbedderBackendKind};
pub use embedder_registry::EmbedderRegistry;
pub use global_symbol_index::GlobalSymbolIndex;
pub use graph_expander::GraphExpander;
pub use index_store::{FtsHit, IndexStore, SubdirLink};
pub use index_store_factory::IndexStoreFactory;
pub use path_mapper::PathMapper;
pub use registry::Registry;
pub use sparse_encoder::SparseEncoder;
pub use splade_index::{SparseVector, SpladeChunk, SpladeIndex};
pub use vector_metadata_store::{ChunkRecord, StoredModelConfig, VectorMetadataStore};
