//! Reranker adapters (spec §4.6): an embedding-cosine second pass, and a
//! cross-encoder (local ONNX or remote HTTP) joint scorer.

mod embedding_reranker;
pub mod cross_encoder;

pub use embedding_reranker::embedding_rerank;
