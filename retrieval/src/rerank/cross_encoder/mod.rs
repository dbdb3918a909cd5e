//! Cross-encoder reranker adapters (spec §4.6 "Cross-encoder reranker").

mod api_key;
mod backoff;
mod batching;
#[cfg(feature = "onnx-reranker")]
mod onnx;
mod provider_defaults;
mod response;
mod http_provider;

pub use http_provider::HttpCrossEncoderReranker;
pub use provider_defaults::{infer_max_input_tokens, Provider, ProviderDefaults};

#[cfg(feature = "onnx-reranker")]
pub use onnx::OnnxCrossEncoderReranker;
