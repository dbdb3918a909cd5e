//! Local ONNX cross-encoder, behind the `onnx-reranker` feature (spec §4.6
//! "local ONNX runtime"). Uses the optional `fastembed` dependency for local
//! model inference rather than pulling in a bespoke ONNX runtime binding.

use codesearch_core::traits::{CrossEncoderReranker, RerankPair};
use fastembed::{RerankInitOptions, RerankerModel, TextRerank};

/// Cross-encoder backed by a locally loaded ONNX reranker model.
pub struct OnnxCrossEncoderReranker {
    model: TextRerank,
    max_input_tokens: usize,
}

impl OnnxCrossEncoderReranker {
    pub fn new(model_name: RerankerModel, max_input_tokens: usize) -> anyhow::Result<Self> {
        let model = TextRerank::try_new(RerankInitOptions::new(model_name))?;
        Ok(Self { model, max_input_tokens })
    }
}

impl CrossEncoderReranker for OnnxCrossEncoderReranker {
    fn score_pairs(&self, pairs: &[RerankPair]) -> anyhow::Result<Vec<f32>> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }
        // All pairs share a query in this crate's call sites (one Hybrid
        // call reranks one query's candidates), so a single local batch
        // covers the whole request.
        let query = pairs[0].query.as_str();
        let documents: Vec<&str> = pairs.iter().map(|p| p.document.as_str()).collect();
        let results = self.model.rerank(query, documents, false, None)?;

        let mut scores = vec![0.0f32; pairs.len()];
        for r in results {
            if r.index < scores.len() {
                scores[r.index] = r.score;
            }
        }
        Ok(scores)
    }

    fn max_input_tokens(&self) -> usize {
        self.max_input_tokens
    }
}
