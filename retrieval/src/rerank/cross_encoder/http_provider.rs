use std::path::Path;
use std::time::Duration;

use codesearch_core::traits::{CrossEncoderReranker, RerankPair};
use codesearch_core::RerankError;
use serde::Serialize;

use super::api_key::resolve_api_key;
use super::backoff::{resolve_delay_seconds, sample_jitter};
use super::batching::{group_by_query, make_batches};
use super::provider_defaults::{infer_max_input_tokens, Provider};
use super::response::{extract_scores, RerankResponse};

const DEFAULT_MAX_RETRIES: u32 = 3;
const TRUNCATED_BODY_CHARS: usize = 300;

#[derive(Serialize)]
struct RerankRequest<'a> {
    model: &'a str,
    query: &'a str,
    documents: &'a [String],
    top_n: usize,
    return_documents: bool,
}

/// Remote cross-encoder reranker over a provider's HTTP `/rerank` endpoint
/// (spec §4.6 "Cross-encoder reranker", provider behavior pinned from
/// `api_reranker.py`).
pub struct HttpCrossEncoderReranker {
    client: reqwest::blocking::Client,
    provider: Provider,
    model: String,
    api_key: String,
    max_input_tokens: usize,
    max_retries: u32,
}

impl HttpCrossEncoderReranker {
    pub fn from_config(
        provider: Provider,
        model: Option<String>,
        explicit_api_key: Option<&str>,
        workspace_root: Option<&Path>,
        max_input_tokens: Option<usize>,
    ) -> Result<Self, RerankError> {
        let defaults = provider.defaults();
        let model = model.unwrap_or_else(|| defaults.default_model.to_string());
        let api_key = resolve_api_key(explicit_api_key, defaults.env_var, workspace_root).ok_or_else(|| {
            RerankError::Unauthorized { provider: format!("{:?}", provider).to_lowercase(), status: 401 }
        })?;
        let max_input_tokens = max_input_tokens.unwrap_or_else(|| infer_max_input_tokens(&model));

        Ok(Self {
            client: reqwest::blocking::Client::new(),
            provider,
            model,
            api_key,
            max_input_tokens,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    fn provider_name(&self) -> String {
        format!("{:?}", self.provider).to_lowercase()
    }

    fn call_batch(&self, query: &str, documents: &[String]) -> Result<Vec<f32>, RerankError> {
        let url = self.provider.endpoint_url();
        let body = RerankRequest { model: &self.model, query, documents, top_n: documents.len(), return_documents: false };

        for attempt in 0..=self.max_retries {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .map_err(|err| RerankError::RetriesExhausted {
                    provider: self.provider_name(),
                    attempts: attempt + 1,
                    reason: err.to_string(),
                })?;

            let status = response.status();
            if status.is_success() {
                let parsed: RerankResponse = response.json().map_err(|err| RerankError::InvalidJson {
                    provider: self.provider_name(),
                    reason: err.to_string(),
                })?;
                return extract_scores(&parsed, documents.len(), &self.provider_name());
            }

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(RerankError::Unauthorized { provider: self.provider_name(), status: status.as_u16() });
            }

            let retryable = status.as_u16() == 429 || status.is_server_error();
            if !retryable {
                let body_text = response.text().unwrap_or_default();
                let truncated: String = body_text.chars().take(TRUNCATED_BODY_CHARS).collect();
                return Err(RerankError::Http { provider: self.provider_name(), status: status.as_u16(), body: truncated });
            }

            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<f64>().ok());

            if attempt == self.max_retries {
                return Err(RerankError::RetriesExhausted {
                    provider: self.provider_name(),
                    attempts: attempt + 1,
                    reason: format!("HTTP {}", status.as_u16()),
                });
            }

            let base = super::backoff::backoff_base_seconds(attempt);
            let jitter = sample_jitter(base);
            let delay = resolve_delay_seconds(attempt, retry_after, jitter);
            std::thread::sleep(Duration::from_secs_f64(delay));
        }

        unreachable!("retry loop always returns before exhausting its range")
    }
}

impl CrossEncoderReranker for HttpCrossEncoderReranker {
    fn score_pairs(&self, pairs: &[RerankPair]) -> anyhow::Result<Vec<f32>> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let documents: Vec<String> = pairs.iter().map(|p| p.document.clone()).collect();
        let mut scores = vec![0.0f32; pairs.len()];
        let mut filled = 0usize;

        for (query, indices) in group_by_query(pairs) {
            for batch in make_batches(&query, &indices, &documents, self.max_input_tokens) {
                let batch_docs: Vec<String> = batch.iter().map(|&i| documents[i].clone()).collect();
                let batch_scores = self.call_batch(&query, &batch_docs)?;
                for (local_idx, &global_idx) in batch.iter().enumerate() {
                    if let Some(&s) = batch_scores.get(local_idx) {
                        scores[global_idx] = s;
                        filled += 1;
                    }
                }
            }
        }

        if filled != pairs.len() {
            return Err(RerankError::ScoreCountMismatch { provider: self.provider_name(), filled, expected: pairs.len() }.into());
        }
        Ok(scores)
    }

    fn max_input_tokens(&self) -> usize {
        self.max_input_tokens
    }
}

