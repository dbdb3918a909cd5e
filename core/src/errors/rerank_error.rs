/// Remote cross-encoder provider errors (spec §4.6, §7.4).
///
/// 401/403 are non-retryable and propagate out of the reranker to the
/// caller; 429/5xx are retried internally with backoff and only surface
/// here once retries are exhausted.
#[derive(Debug, thiserror::Error)]
pub enum RerankError {
    #[error("rerank request unauthorized for provider '{provider}' (HTTP {status})")]
    Unauthorized { provider: String, status: u16 },

    #[error(
        "rerank request failed for provider '{provider}' after {attempts} attempts: {reason}"
    )]
    RetriesExhausted {
        provider: String,
        attempts: u32,
        reason: String,
    },

    #[error("rerank request failed for provider '{provider}' (HTTP {status}): {body}")]
    Http {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("rerank response from provider '{provider}' is not valid JSON: {reason}")]
    InvalidJson { provider: String, reason: String },

    #[error(
        "rerank response from provider '{provider}' scored {filled}/{expected} documents"
    )]
    ScoreCountMismatch {
        provider: String,
        filled: usize,
        expected: usize,
    },
}
