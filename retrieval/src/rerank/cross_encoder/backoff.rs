/// Exponential backoff base for retry attempt `attempt` (0-indexed): base
/// 0.5s doubling per attempt, capped at 8s (spec §4.6 "Retry on HTTP 429 and
/// 5xx").
pub fn backoff_base_seconds(attempt: u32) -> f64 {
    (0.5 * 2f64.powi(attempt as i32)).min(8.0)
}

/// Jitter sampled uniformly from `[0, min(0.5, base))`.
pub fn sample_jitter(base: f64) -> f64 {
    rand::random::<f64>() * base.min(0.5)
}

/// Resolves the actual sleep duration for a retry: an explicit
/// `Retry-After` header wins outright; otherwise exponential backoff plus
/// jitter.
pub fn resolve_delay_seconds(attempt: u32, retry_after: Option<f64>, jitter: f64) -> f64 {
    match retry_after {
        Some(seconds) if seconds >= 0.0 => seconds,
        _ => backoff_base_seconds(attempt) + jitter,
    }
}
