use serde::Deserialize;

use codesearch_core::RerankError;

#[derive(Debug, Deserialize)]
pub struct RerankResponse {
    #[serde(default)]
    pub results: Vec<RerankResultItem>,
}

#[derive(Debug, Deserialize)]
pub struct RerankResultItem {
    pub index: usize,
    #[serde(default)]
    pub relevance_score: Option<f32>,
    #[serde(default)]
    pub score: Option<f32>,
}

impl RerankResultItem {
    fn score(&self) -> Option<f32> {
        self.relevance_score.or(self.score)
    }
}

/// Maps a provider's `results` array back onto a zero-filled, index-ordered
/// score vector (spec §4.6 "Parse a JSON object with a `results` array").
/// Requires exactly `expected` items to land, or the response is malformed.
pub fn extract_scores(response: &RerankResponse, expected: usize, provider: &str) -> Result<Vec<f32>, RerankError> {
    let mut scores = vec![0.0f32; expected];
    let mut filled = 0usize;
    for item in &response.results {
        if item.index >= expected {
            continue;
        }
        if let Some(score) = item.score() {
            scores[item.index] = score;
            filled += 1;
        }
    }
    if filled != expected {
        return Err(RerankError::ScoreCountMismatch { provider: provider.to_string(), filled, expected });
    }
    Ok(scores)
}
