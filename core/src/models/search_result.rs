use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// A value attached to a [`SearchResult`]'s metadata map. Fusion/rerank/boost
/// stages record provenance here (`fusion_score`, `original_score`,
/// `search_source`, `boosted`, `rrf_score`, `reranked`, `cosine_similarity`)
/// without needing a bespoke field per stage (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Float(f64),
    Bool(bool),
    Text(String),
}

impl MetadataValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Float(v)
    }
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::Text(v.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::Text(v)
    }
}

/// A single retrieval hit, produced by a backend adapter or synthesized by
/// fusion (spec §3 `SearchResult`).
///
/// `score` is clamped into `[0.0, f64::MAX]` at construction and NaN is
/// normalized to `0.0` — every stage downstream of a backend adapter can
/// rely on the invariant "every score is non-NaN and non-negative" without
/// re-validating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: String,
    score: f64,
    pub excerpt: String,
    pub content: Option<String>,
    pub symbol: Option<Symbol>,
    pub metadata: BTreeMap<String, MetadataValue>,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
}

impl SearchResult {
    pub fn new(path: impl Into<String>, score: f64, excerpt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            score: normalize_score(score),
            excerpt: excerpt.into(),
            content: None,
            symbol: None,
            metadata: BTreeMap::new(),
            start_line: None,
            end_line: None,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = normalize_score(score);
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn with_lines(mut self, start: u32, end: u32) -> Self {
        self.start_line = Some(start);
        self.end_line = Some(end);
        self
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    pub fn set_meta(&mut self, key: &str, value: impl Into<MetadataValue>) {
        self.metadata.insert(key.to_string(), value.into());
    }

    /// Richness rank used to pick a fusion representative when the same
    /// path appears in more than one source (spec §4.2 "for each path retain
    /// the representative ... prefer one with richest metadata: content >
    /// excerpt > symbol").
    pub fn richness(&self) -> u8 {
        let mut score = 0u8;
        if self.content.is_some() {
            score += 4;
        }
        if !self.excerpt.is_empty() {
            score += 2;
        }
        if self.symbol.is_some() {
            score += 1;
        }
        score
    }
}

fn normalize_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.max(0.0)
    }
}
