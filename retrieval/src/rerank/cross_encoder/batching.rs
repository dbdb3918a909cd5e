use std::collections::HashMap;

use codesearch_core::traits::RerankPair;

/// ~4 characters per token (spec §4.6 "Estimate tokens").
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / 4
}

/// Groups pair indices by their (unique) query string, preserving the order
/// in which each query first appears (spec §4.6 "Group candidates by unique
/// query").
pub fn group_by_query(pairs: &[RerankPair]) -> Vec<(String, Vec<usize>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, pair) in pairs.iter().enumerate() {
        if !groups.contains_key(&pair.query) {
            order.push(pair.query.clone());
        }
        groups.entry(pair.query.clone()).or_default().push(idx);
    }
    order.into_iter().map(|q| { let idxs = groups.remove(&q).unwrap(); (q, idxs) }).collect()
}

/// Greedily packs one query's document indices into token-budgeted batches
/// so that `query_tokens + sum(doc_tokens) <= 0.9 * max_input_tokens` (spec
/// §4.6). A document that alone exceeds the per-batch budget is still placed
/// in its own (oversized) batch, with a warning logged by the caller.
pub fn make_batches(query: &str, doc_indices: &[usize], documents: &[String], max_input_tokens: usize) -> Vec<Vec<usize>> {
    let budget = (max_input_tokens as f64 * 0.9) as usize;
    let query_tokens = estimate_tokens(query);
    let doc_budget = budget.saturating_sub(query_tokens);

    let mut batches: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut current_tokens = 0usize;

    for &idx in doc_indices {
        let doc_tokens = estimate_tokens(&documents[idx]);
        if doc_tokens > doc_budget {
            tracing::warn!(doc_tokens, doc_budget, "single document exceeds reranker token budget");
        }
        if !current.is_empty() && current_tokens + doc_tokens > doc_budget {
            batches.push(std::mem::take(&mut current));
            current_tokens = 0;
        }
        current.push(idx);
        current_tokens += doc_tokens;
    }
    if !current.is_empty() {
        batches.push(current);
    }
    batches
}
