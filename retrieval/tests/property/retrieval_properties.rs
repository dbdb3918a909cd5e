//! Property tests for the fusion kernel invariants (spec §8 "Invariants",
//! "Boundary behaviors"). Plain literal-example tests live alongside each
//! fusion function instead; this file is for properties that should hold
//! over arbitrary `BackendResults`/`FusionWeights`.

use std::collections::HashMap;

use proptest::prelude::*;

use codesearch_core::{BackendResults, FusionWeights, SearchResult, SourceId};
use codesearch_retrieval::fusion::{fuse_rrf, normalize_weights};

const SOURCES: [SourceId; 3] = [SourceId::Exact, SourceId::Fuzzy, SourceId::Vector];

fn arb_path() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.rs"
}

fn arb_results(max_len: usize) -> impl Strategy<Value = Vec<SearchResult>> {
    prop::collection::vec((arb_path(), 0.0f64..1.0), 0..=max_len).prop_map(|items| {
        items.into_iter().enumerate().map(|(rank, (path, score))| SearchResult::new(path, score - rank as f64 * 1e-6, "excerpt")).collect()
    })
}

fn arb_backend_results() -> impl Strategy<Value = BackendResults> {
    prop::collection::vec(arb_results(6), SOURCES.len()).prop_map(|lists| {
        SOURCES.iter().copied().zip(lists).collect::<BackendResults>()
    })
}

fn arb_weights() -> impl Strategy<Value = FusionWeights> {
    prop::collection::vec(0.01f64..5.0, SOURCES.len()).prop_map(|values| SOURCES.iter().copied().zip(values).collect::<FusionWeights>())
}

proptest! {
    /// "every path in the fused output appears at least once in some input source"
    #[test]
    fn every_fused_path_traces_back_to_a_source(results in arb_backend_results(), weights in arb_weights()) {
        let fused = fuse_rrf(&results, &weights, 60.0);
        let all_input_paths: std::collections::HashSet<&str> =
            results.values().flatten().map(|r| r.path.as_str()).collect();
        for result in &fused {
            prop_assert!(all_input_paths.contains(result.path.as_str()));
        }
    }

    /// "Normalizing weights {s: 2w} to {s: w} yields identical ordering."
    #[test]
    fn rescaling_weights_preserves_ordering(results in arb_backend_results(), weights in arb_weights(), factor in 0.01f64..10.0) {
        let scaled: FusionWeights = weights.iter().map(|(s, w)| (s, w * factor)).collect();

        let base_order: Vec<String> = fuse_rrf(&results, &weights, 60.0).into_iter().map(|r| r.path).collect();
        let scaled_order: Vec<String> = fuse_rrf(&results, &scaled, 60.0).into_iter().map(|r| r.path).collect();

        prop_assert_eq!(base_order, scaled_order);
    }

    /// "All-zero weights -> empty list."
    #[test]
    fn all_zero_weights_yield_empty_fusion(results in arb_backend_results()) {
        let zero_weights: FusionWeights = SOURCES.iter().copied().map(|s| (s, 0.0)).collect();
        let fused = fuse_rrf(&results, &zero_weights, 60.0);
        prop_assert!(fused.is_empty());
    }

    /// "NaN / Inf / negative weight sum -> weights passed through unchanged; fusion still completes."
    #[test]
    fn non_finite_weight_sum_does_not_panic(results in arb_backend_results()) {
        let weights: FusionWeights = HashMap::from([
            (SourceId::Exact, f64::NAN),
            (SourceId::Fuzzy, 1.0),
            (SourceId::Vector, 1.0),
        ])
        .into();
        let normalized = normalize_weights(&weights);
        prop_assert!(normalized.iter().any(|(_, w)| w.is_nan()));
        let _ = fuse_rrf(&results, &weights, 60.0);
    }

    /// "Duplicate paths inside one source -> first occurrence kept."
    #[test]
    fn duplicate_path_within_source_does_not_double_count(path in arb_path(), scores in prop::collection::vec(0.0f64..1.0, 2..5)) {
        let mut exact = Vec::new();
        for (i, score) in scores.iter().enumerate() {
            exact.push(SearchResult::new(path.clone(), score - i as f64 * 1e-6, "excerpt"));
        }
        let results: BackendResults = HashMap::from([(SourceId::Exact, exact)]);
        let weights: FusionWeights = HashMap::from([(SourceId::Exact, 1.0)]).into();

        let fused = fuse_rrf(&results, &weights, 60.0);
        prop_assert_eq!(fused.len(), 1);
        let expected = 1.0 / (60.0 + 1.0);
        prop_assert!((fused[0].score() - expected).abs() < 1e-9);
    }

    /// Large mixed-source result sets complete and stay sorted descending.
    #[test]
    fn large_result_sets_complete_and_stay_sorted(results in arb_backend_results(), weights in arb_weights()) {
        let fused = fuse_rrf(&results, &weights, 60.0);
        for window in fused.windows(2) {
            prop_assert!(window[0].score() >= window[1].score());
        }
    }
}
