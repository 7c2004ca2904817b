use proptest::collection::vec;
use proptest::prelude::*;
use seqsig_core::Composition;
use seqsig_prob::SignificanceEngine;

/// Arbitrary valid run-length vectors: short, small multiplicities, at
/// least one item overall.
fn arb_runs() -> impl Strategy<Value = Vec<u32>> {
    vec(0u32..5, 1..7).prop_filter("needs at least one item", |runs| {
        runs.iter().any(|&count| count > 0)
    })
}

/// Total arrangement count of the multiset, `total! / prod(runs!)`.
fn multinomial(runs: &[u32]) -> f64 {
    let mut value = 1.0_f64;
    let mut placed = 0_u64;
    for &count in runs {
        for offset in 1..=u64::from(count) {
            placed += 1;
            value = value * placed as f64 / offset as f64;
        }
    }
    value
}

proptest! {
    #[test]
    fn probability_stays_within_unit_interval(runs in arb_runs()) {
        let composition = Composition::new(runs).unwrap();
        let mut engine = SignificanceEngine::new();
        let probability = engine.probability(&composition);
        prop_assert!(probability >= 0.0);
        prop_assert!(probability <= 1.0 + 1e-12);
    }

    #[test]
    fn repeated_evaluation_is_idempotent(runs in arb_runs()) {
        let composition = Composition::new(runs).unwrap();
        let mut engine = SignificanceEngine::new();
        let first = engine.probability(&composition);
        let second = engine.probability(&composition);
        prop_assert_eq!(first.to_bits(), second.to_bits());

        let mut other = SignificanceEngine::new();
        prop_assert_eq!(first.to_bits(), other.probability(&composition).to_bits());
    }

    #[test]
    fn count_and_probability_agree_through_the_multinomial(runs in arb_runs()) {
        let composition = Composition::new(runs.clone()).unwrap();
        let mut engine = SignificanceEngine::new();
        let count = engine.count(&composition);
        let probability = engine.probability(&composition);
        let rescaled = probability * multinomial(&runs);
        let scale = count.abs().max(1.0);
        prop_assert!(
            (count - rescaled).abs() <= 1e-9 * scale,
            "count {} vs probability * multinomial {}",
            count,
            rescaled
        );
    }

    #[test]
    fn appending_an_empty_category_annihilates(runs in arb_runs()) {
        let mut extended = runs;
        extended.push(0);
        let composition = Composition::new(extended).unwrap();
        let mut engine = SignificanceEngine::new();
        prop_assert_eq!(engine.count(&composition), 0.0);
        prop_assert_eq!(engine.probability(&composition), 0.0);
    }

    #[test]
    fn counts_are_integral(runs in arb_runs()) {
        let composition = Composition::new(runs).unwrap();
        let mut engine = SignificanceEngine::new();
        let count = engine.count(&composition);
        prop_assert!(count >= 0.0);
        prop_assert_eq!(count, count.round());
    }
}
