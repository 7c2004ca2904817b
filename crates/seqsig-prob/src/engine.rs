use seqsig_core::Composition;

use crate::coefficients::CoefficientCache;

/// Composition-probability engine.
///
/// For a composition `X`, [`count`](Self::count) is the number of distinct
/// arrangements of the underlying multiset that contain one item of every
/// category, in category order, as a subsequence (the anchor category `X[0]`
/// opens the chain). [`probability`](Self::probability) divides that mass by
/// the total number of arrangements, yielding the p-value-style likelihood
/// that a random shuffle is at least as structured as sequential revelation
/// of the categories.
///
/// The engine owns its [`CoefficientCache`]; results never depend on prior
/// cache contents, only the amount of recomputation does. Repeated
/// probability products taken by callers may underflow to zero for long
/// sequence collections; that is expected behavior, not an error.
#[derive(Debug, Clone, Default)]
pub struct SignificanceEngine {
    cache: CoefficientCache,
}

impl SignificanceEngine {
    /// Creates an engine with an empty coefficient cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine around an existing cache (e.g. a pre-warmed one).
    pub fn with_cache(cache: CoefficientCache) -> Self {
        Self { cache }
    }

    /// Returns a view of the coefficient cache.
    pub fn cache(&self) -> &CoefficientCache {
        &self.cache
    }

    /// Probability that a random arrangement reveals the categories in order.
    pub fn probability(&mut self, composition: &Composition) -> f64 {
        self.evaluate(composition, false)
    }

    /// Raw count of qualifying arrangements (unnormalized mode).
    ///
    /// Integral-valued as long as intermediate weights stay below 2^53.
    pub fn count(&mut self, composition: &Composition) -> f64 {
        self.evaluate(composition, true)
    }

    /// Dynamic program over placement positions.
    ///
    /// `placements[p]` carries the weight of all partial placements whose
    /// newest item ends at absolute position `p`. Each stage snapshots the
    /// reachable prefix, zeroes it, and redistributes every old weight over
    /// all ways the incoming category's items can interleave with the items
    /// already placed. The `(prev_end, cut, lead)` loop bounds encode a
    /// specific interleaving decomposition; they must not be reordered or
    /// merged.
    fn evaluate(&mut self, composition: &Composition, absolute: bool) -> f64 {
        let runs = composition.runs();
        let mut placements = vec![0.0_f64; composition.total()];
        placements[0] = 1.0;

        // Items contributed by categories before the current stage.
        let mut placed = 0_usize;
        for stage in 1..runs.len() {
            placed += runs[stage - 1] as usize;
            let incoming = runs[stage] as usize;
            let norm = if absolute {
                1.0
            } else {
                self.cache.interleavings(placed as u32, incoming as u32)
            };

            let snapshot: Vec<f64> = placements[..placed].to_vec();
            for slot in placements[..placed].iter_mut() {
                *slot = 0.0;
            }
            for (prev_end, weight) in snapshot.into_iter().enumerate() {
                for cut in prev_end + 1..=placed {
                    for lead in 0..incoming {
                        // `lead` incoming items interleave among the first
                        // `prev_end` old items; the rest land past `cut`.
                        let before = self.cache.interleavings(prev_end as u32, lead as u32);
                        let after = self
                            .cache
                            .interleavings((placed - cut) as u32, (incoming - lead - 1) as u32);
                        placements[cut + lead] += weight * before * after / norm;
                    }
                }
            }
        }

        placements.iter().sum()
    }
}
