use std::collections::HashMap;

/// Memoized stars-and-bars interleaving counts.
///
/// `interleavings(bars, elements)` is the number of ways to interleave `bars`
/// indistinguishable separators with `elements` indistinguishable items,
/// `(bars + elements)! / (bars! elements!)`. The cache is append-only and
/// never evicted: the set of distinct pairs requested is bounded by the work
/// the significance engine performs, so unbounded memoization is intentional.
///
/// Values are computed as multiplicative binomials in `f64`, which is exact
/// below 2^53 and avoids the intermediate factorial overflow a naive
/// `n! / (k! (n-k)!)` evaluation would hit long before the result itself
/// leaves integer range. Beyond 2^53 results round to the nearest double.
#[derive(Debug, Clone, Default)]
pub struct CoefficientCache {
    table: HashMap<(u32, u32), f64>,
}

impl CoefficientCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the interleaving count for the given pair, memoizing it.
    pub fn interleavings(&mut self, bars: u32, elements: u32) -> f64 {
        if let Some(&value) = self.table.get(&(bars, elements)) {
            return value;
        }
        let value = binomial(u64::from(bars) + u64::from(elements), u64::from(elements));
        self.table.insert((bars, elements), value);
        value
    }

    /// Returns the number of memoized pairs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true when no pair has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Multiplicative binomial coefficient. Every partial product is itself a
/// binomial coefficient, so the accumulator stays integral (and exact in f64)
/// for as long as the running value fits in 53 bits.
fn binomial(n: u64, k: u64) -> f64 {
    let k = k.min(n - k);
    let mut acc = 1.0_f64;
    for i in 1..=k {
        acc = acc * (n - k + i) as f64 / i as f64;
    }
    acc
}
