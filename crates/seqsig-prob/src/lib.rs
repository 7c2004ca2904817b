#![deny(missing_docs)]
#![doc = "Combinatorial significance engine: given the run-length composition of a sequence, computes the probability (or raw count) that a uniformly random arrangement of the same multiset reveals the categories in order."]

mod coefficients;
mod engine;

pub use coefficients::CoefficientCache;
pub use engine::SignificanceEngine;
