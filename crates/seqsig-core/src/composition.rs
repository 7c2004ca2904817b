use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SigError};

/// Ordered run-length vector describing a sequence's coarse structure.
///
/// `runs[i]` is the number of occurrences of the i-th category; `runs[0]` is
/// the anchor category whose items are considered already placed when the
/// significance engine starts revealing categories. Validity (`len >= 1`,
/// `sum >= 1`, all counts non-negative) is enforced at construction so the
/// engine never sees a degenerate vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Composition {
    runs: Vec<u32>,
}

impl Composition {
    /// Creates a composition from raw run lengths.
    ///
    /// Rejects empty vectors and vectors whose run lengths sum to zero.
    pub fn new(runs: Vec<u32>) -> Result<Self, SigError> {
        if runs.is_empty() {
            return Err(SigError::Composition(ErrorInfo::new(
                "empty-composition",
                "a composition requires at least one category",
            )));
        }
        if runs.iter().all(|&count| count == 0) {
            return Err(SigError::Composition(
                ErrorInfo::new(
                    "zero-length",
                    "run lengths sum to zero; nothing can be placed",
                )
                .with_context("categories", runs.len().to_string()),
            ));
        }
        Ok(Self { runs })
    }

    /// Derives the composition of an observed sequence.
    ///
    /// Categories are ordered by first occurrence, matching the sequential
    /// revelation order the significance engine assumes.
    pub fn of_sequence<T: Eq + Hash>(sequence: &[T]) -> Result<Self, SigError> {
        let mut counts: IndexMap<&T, u32> = IndexMap::new();
        for item in sequence {
            *counts.entry(item).or_insert(0) += 1;
        }
        Self::new(counts.into_values().collect())
    }

    /// Returns the run lengths in category order.
    pub fn runs(&self) -> &[u32] {
        &self.runs
    }

    /// Returns the total number of items across all categories.
    pub fn total(&self) -> usize {
        self.runs.iter().map(|&count| count as usize).sum()
    }

    /// Returns the number of categories, anchor included.
    pub fn categories(&self) -> usize {
        self.runs.len()
    }
}

impl TryFrom<Vec<u32>> for Composition {
    type Error = SigError;

    fn try_from(runs: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(runs)
    }
}

impl From<Composition> for Vec<u32> {
    fn from(composition: Composition) -> Self {
        composition.runs
    }
}
