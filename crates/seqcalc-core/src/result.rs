//! Computed sequences.

use serde::Serialize;

/// Terms of a sequence together with its series sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceResult {
    pub terms: Vec<f64>,
    /// Closed-form sum of `terms`.
    pub sum: f64,
}

impl SequenceResult {
    #[must_use]
    pub fn new(terms: Vec<f64>, sum: f64) -> Self {
        Self { terms, sum }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.terms.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.terms.last().copied()
    }

    /// Sum of the terms by plain addition.
    #[must_use]
    pub fn enumerated_sum(&self) -> f64 {
        self.terms.iter().sum()
    }

    /// `(position, value)` pairs with 1-indexed positions, for display.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.terms.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }
}
