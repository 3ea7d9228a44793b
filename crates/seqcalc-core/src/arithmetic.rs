//! Arithmetic progressions: a, a + d, a + 2d, ...

use crate::progression::{Progression, SeqError, SequenceKind};

/// Arithmetic progression with a constant additive step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticProgression {
    first: f64,
    difference: f64,
}

impl ArithmeticProgression {
    #[must_use]
    pub fn new(first: f64, difference: f64) -> Self {
        Self { first, difference }
    }

    /// The common difference.
    #[must_use]
    pub fn difference(&self) -> f64 {
        self.difference
    }
}

impl Progression for ArithmeticProgression {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Arithmetic
    }

    fn first_term(&self) -> f64 {
        self.first
    }

    fn step(&self) -> f64 {
        self.difference
    }

    fn term(&self, index: u32) -> f64 {
        self.first + f64::from(index) * self.difference
    }

    /// n/2 × (2a + (n−1)d).
    fn sum(&self, term_count: u32) -> f64 {
        if term_count == 0 {
            return 0.0;
        }
        let n = f64::from(term_count);
        n / 2.0 * (2.0 * self.first + (n - 1.0) * self.difference)
    }

    fn name(&self) -> &str {
        "Arithmetic"
    }
}

/// Generate the first `term_count` terms of an arithmetic sequence.
///
/// # Example
/// ```
/// let terms = seqcalc_core::generate_arithmetic(2.0, 3.0, 5).unwrap();
/// assert_eq!(terms, [2.0, 5.0, 8.0, 11.0, 14.0]);
/// ```
pub fn generate_arithmetic(
    first_term: f64,
    common_difference: f64,
    term_count: u32,
) -> Result<Vec<f64>, SeqError> {
    ArithmeticProgression::new(first_term, common_difference).generate(term_count)
}

/// Closed-form sum of the first `term_count` terms. Zero when `term_count` is zero.
#[must_use]
pub fn sum_arithmetic(first_term: f64, common_difference: f64, term_count: u32) -> f64 {
    ArithmeticProgression::new(first_term, common_difference).sum(term_count)
}
