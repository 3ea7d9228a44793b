//! Geometric progressions: a, a·r, a·r², ...

use crate::progression::{Progression, SeqError, SequenceKind};

/// Geometric progression with a constant multiplicative step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricProgression {
    first: f64,
    ratio: f64,
}

impl GeometricProgression {
    #[must_use]
    pub fn new(first: f64, ratio: f64) -> Self {
        Self { first, ratio }
    }

    /// The common ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Progression for GeometricProgression {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Geometric
    }

    fn first_term(&self) -> f64 {
        self.first
    }

    fn step(&self) -> f64 {
        self.ratio
    }

    fn term(&self, index: u32) -> f64 {
        self.first * self.ratio.powf(f64::from(index))
    }

    /// a·n when r is exactly 1, otherwise a(1 − rⁿ)/(1 − r).
    ///
    /// The comparison against 1 is exact. Ratios very close to 1 take the
    /// general branch and lose precision to cancellation.
    #[allow(clippy::float_cmp)]
    fn sum(&self, term_count: u32) -> f64 {
        if term_count == 0 {
            return 0.0;
        }
        let n = f64::from(term_count);
        if self.ratio == 1.0 {
            self.first * n
        } else {
            self.first * (1.0 - self.ratio.powf(n)) / (1.0 - self.ratio)
        }
    }

    fn name(&self) -> &str {
        "Geometric"
    }
}

/// Generate the first `term_count` terms of a geometric sequence.
///
/// # Example
/// ```
/// let terms = seqcalc_core::generate_geometric(1.0, 2.0, 6).unwrap();
/// assert_eq!(terms, [1.0, 2.0, 4.0, 8.0, 16.0, 32.0]);
/// ```
pub fn generate_geometric(
    first_term: f64,
    common_ratio: f64,
    term_count: u32,
) -> Result<Vec<f64>, SeqError> {
    GeometricProgression::new(first_term, common_ratio).generate(term_count)
}

/// Closed-form sum of the first `term_count` terms. Zero when `term_count` is zero.
#[must_use]
pub fn sum_geometric(first_term: f64, common_ratio: f64, term_count: u32) -> f64 {
    GeometricProgression::new(first_term, common_ratio).sum(term_count)
}
