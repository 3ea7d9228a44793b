//! Explanations and worked examples for each sequence kind.

use crate::progression::SequenceKind;
use crate::request::SequenceRequest;

/// A worked example with its expected terms and, when stated, its sum.
#[derive(Debug, Clone, Copy)]
pub struct WorkedExample {
    pub kind: SequenceKind,
    pub first_term: f64,
    pub step: f64,
    pub term_count: i64,
    pub terms: &'static [f64],
    pub sum: Option<f64>,
}

impl WorkedExample {
    #[must_use]
    pub fn request(&self) -> SequenceRequest {
        SequenceRequest::new(self.kind, self.first_term, self.step, self.term_count)
    }
}

const ARITHMETIC_EXAMPLES: [WorkedExample; 3] = [
    WorkedExample {
        kind: SequenceKind::Arithmetic,
        first_term: 2.0,
        step: 3.0,
        term_count: 5,
        terms: &[2.0, 5.0, 8.0, 11.0, 14.0],
        sum: Some(40.0),
    },
    WorkedExample {
        kind: SequenceKind::Arithmetic,
        first_term: 10.0,
        step: -2.0,
        term_count: 6,
        terms: &[10.0, 8.0, 6.0, 4.0, 2.0, 0.0],
        sum: Some(30.0),
    },
    WorkedExample {
        kind: SequenceKind::Arithmetic,
        first_term: 1.5,
        step: 0.5,
        term_count: 4,
        terms: &[1.5, 2.0, 2.5, 3.0],
        sum: None,
    },
];

const GEOMETRIC_EXAMPLES: [WorkedExample; 3] = [
    WorkedExample {
        kind: SequenceKind::Geometric,
        first_term: 2.0,
        step: 3.0,
        term_count: 4,
        terms: &[2.0, 6.0, 18.0, 54.0],
        sum: Some(80.0),
    },
    WorkedExample {
        kind: SequenceKind::Geometric,
        first_term: 100.0,
        step: 0.5,
        term_count: 5,
        terms: &[100.0, 50.0, 25.0, 12.5, 6.25],
        sum: Some(193.75),
    },
    WorkedExample {
        kind: SequenceKind::Geometric,
        first_term: 1.0,
        step: 2.0,
        term_count: 6,
        terms: &[1.0, 2.0, 4.0, 8.0, 16.0, 32.0],
        sum: Some(63.0),
    },
];

/// Worked examples for `kind`.
#[must_use]
pub fn examples(kind: SequenceKind) -> &'static [WorkedExample] {
    match kind {
        SequenceKind::Arithmetic => &ARITHMETIC_EXAMPLES,
        SequenceKind::Geometric => &GEOMETRIC_EXAMPLES,
    }
}

/// Plain-text explanation of `kind` and its formulas.
#[must_use]
pub fn explanation(kind: SequenceKind) -> &'static str {
    match kind {
        SequenceKind::Arithmetic => {
            "An arithmetic sequence is a sequence of numbers where each term after the first \
is obtained by adding a constant value (common difference) to the previous term.

Formula: a_n = a_1 + (n-1) × d

  a_n = nth term
  a_1 = first term
  d   = common difference
  n   = position of the term"
        }
        SequenceKind::Geometric => {
            "A geometric sequence is a sequence of numbers where each term after the first \
is obtained by multiplying the previous term by a constant value (common ratio).

Sequence formula: a_n = a_1 × r^(n-1)

Series sum formula:
  If r ≠ 1: S_n = a_1 × (1 - r^n) / (1 - r)
  If r = 1: S_n = n × a_1

  a_n = nth term
  a_1 = first term
  r   = common ratio
  n   = position of the term
  S_n = sum of first n terms"
        }
    }
}
