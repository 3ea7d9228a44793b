//! Sequence requests as entered by the user, and their validation.

use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;

use crate::constants::{DEFAULT_FIRST_TERM, DEFAULT_TERM_COUNT, MAX_TERMS, MIN_TERMS};
use crate::format::format_term;
use crate::progression::{SeqError, SequenceKind};

/// One user request: which sequence and how many terms.
///
/// `term_count` keeps the raw signed value so that zero, negative and
/// oversized inputs can be rejected with a message instead of being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequenceRequest {
    pub kind: SequenceKind,
    pub first_term: f64,
    /// Common difference (arithmetic) or common ratio (geometric).
    pub step: f64,
    pub term_count: i64,
}

impl SequenceRequest {
    #[must_use]
    pub fn new(kind: SequenceKind, first_term: f64, step: f64, term_count: i64) -> Self {
        Self {
            kind,
            first_term,
            step,
            term_count,
        }
    }

    #[must_use]
    pub fn arithmetic(first_term: f64, common_difference: f64, term_count: i64) -> Self {
        Self::new(SequenceKind::Arithmetic, first_term, common_difference, term_count)
    }

    #[must_use]
    pub fn geometric(first_term: f64, common_ratio: f64, term_count: i64) -> Self {
        Self::new(SequenceKind::Geometric, first_term, common_ratio, term_count)
    }

    /// The form defaults for `kind`.
    #[must_use]
    pub fn defaults(kind: SequenceKind) -> Self {
        Self::new(kind, DEFAULT_FIRST_TERM, kind.default_step(), DEFAULT_TERM_COUNT)
    }

    /// Check the term count against `[MIN_TERMS, MAX_TERMS]`.
    ///
    /// Returns the count as `u32` on success.
    pub fn validate(&self) -> Result<u32, SeqError> {
        if self.term_count < i64::from(MIN_TERMS) {
            return Err(SeqError::term_count_too_small());
        }
        if self.term_count > i64::from(MAX_TERMS) {
            return Err(SeqError::term_count_too_large());
        }
        u32::try_from(self.term_count).map_err(|_| SeqError::term_count_too_large())
    }

    /// The n-th term formula, e.g. `a_n = 2 + (n-1) × 3`.
    #[must_use]
    pub fn formula(&self) -> String {
        let a = format_term(self.first_term);
        let step = format_term(self.step);
        match self.kind {
            SequenceKind::Arithmetic => format!("a_n = {a} + (n-1) × {step}"),
            SequenceKind::Geometric => format!("a_n = {a} × {step}^(n-1)"),
        }
    }
}

/// Parse a typed term count, saturating at the `i64` bounds.
///
/// Oversized input such as `99999999999999999999` becomes `i64::MAX` so that
/// [`SequenceRequest::validate`] rejects it as too large rather than as
/// malformed. Non-numeric input is still an error.
pub fn parse_term_count(text: &str) -> Result<i64, ParseIntError> {
    match text.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(e),
        },
    }
}
