//! Number formatting and textual previews of a sequence.

use crate::constants::{INLINE_DISPLAY_LIMIT, PREVIEW_TERMS};
use crate::progression::SequenceKind;

/// Magnitudes at or above this are printed in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e16;

/// Non-zero magnitudes below this are printed in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-6;

/// Format a term for display.
///
/// Uses the shortest decimal that round-trips, switching to scientific
/// notation for very large or very small magnitudes.
#[must_use]
pub fn format_term(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite()
        || magnitude == 0.0
        || (SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude)
    {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Join terms with `", "`.
#[must_use]
pub fn join_terms(terms: &[f64]) -> String {
    terms
        .iter()
        .map(|&t| format_term(t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Textual rendering of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermsPreview {
    /// Every term, comma separated.
    Inline(String),
    /// Only the first and last few terms.
    HeadTail { head: String, tail: String },
}

/// Render `terms` inline when short, otherwise as a head/tail preview.
#[must_use]
pub fn preview_terms(terms: &[f64]) -> TermsPreview {
    if terms.len() <= INLINE_DISPLAY_LIMIT {
        TermsPreview::Inline(join_terms(terms))
    } else {
        TermsPreview::HeadTail {
            head: join_terms(&terms[..PREVIEW_TERMS]),
            tail: join_terms(&terms[terms.len() - PREVIEW_TERMS..]),
        }
    }
}

/// Label used for the sum in the details block.
#[must_use]
pub fn sum_label(kind: SequenceKind) -> &'static str {
    match kind {
        SequenceKind::Arithmetic => "Sum of Terms",
        SequenceKind::Geometric => "Series Sum",
    }
}

/// Format a sum for the details block. Geometric sums get six decimals.
#[must_use]
pub fn format_sum(kind: SequenceKind, sum: f64) -> String {
    match kind {
        SequenceKind::Arithmetic => format_term(sum),
        SequenceKind::Geometric => format!("{sum:.6}"),
    }
}
