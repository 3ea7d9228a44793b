//! Progression trait, sequence kinds and the shared error type.
//!
//! `Progression` is the trait consumed by orchestration and the front ends.
//! `ArithmeticProgression` and `GeometricProgression` implement it; the free
//! `generate_*` / `sum_*` functions are thin wrappers over them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{DEFAULT_COMMON_DIFFERENCE, DEFAULT_COMMON_RATIO, MIN_TERMS};

/// Error type for sequence requests and their presentation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeqError {
    /// A parameter is out of its accepted range.
    #[error("{0}")]
    InvalidArgument(String),

    /// Configuration error (unknown kind name, bad flag combination).
    #[error("configuration error: {0}")]
    Config(String),

    /// Closed-form sum and enumerated sum disagree beyond tolerance.
    #[error("series sum mismatch: closed form {closed_form}, enumerated {enumerated}")]
    SumMismatch { closed_form: f64, enumerated: f64 },

    /// Writing an export failed.
    #[error("export failed: {0}")]
    Export(String),
}

impl SeqError {
    pub(crate) fn term_count_too_small() -> Self {
        Self::InvalidArgument("Number of terms must be a positive integer.".into())
    }

    pub(crate) fn term_count_too_large() -> Self {
        Self::InvalidArgument("Number of terms cannot exceed 1000 for performance reasons.".into())
    }
}

/// The two supported sequence families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// Constant additive step.
    Arithmetic,
    /// Constant multiplicative step.
    Geometric,
}

impl SequenceKind {
    /// All kinds, in display order.
    pub const ALL: [SequenceKind; 2] = [SequenceKind::Arithmetic, SequenceKind::Geometric];

    /// Lowercase machine name, used in file names and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Arithmetic => "arithmetic",
            Self::Geometric => "geometric",
        }
    }

    /// Capitalised label for headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Arithmetic => "Arithmetic",
            Self::Geometric => "Geometric",
        }
    }

    /// Label of the step parameter.
    #[must_use]
    pub fn step_label(self) -> &'static str {
        match self {
            Self::Arithmetic => "Common Difference",
            Self::Geometric => "Common Ratio",
        }
    }

    /// Default step offered by the input form.
    #[must_use]
    pub fn default_step(self) -> f64 {
        match self {
            Self::Arithmetic => DEFAULT_COMMON_DIFFERENCE,
            Self::Geometric => DEFAULT_COMMON_RATIO,
        }
    }

    /// The other kind.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Arithmetic => Self::Geometric,
            Self::Geometric => Self::Arithmetic,
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SequenceKind {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arithmetic" | "arith" | "a" => Ok(Self::Arithmetic),
            "geometric" | "geom" | "g" => Ok(Self::Geometric),
            other => Err(SeqError::Config(format!("unknown sequence kind: {other}"))),
        }
    }
}

/// A progression defined by a first term and a step.
pub trait Progression: Send + Sync {
    /// Which family this progression belongs to.
    fn kind(&self) -> SequenceKind;

    /// The first term.
    fn first_term(&self) -> f64;

    /// The common difference or common ratio.
    fn step(&self) -> f64;

    /// Term at the 0-indexed `index`, by closed form.
    fn term(&self, index: u32) -> f64;

    /// Sum of the first `term_count` terms, by closed form. Zero for an
    /// empty series.
    fn sum(&self, term_count: u32) -> f64;

    /// Get the name of this progression.
    fn name(&self) -> &str;

    /// The first `term_count` terms.
    ///
    /// Rejects `term_count == 0` with [`SeqError::InvalidArgument`].
    fn generate(&self, term_count: u32) -> Result<Vec<f64>, SeqError> {
        if term_count < MIN_TERMS {
            return Err(SeqError::term_count_too_small());
        }
        Ok((0..term_count).map(|i| self.term(i)).collect())
    }
}
