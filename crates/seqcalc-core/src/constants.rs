//! Limits and display constants shared by every front end.

/// Smallest accepted term count.
pub const MIN_TERMS: u32 = 1;

/// Largest accepted term count.
pub const MAX_TERMS: u32 = 1000;

/// Sequences up to this length are rendered inline; longer ones get a
/// head/tail preview.
pub const INLINE_DISPLAY_LIMIT: usize = 50;

/// Number of terms shown at each end of a head/tail preview.
pub const PREVIEW_TERMS: usize = 10;

/// Default first term offered by the input form.
pub const DEFAULT_FIRST_TERM: f64 = 1.0;

/// Default common difference for arithmetic sequences.
pub const DEFAULT_COMMON_DIFFERENCE: f64 = 1.0;

/// Default common ratio for geometric sequences.
pub const DEFAULT_COMMON_RATIO: f64 = 2.0;

/// Default term count offered by the input form.
pub const DEFAULT_TERM_COUNT: i64 = 10;

/// Relative tolerance used when comparing a closed-form sum against the
/// enumerated sum of terms.
pub const SUM_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Closed-form sum disagreed with the enumerated terms.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
