//! # seqcalc-core
//!
//! Core library for SeqCalc-rs: arithmetic and geometric sequences, their
//! closed-form series sums, request validation, number formatting and CSV
//! export.

pub mod arithmetic;
pub mod constants;
pub mod engine;
pub mod export;
pub mod format;
pub mod geometric;
pub mod iterator;
pub mod progression;
pub mod registry;
pub mod request;
pub mod result;
pub mod worked;

// Re-exports
pub use arithmetic::{generate_arithmetic, sum_arithmetic, ArithmeticProgression};
pub use constants::{exit_codes, INLINE_DISPLAY_LIMIT, MAX_TERMS, MIN_TERMS, PREVIEW_TERMS};
pub use engine::{compute, compute_with, progression_for};
pub use export::{export_filename, render_csv, write_csv, CsvHeader};
pub use format::{format_sum, format_term, preview_terms, TermsPreview};
pub use geometric::{generate_geometric, sum_geometric, GeometricProgression};
pub use progression::{Progression, SeqError, SequenceKind};
pub use registry::{DefaultFactory, ProgressionFactory};
pub use request::{parse_term_count, SequenceRequest};
pub use result::SequenceResult;
