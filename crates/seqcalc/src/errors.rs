//! Error handling and exit codes.

use seqcalc_core::constants::exit_codes;
use seqcalc_core::SeqError;

/// Exit code for a sequence error.
#[must_use]
pub fn handle_error(err: &SeqError) -> i32 {
    match err {
        SeqError::InvalidArgument(_) | SeqError::Config(_) => exit_codes::ERROR_CONFIG,
        SeqError::SumMismatch { .. } => exit_codes::ERROR_MISMATCH,
        SeqError::Export(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SeqError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
