//! Request handling and result analysis.

use std::time::Instant;

use seqcalc_core::constants::SUM_RELATIVE_TOLERANCE;
use seqcalc_core::engine::compute_with;
use seqcalc_core::progression::SeqError;
use seqcalc_core::registry::ProgressionFactory;
use seqcalc_core::request::SequenceRequest;

use crate::interfaces::SequenceReport;

/// Validate and compute one request.
///
/// Invalid term counts are rejected before anything is computed.
pub fn handle_request(
    request: &SequenceRequest,
    factory: &dyn ProgressionFactory,
) -> Result<SequenceReport, SeqError> {
    let term_count = request.validate().inspect_err(|e| {
        tracing::debug!(term_count = request.term_count, error = %e, "rejected request");
    })?;

    let progression = factory.create(request.kind, request.first_term, request.step);
    let start = Instant::now();
    let result = compute_with(progression.as_ref(), term_count)?;
    let duration = start.elapsed();

    tracing::debug!(
        kind = request.kind.name(),
        first_term = request.first_term,
        step = request.step,
        term_count,
        ?duration,
        "computed sequence"
    );

    Ok(SequenceReport {
        request: *request,
        formula: request.formula(),
        result,
        duration,
    })
}

/// Compare the closed-form sum against the plain sum of the terms.
///
/// Non-finite sums (overflowed terms) are not compared.
pub fn cross_check_sum(report: &SequenceReport) -> Result<(), SeqError> {
    let closed_form = report.result.sum;
    let enumerated = report.result.enumerated_sum();
    if !closed_form.is_finite() || !enumerated.is_finite() {
        return Ok(());
    }

    let scale: f64 = report.result.terms.iter().map(|t| t.abs()).sum();
    if (closed_form - enumerated).abs() > SUM_RELATIVE_TOLERANCE * scale.max(1.0) {
        return Err(SeqError::SumMismatch {
            closed_form,
            enumerated,
        });
    }
    Ok(())
}
