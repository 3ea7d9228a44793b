//! Request-level entry point into the sequence engine.

use crate::arithmetic::ArithmeticProgression;
use crate::constants::MIN_TERMS;
use crate::geometric::GeometricProgression;
use crate::iterator::ProgressionIter;
use crate::progression::{Progression, SeqError, SequenceKind};
use crate::request::SequenceRequest;
use crate::result::SequenceResult;

/// Validate `request`, then compute its terms and closed-form sum.
///
/// # Example
/// ```
/// use seqcalc_core::{compute, SequenceRequest};
/// let result = compute(&SequenceRequest::geometric(2.0, 3.0, 4)).unwrap();
/// assert_eq!(result.terms, [2.0, 6.0, 18.0, 54.0]);
/// assert_eq!(result.sum, 80.0);
/// ```
pub fn compute(request: &SequenceRequest) -> Result<SequenceResult, SeqError> {
    let term_count = request.validate()?;
    compute_with(progression_for(request).as_ref(), term_count)
}

/// Compute `term_count` terms and the sum of an already-built progression.
pub fn compute_with(
    progression: &dyn Progression,
    term_count: u32,
) -> Result<SequenceResult, SeqError> {
    if term_count < MIN_TERMS {
        return Err(SeqError::term_count_too_small());
    }
    let terms = ProgressionIter::new(progression)
        .take(term_count as usize)
        .map(|(_, value)| value)
        .collect();
    let sum = progression.sum(term_count);
    Ok(SequenceResult::new(terms, sum))
}

/// Build the progression described by `request`.
#[must_use]
pub fn progression_for(request: &SequenceRequest) -> Box<dyn Progression> {
    match request.kind {
        SequenceKind::Arithmetic => Box::new(ArithmeticProgression::new(
            request.first_term,
            request.step,
        )),
        SequenceKind::Geometric => {
            Box::new(GeometricProgression::new(request.first_term, request.step))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn scenario_arithmetic_increasing() {
        let r = compute(&SequenceRequest::arithmetic(2.0, 3.0, 5)).unwrap();
        assert_eq!(r.terms, vec![2.0, 5.0, 8.0, 11.0, 14.0]);
        assert!(approx(r.sum, 40.0));
    }

    #[test]
    fn scenario_arithmetic_decreasing() {
        let r = compute(&SequenceRequest::arithmetic(10.0, -2.0, 6)).unwrap();
        assert_eq!(r.terms, vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert!(approx(r.sum, 30.0));
    }

    #[test]
    fn scenario_geometric_halving() {
        let r = compute(&SequenceRequest::geometric(100.0, 0.5, 5)).unwrap();
        assert_eq!(r.terms, vec![100.0, 50.0, 25.0, 12.5, 6.25]);
        assert!(approx(r.sum, 193.75));
    }

    #[test]
    fn scenario_geometric_doubling() {
        let r = compute(&SequenceRequest::geometric(1.0, 2.0, 6)).unwrap();
        assert_eq!(r.terms, vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0]);
        assert!(approx(r.sum, 63.0));
    }

    #[test]
    fn rejects_invalid_counts_before_computing() {
        for n in [0, -5, 1001] {
            assert!(matches!(
                compute(&SequenceRequest::geometric(1.0, 2.0, n)),
                Err(SeqError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn single_term_both_kinds() {
        for request in [
            SequenceRequest::arithmetic(4.25, 9.0, 1),
            SequenceRequest::geometric(4.25, 9.0, 1),
        ] {
            let r = compute(&request).unwrap();
            assert_eq!(r.terms, vec![4.25]);
            assert!(approx(r.sum, 4.25));
        }
    }

    #[test]
    fn compute_with_zero_terms_fails() {
        let p = ArithmeticProgression::new(1.0, 1.0);
        assert!(compute_with(&p, 0).is_err());
    }

    #[test]
    fn progression_for_dispatches_on_kind() {
        let p = progression_for(&SequenceRequest::geometric(3.0, 2.0, 3));
        assert_eq!(p.kind(), SequenceKind::Geometric);
        assert!((p.step() - 2.0).abs() < f64::EPSILON);
    }
}
