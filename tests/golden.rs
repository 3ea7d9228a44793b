//! Golden file integration tests.
//!
//! Reads tests/testdata/sequences_golden.json and checks every route into
//! the engine (plain functions, progression objects, the factory-backed
//! handler) against the recorded terms, sums and export file names.

use seqcalc_core::export::export_filename;
use seqcalc_core::registry::DefaultFactory;
use seqcalc_core::{
    compute, generate_arithmetic, generate_geometric, sum_arithmetic, sum_geometric, SeqError,
    SequenceKind, SequenceRequest,
};
use seqcalc_orchestration::{cross_check_sum, handle_request};
use seqcalc_tests::{load_golden, GoldenCase};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn assert_terms(case: &GoldenCase, actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{}: length", case.name);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq(*a, *e), "{}: term {} is {a}, expected {e}", case.name, i + 1);
    }
}

fn request(case: &GoldenCase) -> SequenceRequest {
    let kind: SequenceKind = case.kind.parse().expect("golden kind");
    SequenceRequest::new(kind, case.first_term, case.step, case.term_count)
}

fn valid_cases() -> Vec<GoldenCase> {
    load_golden()
        .expect("failed to load golden file")
        .cases
        .into_iter()
        .filter(|c| c.error.is_none())
        .collect()
}

#[test]
fn golden_file_loads() {
    let data = load_golden().expect("failed to load golden file");
    assert!(!data.description.is_empty());
    assert!(data.cases.len() >= 10);
}

#[test]
fn golden_terms_via_functions() {
    for case in valid_cases() {
        let n = u32::try_from(case.term_count).unwrap();
        let terms = match case.kind.as_str() {
            "arithmetic" => generate_arithmetic(case.first_term, case.step, n),
            _ => generate_geometric(case.first_term, case.step, n),
        }
        .unwrap();
        assert_terms(&case, &terms, case.terms.as_ref().unwrap());
    }
}

#[test]
fn golden_sums_via_functions() {
    for case in valid_cases() {
        let n = u32::try_from(case.term_count).unwrap();
        let sum = match case.kind.as_str() {
            "arithmetic" => sum_arithmetic(case.first_term, case.step, n),
            _ => sum_geometric(case.first_term, case.step, n),
        };
        let expected = case.sum.unwrap();
        assert!(approx_eq(sum, expected), "{}: sum {sum}, expected {expected}", case.name);
    }
}

#[test]
fn golden_via_engine() {
    for case in valid_cases() {
        let result = compute(&request(&case)).unwrap();
        assert_terms(&case, &result.terms, case.terms.as_ref().unwrap());
        assert!(approx_eq(result.sum, case.sum.unwrap()), "{}", case.name);
    }
}

#[test]
fn golden_via_handler() {
    let factory = DefaultFactory::new();
    for case in valid_cases() {
        let report = handle_request(&request(&case), &factory).unwrap();
        assert_terms(&case, &report.result.terms, case.terms.as_ref().unwrap());
        assert!(cross_check_sum(&report).is_ok(), "{}", case.name);
    }
}

#[test]
fn golden_export_filenames() {
    for case in valid_cases() {
        if let Some(expected) = &case.csv_filename {
            assert_eq!(&export_filename(&request(&case)), expected, "{}", case.name);
        }
    }
}

#[test]
fn golden_rejections() {
    let factory = DefaultFactory::new();
    let data = load_golden().expect("failed to load golden file");
    for case in data.cases.iter().filter(|c| c.error.is_some()) {
        let err = handle_request(&request(case), &factory).unwrap_err();
        assert_eq!(
            err,
            SeqError::InvalidArgument(case.error.clone().unwrap()),
            "{}",
            case.name
        );
    }
}
