//! Property-based tests for the sequence engine.

use proptest::prelude::*;

use seqcalc_core::{
    generate_arithmetic, generate_geometric, sum_arithmetic, sum_geometric, MAX_TERMS,
};

/// Relative comparison scaled by the largest magnitude involved, so that
/// cancellation inside a sum does not make the tolerance meaningless.
fn close(actual: f64, expected: f64, scale: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * scale.max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// First and last arithmetic terms follow the n-th term formula.
    #[test]
    fn arithmetic_endpoints(a in -1e6f64..1e6, d in -1e3f64..1e3, n in 1u32..=MAX_TERMS) {
        let terms = generate_arithmetic(a, d, n).unwrap();
        prop_assert_eq!(terms.len(), n as usize);
        prop_assert_eq!(terms[0], a);
        prop_assert_eq!(terms[n as usize - 1], a + f64::from(n - 1) * d);
    }

    /// Closed-form arithmetic sum agrees with the enumerated sum.
    #[test]
    fn arithmetic_sum_matches_terms(a in -1e6f64..1e6, d in -1e3f64..1e3, n in 1u32..=MAX_TERMS) {
        let terms = generate_arithmetic(a, d, n).unwrap();
        let scale: f64 = terms.iter().map(|t| t.abs()).sum();
        let enumerated: f64 = terms.iter().sum();
        prop_assert!(close(sum_arithmetic(a, d, n), enumerated, scale));
    }

    /// Closed-form geometric sum agrees with the enumerated sum away from r = 1.
    #[test]
    fn geometric_sum_matches_terms(
        a in -1e3f64..1e3,
        r in prop_oneof![-1.5f64..0.9, 1.1f64..1.5],
        n in 1u32..200,
    ) {
        let terms = generate_geometric(a, r, n).unwrap();
        let scale: f64 = terms.iter().map(|t| t.abs()).sum::<f64>() / (1.0 - r).abs().min(1.0);
        let enumerated: f64 = terms.iter().sum();
        let closed = sum_geometric(a, r, n);
        prop_assert!(
            close(closed, enumerated, scale),
            "a={} r={} n={}: closed {} vs enumerated {}",
            a,
            r,
            n,
            closed,
            enumerated
        );
    }

    /// A unit ratio takes the exact a·n branch.
    #[test]
    fn geometric_unit_ratio_is_exact(a in -1e6f64..1e6, n in 1u32..=MAX_TERMS) {
        prop_assert_eq!(sum_geometric(a, 1.0, n), a * f64::from(n));
    }

    /// The first geometric term is always the first term.
    #[test]
    fn geometric_first_term(a in -1e6f64..1e6, r in -10f64..10.0, n in 1u32..50) {
        let terms = generate_geometric(a, r, n).unwrap();
        prop_assert_eq!(terms[0], a);
        prop_assert_eq!(terms.len(), n as usize);
    }
}

/// n = 1 yields `[a]` with sum `a` for both kinds.
#[test]
fn single_term_boundary() {
    for a in [0.0, 1.0, -7.5, 1e12] {
        assert_eq!(generate_arithmetic(a, 3.0, 1).unwrap(), vec![a]);
        assert_eq!(generate_geometric(a, 3.0, 1).unwrap(), vec![a]);
        assert!((sum_arithmetic(a, 3.0, 1) - a).abs() < 1e-9 * a.abs().max(1.0));
        assert!((sum_geometric(a, 3.0, 1) - a).abs() < 1e-9 * a.abs().max(1.0));
    }
}

/// n = 1000 completes with exactly 1000 elements.
#[test]
fn upper_boundary() {
    assert_eq!(generate_arithmetic(0.0, 1.0, MAX_TERMS).unwrap().len(), 1000);
    assert_eq!(generate_geometric(1.0, 0.99, MAX_TERMS).unwrap().len(), 1000);
}

/// n = 0 is rejected by both generators; both sums are zero.
#[test]
fn zero_terms_boundary() {
    assert!(generate_arithmetic(1.0, 1.0, 0).is_err());
    assert!(generate_geometric(1.0, 2.0, 0).is_err());
    assert_eq!(sum_arithmetic(1.0, 1.0, 0), 0.0);
    assert_eq!(sum_geometric(1.0, 2.0, 0), 0.0);
}
