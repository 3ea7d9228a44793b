//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use seqcalc_core::request::SequenceRequest;
use seqcalc_core::result::SequenceResult;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a computed sequence.
    fn present_report(&self, report: &SequenceReport, details: bool);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Outcome of one handled request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceReport {
    /// The request as entered.
    pub request: SequenceRequest,
    /// Rendered n-th term formula.
    pub formula: String,
    /// Terms and sum.
    pub result: SequenceResult,
    /// Computation duration.
    #[serde(skip)]
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_without_duration() {
        let report = SequenceReport {
            request: SequenceRequest::arithmetic(2.0, 3.0, 2),
            formula: "a_n = 2 + (n-1) × 3".into(),
            result: SequenceResult::new(vec![2.0, 5.0], 7.0),
            duration: Duration::from_millis(3),
        };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["request"]["kind"], "arithmetic");
        assert_eq!(json["request"]["term_count"], 2);
        assert_eq!(json["result"]["sum"], 7.0);
        assert!(json.get("duration").is_none());
    }
}
