//! "About" text: explanation plus worked examples for a sequence kind.

use std::fmt::Write as _;

use seqcalc_core::format::{format_term, join_terms};
use seqcalc_core::worked::{examples, explanation};
use seqcalc_core::SequenceKind;

/// Render the explanation and worked examples for `kind`.
#[must_use]
pub fn render_about(kind: SequenceKind) -> String {
    let mut out = format!("About {} Sequences\n\n", kind.label());
    out.push_str(explanation(kind));
    out.push_str("\n\nExamples\n");
    for (i, example) in examples(kind).iter().enumerate() {
        let _ = writeln!(
            out,
            "\n  Example {}: First term = {}, {} = {}, Number of terms = {}",
            i + 1,
            format_term(example.first_term),
            kind.step_label(),
            format_term(example.step),
            example.term_count
        );
        let _ = writeln!(out, "    Sequence: {}", join_terms(example.terms));
        if let Some(sum) = example.sum {
            let _ = writeln!(out, "    Sum: {}", format_term(sum));
        }
    }
    out
}
