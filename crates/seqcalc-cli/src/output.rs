//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use seqcalc_core::format::{format_sum, format_term, join_terms, preview_terms, sum_label};
use seqcalc_core::{SequenceResult, TermsPreview};
use seqcalc_orchestration::SequenceReport;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Heading, formula and the terms as text.
    #[default]
    Text,
    /// One `n | aₙ` row per term.
    Table,
    /// The full report as JSON.
    Json,
    /// The CSV export on stdout.
    Csv,
}

/// Terms as printed in text mode: inline, or a head/tail preview unless
/// `verbose` is set.
#[must_use]
pub fn render_terms(result: &SequenceResult, verbose: bool) -> String {
    if verbose {
        return format!("Sequence: {}", join_terms(&result.terms));
    }
    match preview_terms(&result.terms) {
        TermsPreview::Inline(all) => format!("Sequence: {all}"),
        TermsPreview::HeadTail { head, tail } => {
            format!("First 10 terms: {head}\nLast 10 terms: {tail}")
        }
    }
}

/// The "Sequence Details" block: first, last, sum, count.
#[must_use]
pub fn render_details(report: &SequenceReport) -> String {
    let result = &report.result;
    let kind = report.request.kind;
    let first = result.first().map_or_else(|| "-".to_string(), format_term);
    let last = result.last().map_or_else(|| "-".to_string(), format_term);

    let mut out = String::from("Sequence Details\n");
    let _ = writeln!(out, "  {:<13} {first}", "First Term:");
    let _ = writeln!(out, "  {:<13} {last}", "Last Term:");
    let _ = writeln!(
        out,
        "  {:<13} {}",
        format!("{}:", sum_label(kind)),
        format_sum(kind, result.sum)
    );
    let _ = write!(out, "  {:<13} {}", "Total Terms:", result.len());
    out
}

/// Two-column table with 1-indexed positions.
#[must_use]
pub fn render_table(result: &SequenceResult) -> String {
    let values: Vec<String> = result.terms.iter().map(|&t| format_term(t)).collect();
    let pos_width = result.len().to_string().len().max(1);
    let val_width = values.iter().map(|v| v.chars().count()).max().unwrap_or(0).max(2);

    let mut out = String::new();
    let _ = writeln!(out, "{:>pos_width$} | {:<val_width$}", "n", "aₙ");
    let _ = writeln!(out, "{}-+-{}", "-".repeat(pos_width), "-".repeat(val_width));
    for (i, value) in values.iter().enumerate() {
        let _ = writeln!(out, "{:>pos_width$} | {value}", i + 1);
    }
    out
}

/// Pretty-printed JSON for the whole report.
pub fn render_json(report: &SequenceReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}
