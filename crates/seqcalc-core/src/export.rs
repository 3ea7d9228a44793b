//! CSV export of a computed sequence.

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use crate::format::format_term;
use crate::progression::SeqError;
use crate::request::SequenceRequest;
use crate::result::SequenceResult;

/// Header row variant for CSV exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvHeader {
    /// `Term Position,Term Value`
    #[default]
    Standard,
    /// `n,aₙ`
    Compact,
}

impl CsvHeader {
    #[must_use]
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            Self::Standard => ("Term Position", "Term Value"),
            Self::Compact => ("n", "aₙ"),
        }
    }
}

impl FromStr for CsvHeader {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            other => Err(SeqError::Config(format!("unknown CSV header style: {other}"))),
        }
    }
}

/// Render the terms as CSV: a header row, then one `position,value` row per
/// term with 1-indexed positions.
#[must_use]
pub fn render_csv(result: &SequenceResult, header: CsvHeader) -> String {
    let (position, value) = header.columns();
    let mut out = String::with_capacity(16 * (result.len() + 1));
    let _ = writeln!(out, "{position},{value}");
    for (n, term) in result.positioned() {
        let _ = writeln!(out, "{n},{}", format_term(term));
    }
    out
}

/// File name embedding the kind and parameters,
/// e.g. `geometric_sequence_2_3_4.csv`.
#[must_use]
pub fn export_filename(request: &SequenceRequest) -> String {
    format!(
        "{}_sequence_{}_{}_{}.csv",
        request.kind.name(),
        format_term(request.first_term),
        format_term(request.step),
        request.term_count
    )
}

/// Write the CSV rendering of `result` to `path`.
pub fn write_csv(
    path: impl AsRef<Path>,
    result: &SequenceResult,
    header: CsvHeader,
) -> Result<(), SeqError> {
    let path = path.as_ref();
    std::fs::write(path, render_csv(result, header))
        .map_err(|e| SeqError::Export(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), rows = result.len(), "wrote CSV export");
    Ok(())
}
