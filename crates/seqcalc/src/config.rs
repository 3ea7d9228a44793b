//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use seqcalc_cli::OutputFormat;
use seqcalc_core::constants::{DEFAULT_FIRST_TERM, DEFAULT_TERM_COUNT};
use seqcalc_core::{parse_term_count, SequenceKind, SequenceRequest};

/// SeqCalc-rs: arithmetic and geometric sequence generator.
#[derive(Parser, Debug)]
#[command(name = "seqcalc", version, about, allow_negative_numbers = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Sequence kind: arithmetic or geometric.
    #[arg(short, long, default_value = "arithmetic", env = "SEQCALC_KIND")]
    pub kind: String,

    /// First term of the sequence.
    #[arg(
        short = 'a',
        long = "first",
        default_value_t = DEFAULT_FIRST_TERM,
        env = "SEQCALC_FIRST"
    )]
    pub first_term: f64,

    /// Common difference (arithmetic) or common ratio (geometric).
    /// Defaults to 1 for arithmetic and 2 for geometric.
    #[arg(short, long, env = "SEQCALC_STEP")]
    pub step: Option<f64>,

    /// Number of terms to generate (1 to 1000).
    #[arg(
        short = 'n',
        long = "terms",
        default_value_t = DEFAULT_TERM_COUNT,
        env = "SEQCALC_TERMS",
        value_parser = parse_term_count
    )]
    pub term_count: i64,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the CSV export to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the CSV export under its generated file name.
    #[arg(long)]
    pub export: bool,

    /// Directory used by --export.
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,

    /// CSV header row: standard or compact.
    #[arg(long, default_value = "standard")]
    pub csv_header: String,

    /// Quiet mode (only output the terms).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (print every term).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the sequence details block.
    #[arg(short, long)]
    pub details: bool,

    /// Explain the sequence kind with worked examples.
    #[arg(long)]
    pub about: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Step value, falling back to the default for `kind`.
    #[must_use]
    pub fn step_for(&self, kind: SequenceKind) -> f64 {
        self.step.unwrap_or_else(|| kind.default_step())
    }

    /// Build the request for `kind` from the parsed flags.
    #[must_use]
    pub fn request(&self, kind: SequenceKind) -> SequenceRequest {
        SequenceRequest::new(kind, self.first_term, self.step_for(kind), self.term_count)
    }
}
