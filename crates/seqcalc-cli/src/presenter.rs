//! CLI result presenter.

use seqcalc_core::export::{render_csv, CsvHeader};
use seqcalc_core::format::join_terms;
use seqcalc_orchestration::interfaces::{ResultPresenter, SequenceReport};

use crate::output::{
    format_duration, render_details, render_json, render_table, render_terms, OutputFormat,
};
use crate::ui::{print_error, print_header, print_info};

/// CLI result presenter.
pub struct CLIResultPresenter {
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
    csv_header: CsvHeader,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, verbose: bool, quiet: bool) -> Self {
        Self {
            format,
            verbose,
            quiet,
            csv_header: CsvHeader::Standard,
        }
    }

    /// Header style used by the `csv` output format.
    #[must_use]
    pub fn with_csv_header(mut self, csv_header: CsvHeader) -> Self {
        self.csv_header = csv_header;
        self
    }

    fn present_text(&self, report: &SequenceReport, details: bool) {
        if self.quiet {
            println!("{}", join_terms(&report.result.terms));
            return;
        }

        print_header(&format!("Generated {} Sequence", report.request.kind.label()));
        print_info("Formula", &report.formula);
        println!("{}", render_terms(&report.result, self.verbose));

        if details {
            println!();
            println!("{}", render_details(report));
        }
        if self.verbose {
            println!("Computed in {}", format_duration(report.duration));
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, report: &SequenceReport, details: bool) {
        tracing::debug!(format = ?self.format, terms = report.result.len(), "presenting report");
        match self.format {
            OutputFormat::Text => self.present_text(report, details),
            OutputFormat::Table => {
                if !self.quiet {
                    print_header(&format!("Generated {} Sequence", report.request.kind.label()));
                }
                print!("{}", render_table(&report.result));
                if details && !self.quiet {
                    println!("{}", render_details(report));
                }
            }
            OutputFormat::Json => match render_json(report) {
                Ok(json) => println!("{json}"),
                Err(e) => self.present_error(&format!("JSON encoding failed: {e}")),
            },
            OutputFormat::Csv => print!("{}", render_csv(&report.result, self.csv_header)),
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
