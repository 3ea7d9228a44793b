//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};

use seqcalc_cli::about::render_about;
use seqcalc_cli::presenter::CLIResultPresenter;
use seqcalc_cli::ui::{print_success, print_warning};
use seqcalc_cli::OutputFormat;
use seqcalc_core::export::{export_filename, write_csv, CsvHeader};
use seqcalc_core::registry::DefaultFactory;
use seqcalc_core::{ProgressionFactory, SequenceRequest};
use seqcalc_orchestration::interfaces::ResultPresenter;
use seqcalc_orchestration::kind_selection::select_kind;
use seqcalc_orchestration::{cross_check_sum, handle_request};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        seqcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = Arc::new(DefaultFactory::new());
    let kind = select_kind(&config.kind, factory.as_ref())?;
    let csv_header: CsvHeader = config.csv_header.parse()?;

    if config.about {
        println!("{}\n", full_version());
        print!("{}", render_about(kind));
        return Ok(());
    }

    let request = config.request(kind);

    // Handle TUI mode
    if config.tui {
        return seqcalc_tui::run_tui(factory, request, config.export_dir.clone(), csv_header)
            .context("TUI error");
    }

    // CLI mode
    run_cli(config, factory.as_ref(), &request, csv_header)
}

fn run_cli(
    config: &AppConfig,
    factory: &dyn ProgressionFactory,
    request: &SequenceRequest,
    csv_header: CsvHeader,
) -> Result<()> {
    let report = handle_request(request, factory)?;

    let presenter = CLIResultPresenter::new(config.format, config.verbose, config.quiet)
        .with_csv_header(csv_header);
    presenter.present_report(&report, config.details);

    // Status lines would corrupt machine-readable output on stdout.
    let announce =
        !config.quiet && matches!(config.format, OutputFormat::Text | OutputFormat::Table);

    if let Some(path) = &config.output {
        write_csv(path, &report.result, csv_header)?;
        if announce {
            print_success(&format!("CSV written to {}", path.display()));
        }
    }

    if config.export {
        let path = config.export_dir.join(export_filename(request));
        write_csv(&path, &report.result, csv_header)?;
        if announce {
            print_success(&format!("Exported {}", path.display()));
        }
    }

    if let Err(e) = cross_check_sum(&report) {
        tracing::warn!(error = %e, "sum cross-check failed");
        if !config.quiet {
            print_warning(&e.to_string());
        }
    }

    Ok(())
}
