//! # seqcalc-cli
//!
//! CLI output in text, table, JSON and CSV form, styled console helpers,
//! and shell completion.

pub mod about;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::OutputFormat;
pub use presenter::CLIResultPresenter;
