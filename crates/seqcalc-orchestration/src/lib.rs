//! # seqcalc-orchestration
//!
//! Request handling, kind selection, and result analysis.

pub mod handler;
pub mod interfaces;
pub mod kind_selection;

pub use handler::{cross_check_sum, handle_request};
pub use interfaces::{ResultPresenter, SequenceReport};
