//! # seqcalc-tui
//!
//! Interactive sequence form using ratatui with Elm architecture.

pub mod bridge;
pub mod chart;
pub mod details;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod styles;
pub mod table;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crossbeam_channel::unbounded;

use seqcalc_core::export::CsvHeader;
use seqcalc_core::{ProgressionFactory, SequenceRequest};

pub use bridge::spawn_worker;
pub use form::{FormField, FormState};
pub use messages::TuiMessage;
pub use model::{ResultView, TuiApp};

/// Start the interactive mode with the form pre-filled from `initial`,
/// which is also generated right away.
pub fn run_tui(
    factory: Arc<dyn ProgressionFactory>,
    initial: SequenceRequest,
    export_dir: PathBuf,
    csv_header: CsvHeader,
) -> io::Result<()> {
    let (tx, rx) = unbounded();
    let (req_tx, req_rx) = unbounded();
    let worker = spawn_worker(factory, req_rx, tx)?;

    let mut app = TuiApp::new(rx, req_tx, &initial).with_export(export_dir, csv_header);
    app.send_request(initial);
    let outcome = app.run();

    // Dropping the app closes the request channel and stops the worker.
    drop(app);
    if worker.join().is_err() {
        tracing::warn!("compute worker panicked");
    }
    outcome
}
