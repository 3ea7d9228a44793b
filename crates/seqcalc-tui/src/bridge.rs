//! Worker thread that computes requests off the UI thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use seqcalc_core::{ProgressionFactory, SequenceRequest};
use seqcalc_orchestration::{cross_check_sum, handle_request};

use crate::messages::TuiMessage;

/// Spawn the compute worker.
///
/// The worker runs until the request channel closes. Each request yields a
/// `Computed` or `Error` message; a failed sum cross-check adds a warning.
pub fn spawn_worker(
    factory: Arc<dyn ProgressionFactory>,
    requests: Receiver<SequenceRequest>,
    tx: Sender<TuiMessage>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("seqcalc-worker".into())
        .spawn(move || {
            for request in &requests {
                process(factory.as_ref(), &request, &tx);
            }
            tracing::debug!("worker channel closed");
        })
}

fn process(factory: &dyn ProgressionFactory, request: &SequenceRequest, tx: &Sender<TuiMessage>) {
    match handle_request(request, factory) {
        Ok(report) => {
            if let Err(e) = cross_check_sum(&report) {
                let _ = tx.send(TuiMessage::Log(format!("[WARN] {e}")));
            }
            let _ = tx.send(TuiMessage::Log(format!(
                "{} terms of {} computed in {:.3?}",
                report.result.len(),
                report.formula,
                report.duration
            )));
            let _ = tx.send(TuiMessage::Computed(Box::new(report)));
        }
        Err(e) => {
            let _ = tx.send(TuiMessage::Error(e.to_string()));
        }
    }
}
