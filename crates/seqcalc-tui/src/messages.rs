//! TUI message types (Elm Messages).

use std::path::PathBuf;

use seqcalc_orchestration::SequenceReport;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A request finished computing.
    Computed(Box<SequenceReport>),
    /// A request was rejected or failed.
    Error(String),
    /// Log message.
    Log(String),
    /// A CSV export was written.
    Exported(PathBuf),
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Quit the application.
    Quit,
}
