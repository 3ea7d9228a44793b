//! TUI application model (Elm architecture).

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use seqcalc_core::export::{export_filename, write_csv, CsvHeader};
use seqcalc_core::SequenceRequest;
use seqcalc_orchestration::SequenceReport;

use crate::chart::render_chart;
use crate::details::{render_details, render_pending, render_preview, render_status};
use crate::footer::render_footer;
use crate::form::{render_form, FormField, FormState};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::render_logs;
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;
use crate::table::render_table;

/// Log entries kept in memory.
const MAX_LOG_LINES: usize = 500;

/// Rows moved by PageUp/PageDown in the table.
const TABLE_PAGE: usize = 10;

/// Which visualization fills the results area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView {
    Table,
    Chart,
}

impl ResultView {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Chart,
            Self::Chart => Self::Table,
        }
    }
}

/// Screen regions, top to bottom and left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub details: Rect,
    pub logs: Rect,
    pub preview: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Input form.
    pub form: FormState,
    /// Current results visualization.
    pub view: ResultView,
    /// Result of the last accepted request; dropped when a request is rejected.
    pub report: Option<SequenceReport>,
    /// Last validation or export error, cleared by the next success.
    pub error: Option<String>,
    /// Whether a request is in flight. Submits are ignored until it lands.
    pub pending: bool,
    /// Log messages.
    pub logs: Vec<String>,
    /// First table row shown.
    pub table_offset: usize,
    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
    /// Header style for CSV exports.
    pub csv_header: CsvHeader,
    theme: ColorTheme,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Requests for the compute worker.
    requests: Sender<SequenceRequest>,
}

impl TuiApp {
    /// Create a new TUI app with the form pre-filled from `initial`.
    #[must_use]
    pub fn new(
        rx: Receiver<TuiMessage>,
        requests: Sender<SequenceRequest>,
        initial: &SequenceRequest,
    ) -> Self {
        Self {
            should_quit: false,
            form: FormState::from_request(initial),
            view: ResultView::Table,
            report: None,
            error: None,
            pending: false,
            logs: Vec::new(),
            table_offset: 0,
            export_dir: PathBuf::from("."),
            csv_header: CsvHeader::default(),
            theme: ColorTheme::default(),
            rx,
            requests,
        }
    }

    /// Configure where and how CSV exports are written.
    #[must_use]
    pub fn with_export(mut self, dir: impl Into<PathBuf>, header: CsvHeader) -> Self {
        self.export_dir = dir.into();
        self.csv_header = header;
        self
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Computed(report) => {
                self.pending = false;
                self.error = None;
                self.table_offset = 0;
                self.report = Some(*report);
            }
            TuiMessage::Error(err) => {
                self.pending = false;
                self.report = None;
                self.table_offset = 0;
                self.show_error(err);
            }
            TuiMessage::Log(msg) => self.push_log(msg),
            TuiMessage::Exported(path) => {
                self.push_log(format!("Exported {}", path.display()));
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    fn show_error(&mut self, err: String) {
        self.push_log(format!("[ERROR] {err}"));
        self.error = Some(err);
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.remove(0);
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Input(c) => self.form.insert_char(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::Left | KeyAction::Right => {
                if self.form.focus == FormField::Kind {
                    self.form.toggle_kind();
                }
            }
            KeyAction::Submit => self.submit(),
            KeyAction::ToggleView => self.view = self.view.toggled(),
            KeyAction::Export => self.export(),
            KeyAction::PageUp => {
                self.table_offset = self.table_offset.saturating_sub(TABLE_PAGE);
            }
            KeyAction::PageDown => {
                let last = self.result_len().saturating_sub(1);
                self.table_offset = (self.table_offset + TABLE_PAGE).min(last);
            }
            KeyAction::Home => self.table_offset = 0,
            KeyAction::End => self.table_offset = self.result_len().saturating_sub(1),
            KeyAction::None => {}
        }
    }

    fn result_len(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.result.len())
    }

    /// Parse the form and hand the request to the worker.
    pub fn submit(&mut self) {
        if self.pending {
            self.push_log("[WARN] Still computing the previous request.".into());
            return;
        }
        match self.form.to_request() {
            Ok(request) => self.send_request(request),
            Err(e) => self.handle_message(TuiMessage::Error(e.to_string())),
        }
    }

    /// Send `request` to the worker.
    pub fn send_request(&mut self, request: SequenceRequest) {
        if self.requests.send(request).is_err() {
            self.handle_message(TuiMessage::Error("compute worker is not running".into()));
            return;
        }
        self.pending = true;
        tracing::debug!(kind = request.kind.name(), term_count = request.term_count, "submitted");
    }

    /// Export the current result as CSV into the export directory.
    pub fn export(&mut self) {
        let Some(report) = &self.report else {
            self.push_log("[WARN] Nothing to export yet. Press Enter to generate.".into());
            return;
        };
        let path = self.export_dir.join(export_filename(&report.request));
        // A failed write keeps the report so the export can be retried.
        match write_csv(&path, &report.result, self.csv_header) {
            Ok(()) => self.handle_message(TuiMessage::Exported(path)),
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Split the screen: form, details and log on the left, preview and
    /// table or chart on the right.
    #[must_use]
    pub fn compute_layout(area: Rect) -> AppLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(8),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // form
                Constraint::Length(6), // details
                Constraint::Min(3),    // logs
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(5)])
            .split(columns[1]);

        AppLayout {
            header: outer[0],
            form: left[0],
            details: left[1],
            logs: left[2],
            preview: right[0],
            results: right[1],
            footer: outer[2],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());
        let theme = &self.theme;
        let report = self.report.as_ref();

        let kind = report.map_or(self.form.kind, |r| r.request.kind);
        render_header(frame, layout.header, kind, report.map(|r| r.formula.as_str()));
        render_form(frame, layout.form, &self.form, theme);
        render_details(frame, layout.details, report, theme);
        render_logs(frame, layout.logs, &self.logs, theme);

        if self.pending {
            render_pending(frame, layout.preview, theme);
        } else if let Some(err) = &self.error {
            render_status(frame, layout.preview, err, theme);
        } else {
            render_preview(frame, layout.preview, report, theme);
        }

        if let Some(report) = report {
            match self.view {
                ResultView::Table => {
                    render_table(frame, layout.results, &report.result, self.table_offset, theme);
                }
                ResultView::Chart => render_chart(frame, layout.results, &report.result, theme),
            }
        }

        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// The terminal is restored even when drawing or event polling fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let outcome = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        outcome
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            // Resizes need no handling: the next draw picks up the new size.
            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_message(TuiMessage::KeyPress(map_key(key_event)));
                    }
                }
            }

            self.update();
        }
    }
}
