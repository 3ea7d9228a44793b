//! Input form: field state, editing and conversion into a request.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use seqcalc_core::format::format_term;
use seqcalc_core::{parse_term_count, SeqError, SequenceKind, SequenceRequest};

use crate::styles::ColorTheme;

/// Longest text accepted in a numeric field.
const MAX_FIELD_LEN: usize = 24;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    FirstTerm,
    Step,
    TermCount,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Kind,
        FormField::FirstTerm,
        FormField::Step,
        FormField::TermCount,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Editable form state. Numeric fields hold the raw text as typed.
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: SequenceKind,
    pub first_term: String,
    pub step: String,
    pub term_count: String,
    pub focus: FormField,
    /// Whether the user typed into the step field since the last kind switch.
    step_edited: bool,
}

impl FormState {
    /// A form pre-filled with the defaults for `kind`.
    #[must_use]
    pub fn new(kind: SequenceKind) -> Self {
        Self::from_request(&SequenceRequest::defaults(kind))
    }

    /// A form pre-filled from `request`.
    #[must_use]
    pub fn from_request(request: &SequenceRequest) -> Self {
        Self {
            kind: request.kind,
            first_term: format_term(request.first_term),
            step: format_term(request.step),
            term_count: request.term_count.to_string(),
            focus: FormField::Kind,
            step_edited: false,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Switch kind. An untouched step follows the new kind's default.
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        if !self.step_edited {
            self.step = format_term(self.kind.default_step());
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Kind => None,
            FormField::FirstTerm => Some(&mut self.first_term),
            FormField::Step => Some(&mut self.step),
            FormField::TermCount => Some(&mut self.term_count),
        }
    }

    /// Type a character into the focused field.
    ///
    /// Space toggles the kind field; numeric fields accept digits, sign,
    /// decimal point and exponent characters only.
    pub fn insert_char(&mut self, c: char) {
        if self.focus == FormField::Kind {
            if c == ' ' {
                self.toggle_kind();
            }
            return;
        }
        let accepted = match self.focus {
            FormField::TermCount => c.is_ascii_digit() || c == '-',
            _ => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        };
        if !accepted {
            return;
        }
        if self.focus == FormField::Step {
            self.step_edited = true;
        }
        if let Some(text) = self.focused_text() {
            if text.len() < MAX_FIELD_LEN {
                text.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.focus == FormField::Step {
            self.step_edited = true;
        }
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Parse the fields into a request.
    ///
    /// Only parsing happens here; the term-count range is checked by the
    /// request handler.
    pub fn to_request(&self) -> Result<SequenceRequest, SeqError> {
        let first_term = parse_real(&self.first_term, "First Term")?;
        let step = parse_real(&self.step, self.kind.step_label())?;
        let term_count = parse_term_count(&self.term_count).map_err(|_| {
            SeqError::InvalidArgument("Number of terms must be a positive integer.".into())
        })?;
        Ok(SequenceRequest::new(self.kind, first_term, step, term_count))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(SequenceKind::Arithmetic)
    }
}

fn parse_real(text: &str, label: &str) -> Result<f64, SeqError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SeqError::InvalidArgument(format!("{label} must be a number.")))
}

/// Render the input form.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState, theme: &ColorTheme) {
    let field = |f: FormField, label: &str, value: String| {
        let focused = form.focus == f;
        let marker = if focused { "> " } else { "  " };
        let value_style = if focused {
            theme.focus_style()
        } else {
            theme.text_style()
        };
        Line::from(vec![
            Span::styled(marker, theme.focus_style()),
            Span::styled(format!("{label:<18}"), theme.muted_style()),
            Span::styled(value, value_style),
        ])
    };

    let kind_value = format!("◂ {} ▸", form.kind.label());
    let lines = vec![
        field(FormField::Kind, "Sequence Type", kind_value),
        field(FormField::FirstTerm, "First Term", form.first_term.clone()),
        field(FormField::Step, form.kind.step_label(), form.step.clone()),
        field(FormField::TermCount, "Number of Terms", form.term_count.clone()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Input Parameters ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
