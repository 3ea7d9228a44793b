//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use seqcalc_core::SequenceKind;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, kind: SequenceKind, formula: Option<&str>) {
    let mut spans = vec![
        Span::styled("SeqCalc-rs", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" | {} sequence", kind.label())),
    ];
    if let Some(formula) = formula {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            formula.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Sequence Generator ");

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
