//! Sequence details panel and the textual sequence preview.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use seqcalc_core::format::{format_sum, format_term, preview_terms, sum_label};
use seqcalc_core::TermsPreview;
use seqcalc_orchestration::SequenceReport;

use crate::styles::ColorTheme;

/// Render the "Sequence Details" panel: first, last, sum and count.
pub fn render_details(
    frame: &mut Frame,
    area: Rect,
    report: Option<&SequenceReport>,
    theme: &ColorTheme,
) {
    let text = match report {
        Some(report) => {
            let result = &report.result;
            let kind = report.request.kind;
            let row = |label: &str, value: String| {
                Line::from(vec![
                    Span::styled(format!("{label:<14}"), theme.muted_style()),
                    Span::styled(value, theme.text_style()),
                ])
            };
            vec![
                row("First Term", result.first().map_or_else(String::new, format_term)),
                row("Last Term", result.last().map_or_else(String::new, format_term)),
                row(sum_label(kind), format_sum(kind, result.sum)),
                row("Total Terms", result.len().to_string()),
            ]
        }
        None => vec![Line::styled(
            "Press Enter to generate a sequence.",
            theme.muted_style(),
        )],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sequence Details ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Lines shown in the preview panel for `report`.
#[must_use]
pub fn preview_lines(report: &SequenceReport) -> Vec<String> {
    match preview_terms(&report.result.terms) {
        TermsPreview::Inline(all) => vec![format!("Sequence: {all}")],
        TermsPreview::HeadTail { head, tail } => vec![
            format!("First 10 terms: {head}"),
            format!("Last 10 terms: {tail}"),
        ],
    }
}

/// Render the textual sequence preview, wrapped to the panel width.
pub fn render_preview(
    frame: &mut Frame,
    area: Rect,
    report: Option<&SequenceReport>,
    theme: &ColorTheme,
) {
    let text: Vec<Line> = match report {
        Some(report) => preview_lines(report)
            .into_iter()
            .map(|l| Line::styled(l, theme.success_style()))
            .collect(),
        None => Vec::new(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sequence ")
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render a one-off status message (for example a validation error)
/// in place of the preview.
pub fn render_status(frame: &mut Frame, area: Rect, message: &str, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(theme.error_style());
    let paragraph = Paragraph::new(Line::styled(message.to_string(), theme.error_style()))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the in-flight notice while the worker computes a request.
pub fn render_pending(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sequence ")
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(Line::styled("Computing…", theme.warning_style())).block(block);
    frame.render_widget(paragraph, area);
}
