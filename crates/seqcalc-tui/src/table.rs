//! Full-sequence table with 1-indexed positions.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Row, Table};
use ratatui::Frame;

use seqcalc_core::format::format_term;
use seqcalc_core::SequenceResult;

use crate::styles::ColorTheme;

/// Rows available for data once borders and the header row are taken.
#[must_use]
pub fn visible_rows(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(3))
}

/// Largest scroll offset that still fills the table.
#[must_use]
pub fn max_offset(total: usize, visible: usize) -> usize {
    total.saturating_sub(visible.max(1))
}

/// Render the table, starting at row `offset`.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    result: &SequenceResult,
    offset: usize,
    theme: &ColorTheme,
) {
    let visible = visible_rows(area);
    let offset = offset.min(max_offset(result.len(), visible));

    let rows: Vec<Row> = result
        .positioned()
        .skip(offset)
        .take(visible)
        .map(|(n, value)| Row::new(vec![n.to_string(), format_term(value)]))
        .collect();

    let title = if result.is_empty() {
        " Full Sequence ".to_string()
    } else {
        let last_shown = (offset + visible).min(result.len());
        format!(
            " Full Sequence ({}-{} of {}) ",
            offset + 1,
            last_shown,
            result.len()
        )
    };

    let header = Row::new(vec!["n", "aₙ"])
        .style(theme.header_style().add_modifier(Modifier::UNDERLINED));
    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(10)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border_style()),
        );

    frame.render_widget(table, area);
}
