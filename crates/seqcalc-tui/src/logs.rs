//! Activity log panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the newest log lines that fit in `area`.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], theme: &ColorTheme) {
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let start = logs.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = logs[start..]
        .iter()
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                theme.error_style()
            } else if log.starts_with("[WARN]") {
                theme.warning_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Log ")
            .border_style(theme.border_style()),
    );

    frame.render_widget(list, area);
}
