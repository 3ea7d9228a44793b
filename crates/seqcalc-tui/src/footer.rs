//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = vec![Line::from(vec![
        key("Tab"),
        Span::raw(": next field | "),
        key("←/→"),
        Span::raw(": type | "),
        key("Enter"),
        Span::raw(": generate | "),
        key("^T"),
        Span::raw(": table/chart | "),
        key("^S"),
        Span::raw(": export CSV | "),
        key("Esc"),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
