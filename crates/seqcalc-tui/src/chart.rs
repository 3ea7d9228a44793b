//! Line chart of term value against position.

use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use seqcalc_core::format::format_term;
use seqcalc_core::SequenceResult;

use crate::styles::ColorTheme;

/// `(position, value)` pairs with 1-indexed positions. Non-finite terms are
/// left out so a single overflow does not flatten the plot.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn chart_points(terms: &[f64]) -> Vec<(f64, f64)> {
    terms
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| ((i + 1) as f64, v))
        .collect()
}

/// Axis bounds covering `points`, padded when a range collapses to a point.
#[must_use]
pub fn axis_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    if points.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (pad(x_min, x_max), pad(y_min, y_max))
}

fn pad(min: f64, max: f64) -> [f64; 2] {
    if max > min {
        [min, max]
    } else {
        let delta = (min.abs() * 0.1).max(1.0);
        [min - delta, max + delta]
    }
}

/// Render the chart for `result`.
pub fn render_chart(frame: &mut Frame, area: Rect, result: &SequenceResult, theme: &ColorTheme) {
    let points = chart_points(&result.terms);
    let (x_bounds, y_bounds) = axis_bounds(&points);

    let dataset = Dataset::default()
        .name("aₙ")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.success_style())
        .data(&points);

    let x_axis = Axis::default()
        .title("n")
        .style(theme.muted_style())
        .bounds(x_bounds)
        .labels(vec![format_term(x_bounds[0]), format_term(x_bounds[1])]);
    let y_axis = Axis::default()
        .title("aₙ")
        .style(theme.muted_style())
        .bounds(y_bounds)
        .labels(vec![format_term(y_bounds[0]), format_term(y_bounds[1])]);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sequence Chart ")
                .border_style(theme.border_style()),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
