//! Scatter chart rendering.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Subdivisions per axis for the background grid.
const GRID_STEPS: usize = 4;

/// Draw the scatter chart with both point series.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let (x_min, x_max) = padded_bounds(
        app.original
            .iter()
            .chain(app.translated.iter())
            .map(|&(x, _)| x),
    );
    let (y_min, y_max) = padded_bounds(
        app.original
            .iter()
            .chain(app.translated.iter())
            .map(|&(_, y)| y),
    );

    // Gridlines are plain line datasets, drawn first so the points land on
    // top of them.
    let grid_segments = gridline_segments(x_min, x_max, y_min, y_max);
    let mut datasets: Vec<Dataset<'_>> = grid_segments
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.bg2))
                .data(segment)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.aqua))
            .data(&app.original),
    );

    // Only the translated series carries a name, so the legend lists it alone.
    datasets.push(
        Dataset::default()
            .name("Translated Points")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.red))
            .data(&app.translated),
    );

    let x_axis = Axis::default()
        .title("X-Coordinate")
        .style(Style::default().fg(colors.fg0))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_axis = Axis::default()
        .title("Y-Coordinate")
        .style(Style::default().fg(colors.fg0))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(" Point Plot ")
                .title_style(Style::default().fg(colors.yellow)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Bounds of the given values with a 15% margin against edge clipping.
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    let span = (max - min).abs();
    // A flat span (single point, or all points collinear) still needs room.
    let padding = if span > 0.0 { span * 0.15 } else { 0.5 };
    (min - padding, max + padding)
}

fn gridline_segments(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::with_capacity(2 * (GRID_STEPS - 1));

    for i in 1..GRID_STEPS {
        let t = i as f64 / GRID_STEPS as f64;
        let x = x_min + (x_max - x_min) * t;
        segments.push(vec![(x, y_min), (x, y_max)]);

        let y = y_min + (y_max - y_min) * t;
        segments.push(vec![(x_min, y), (x_max, y)]);
    }

    segments
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_carry_a_margin() {
        let (min, max) = padded_bounds([0.0, 10.0].into_iter());
        assert!(min < 0.0 && max > 10.0);
        assert!((min - (-1.5)).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn flat_span_still_gets_room() {
        let (min, max) = padded_bounds([2.0, 2.0].into_iter());
        assert!(min < 2.0 && max > 2.0);
    }

    #[test]
    fn grid_spans_the_interior() {
        let segments = gridline_segments(0.0, 4.0, 0.0, 4.0);
        assert_eq!(segments.len(), 2 * (GRID_STEPS - 1));
        // Interior lines only, never on the chart border.
        for segment in &segments {
            for &(x, y) in segment {
                assert!((0.0..=4.0).contains(&x));
                assert!((0.0..=4.0).contains(&y));
            }
        }
    }

    #[test]
    fn axis_labels_use_smart_precision() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(2.5), "2.5");
        assert_eq!(format_axis_label(0.05), "0.05");
        assert_eq!(format_axis_label(12345.0), "12345");
        assert_eq!(format_axis_label(1e6), "1.0e6");
    }
}
