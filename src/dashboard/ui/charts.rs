//! Time-series chart widgets
//!
//! One braille line chart per vital, with the clinical thresholds drawn
//! into the y-axis bounds so the guide values are always visible.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::charts::{ChartSink, SeriesBuffer, VitalCharts};
use crate::thresholds::{
    BP_DIASTOLIC_RANGE, BP_SYSTOLIC_RANGE, GLUCOSE_RANGE, HEART_RATE_RANGE, SPO2_MIN,
};

/// Render the 2x2 chart grid
pub fn render(frame: &mut Frame, area: Rect, charts: &VitalCharts) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_series_chart(
        frame,
        top[0],
        "Glucose (mg/dL)",
        charts.glucose.series(),
        Color::Yellow,
        &[GLUCOSE_RANGE.0, GLUCOSE_RANGE.1],
    );
    render_bp_chart(frame, top[1], &charts.blood_pressure);
    render_series_chart(
        frame,
        bottom[0],
        "SpO₂ (%)",
        charts.spo2.series(),
        Color::Blue,
        &[SPO2_MIN],
    );
    render_series_chart(
        frame,
        bottom[1],
        "Heart Rate (BPM)",
        charts.heart_rate.series(),
        Color::Green,
        &[HEART_RATE_RANGE.0, HEART_RATE_RANGE.1],
    );
}

/// y-axis bounds covering the data and the threshold guides, padded
fn y_bounds(values: impl Iterator<Item = f64>, guides: &[f64]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;

    for value in values.chain(guides.iter().copied()) {
        min = min.min(value);
        max = max.max(value);
    }

    if min > max {
        return (0.0, 1.0);
    }

    let padding = ((max - min) * 0.1).max(1.0);
    (min - padding, max + padding)
}

fn x_labels(series: &SeriesBuffer) -> Vec<String> {
    let first = series.iter().next().map(|p| p.label.clone());
    let last = series.last().map(|p| p.label.clone());

    match (first, last) {
        (Some(first), Some(last)) if series.len() > 1 => vec![first, last],
        (Some(first), _) => vec![first],
        _ => Vec::new(),
    }
}

/// Render a single-series chart with threshold guide values on the y axis
fn render_series_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &SeriesBuffer,
    color: Color,
    guides: &[f64],
) {
    if series.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(title.to_string());
        frame.render_widget(block, area);
        return;
    }

    let data: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();

    let (y_min, y_max) = y_bounds(data.iter().map(|(_, v)| *v), guides);
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&data),
    ];

    let mut y_labels: Vec<String> = guides.iter().map(|g| format!("{:.0}", g)).collect();
    y_labels.insert(0, format!("{:.0}", y_min));
    y_labels.push(format!("{:.0}", y_max));

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels(series))
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([y_min, y_max]),
        );

    frame.render_widget(chart, area);
}

/// Render the blood pressure chart: systolic and diastolic in lock-step
fn render_bp_chart(frame: &mut Frame, area: Rect, sink: &ChartSink) {
    let systolic = sink.series();
    let Some(diastolic) = sink.secondary_series() else {
        return;
    };

    if systolic.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Blood Pressure (mmHg)");
        frame.render_widget(block, area);
        return;
    }

    let systolic_data: Vec<(f64, f64)> = systolic
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();
    let diastolic_data: Vec<(f64, f64)> = diastolic
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();

    let guides = [
        BP_DIASTOLIC_RANGE.0,
        BP_DIASTOLIC_RANGE.1,
        BP_SYSTOLIC_RANGE.0,
        BP_SYSTOLIC_RANGE.1,
    ];
    let all_values = systolic_data
        .iter()
        .chain(diastolic_data.iter())
        .map(|(_, v)| *v);
    let (y_min, y_max) = y_bounds(all_values, &guides);
    let x_max = (systolic.len().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("systolic")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&systolic_data),
        Dataset::default()
            .name("diastolic")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&diastolic_data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Blood Pressure (mmHg)"),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels(systolic))
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(vec![
                    format!("{:.0}", y_min),
                    format!("{:.0}", BP_DIASTOLIC_RANGE.1),
                    format!("{:.0}", BP_SYSTOLIC_RANGE.1),
                    format!("{:.0}", y_max),
                ])
                .bounds([y_min, y_max]),
        );

    frame.render_widget(chart, area);
}
