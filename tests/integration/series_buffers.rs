//! Series buffer and chart sink behavior
//!
//! Verifies the FIFO capacity bound, wholesale replacement and the
//! render-suppression contract of the sink adapter.

use std::sync::atomic::Ordering;

use pretty_assertions::assert_eq;

use vitalwatch::charts::{SERIES_CAPACITY, ChartSink, SeriesBuffer, SeriesPoint};

use crate::helpers::{CountingSurface, counting_charts, reading_at};

#[test]
fn append_beyond_capacity_keeps_most_recent_in_order() {
    let mut buffer = SeriesBuffer::new();

    for i in 0..30 {
        buffer.append(SeriesPoint::new(format!("t{i}"), i as f64));
    }

    assert_eq!(buffer.len(), SERIES_CAPACITY);

    let values: Vec<f64> = buffer.iter().map(|p| p.value).collect();
    let expected: Vec<f64> = (10..30).map(|i| i as f64).collect();
    assert_eq!(values, expected);
}

#[test]
fn replace_all_truncates_to_last_capacity_entries() {
    let mut buffer = SeriesBuffer::new();
    buffer.append(SeriesPoint::new("stale", -1.0));

    let points: Vec<SeriesPoint> = (0..25)
        .map(|i| SeriesPoint::new(format!("t{i}"), i as f64))
        .collect();
    buffer.replace_all(points);

    assert_eq!(buffer.len(), SERIES_CAPACITY);
    let values: Vec<f64> = buffer.iter().map(|p| p.value).collect();
    let expected: Vec<f64> = (5..25).map(|i| i as f64).collect();
    assert_eq!(values, expected);
}

#[test]
fn replace_all_with_fewer_points_keeps_them_all() {
    let mut buffer = SeriesBuffer::new();
    buffer.replace_all(vec![
        SeriesPoint::new("a", 1.0),
        SeriesPoint::new("b", 2.0),
    ]);

    assert_eq!(buffer.len(), 2);
}

#[test]
fn clear_empties_the_buffer() {
    let mut buffer = SeriesBuffer::new();
    buffer.append(SeriesPoint::new("a", 1.0));

    buffer.clear();

    assert!(buffer.is_empty());
}

#[test]
fn sink_suppresses_repaints_until_requested() {
    let surface = CountingSurface::default();
    let counter = surface.0.clone();
    let mut sink = ChartSink::new(Box::new(surface));

    for i in 0..24 {
        sink.push_point(format!("t{i}"), i as f64, false);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    sink.push_point("t24", 24.0, true);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn paired_sink_advances_both_series_in_lock_step() {
    let mut sink = ChartSink::new_pair(Box::new(CountingSurface::default()));

    for i in 0..25 {
        sink.push_pair(format!("t{i}"), 120.0 + i as f64, 80.0 + i as f64, false);
    }

    let systolic = sink.series();
    let diastolic = sink.secondary_series().unwrap();
    assert_eq!(systolic.len(), SERIES_CAPACITY);
    assert_eq!(diastolic.len(), SERIES_CAPACITY);

    // Both series evicted the same heads
    assert_eq!(systolic.iter().next().unwrap().value, 125.0);
    assert_eq!(diastolic.iter().next().unwrap().value, 85.0);
}

#[test]
fn bulk_history_replay_costs_one_repaint_per_chart() {
    let (mut charts, counter) = counting_charts();

    let readings: Vec<_> = (0..25).map(reading_at).collect();
    charts.replace_history(&readings);

    // One redraw per chart (glucose, bp, spo2, heart rate), not per point
    assert_eq!(counter.load(Ordering::SeqCst), 4);
    assert_eq!(charts.glucose.series().len(), SERIES_CAPACITY);
}

#[test]
fn live_append_repaints_every_chart_immediately() {
    let (mut charts, counter) = counting_charts();

    charts.append_reading(&reading_at(0), true);
    assert_eq!(counter.load(Ordering::SeqCst), 4);

    charts.append_reading(&reading_at(1), true);
    assert_eq!(counter.load(Ordering::SeqCst), 8);
}
