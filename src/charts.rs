//! Bounded chart series and their rendering adapters
//!
//! A [`SeriesBuffer`] is a fixed-capacity FIFO backing one plotted line.
//! A [`ChartSink`] binds one buffer (or a lock-stepped pair, for blood
//! pressure) to a [`RenderSurface`] so callers can batch bulk loads
//! without repainting per point. [`VitalCharts`] bundles the four chart
//! sinks of the dashboard.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};

use crate::Reading;

/// Maximum number of points kept per plotted series
pub const SERIES_CAPACITY: usize = 20;

/// One point of a plotted series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Formatted time label for the x axis
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Format a timestamp as a chart axis label.
pub fn time_label(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Fixed-capacity ordered sequence of series points with FIFO eviction.
///
/// The buffer performs no internal sorting; callers submit points in
/// timestamp order. The bulk-load path sorts before replacing.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    points: VecDeque<SeriesPoint>,
    capacity: usize,
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self::with_capacity(SERIES_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point at the tail, evicting the head when full.
    pub fn append(&mut self, point: SeriesPoint) {
        self.points.push_back(point);

        // Trim to capacity
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Replace the whole buffer with the last `capacity` entries of an
    /// ordered sequence.
    pub fn replace_all(&mut self, points: Vec<SeriesPoint>) {
        let skip = points.len().saturating_sub(self.capacity);
        self.points = points.into_iter().skip(skip).collect();
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }
}

impl Default for SeriesBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering handle a chart sink notifies when its data changed.
///
/// The TUI uses a shared [`RedrawFlag`]; tests can count invocations to
/// assert that bulk loads suppress per-point repaints.
pub trait RenderSurface {
    fn redraw(&mut self);
}

/// Shared dirty flag set by chart sinks and drained by the draw loop.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Arc<AtomicBool>);

impl RedrawFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and reset the flag.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl RenderSurface for RedrawFlag {
    fn redraw(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Binds one series buffer (or a lock-stepped pair) to a render surface.
pub struct ChartSink {
    primary: SeriesBuffer,
    secondary: Option<SeriesBuffer>,
    surface: Box<dyn RenderSurface + Send>,
}

impl ChartSink {
    /// Sink over a single series.
    pub fn new(surface: Box<dyn RenderSurface + Send>) -> Self {
        Self {
            primary: SeriesBuffer::new(),
            secondary: None,
            surface,
        }
    }

    /// Sink over a lock-stepped pair of series (systolic/diastolic).
    pub fn new_pair(surface: Box<dyn RenderSurface + Send>) -> Self {
        Self {
            primary: SeriesBuffer::new(),
            secondary: Some(SeriesBuffer::new()),
            surface,
        }
    }

    /// Append one point. Bulk loaders pass `update = false` for every
    /// point except the last to avoid repainting per point.
    pub fn push_point(&mut self, label: impl Into<String>, value: f64, update: bool) {
        self.primary.append(SeriesPoint::new(label, value));

        if update {
            self.surface.redraw();
        }
    }

    /// Append one point to each series of a pair, keeping them in
    /// lock-step.
    pub fn push_pair(&mut self, label: impl Into<String>, first: f64, second: f64, update: bool) {
        let label = label.into();
        self.primary.append(SeriesPoint::new(label.clone(), first));

        if let Some(secondary) = &mut self.secondary {
            secondary.append(SeriesPoint::new(label, second));
        }

        if update {
            self.surface.redraw();
        }
    }

    /// Empty all underlying buffers and repaint.
    pub fn clear(&mut self) {
        self.primary.clear();
        if let Some(secondary) = &mut self.secondary {
            secondary.clear();
        }
        self.surface.redraw();
    }

    /// Clear buffers without triggering a repaint; used by bulk replays
    /// that repaint once at the end.
    fn clear_silent(&mut self) {
        self.primary.clear();
        if let Some(secondary) = &mut self.secondary {
            secondary.clear();
        }
    }

    pub fn series(&self) -> &SeriesBuffer {
        &self.primary
    }

    /// Second series of a pair, if this sink holds one.
    pub fn secondary_series(&self) -> Option<&SeriesBuffer> {
        self.secondary.as_ref()
    }
}

impl std::fmt::Debug for ChartSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartSink")
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .finish_non_exhaustive()
    }
}

/// The four chart sinks of the dashboard, advanced together per reading.
pub struct VitalCharts {
    pub glucose: ChartSink,
    pub blood_pressure: ChartSink,
    pub spo2: ChartSink,
    pub heart_rate: ChartSink,
}

impl VitalCharts {
    pub fn new<F>(mut surface: F) -> Self
    where
        F: FnMut() -> Box<dyn RenderSurface + Send>,
    {
        Self {
            glucose: ChartSink::new(surface()),
            blood_pressure: ChartSink::new_pair(surface()),
            spo2: ChartSink::new(surface()),
            heart_rate: ChartSink::new(surface()),
        }
    }

    /// Charts sharing a single redraw flag, for the TUI draw loop.
    pub fn with_redraw_flag(flag: &RedrawFlag) -> Self {
        Self::new(|| Box::new(flag.clone()))
    }

    /// Append one reading to every chart.
    pub fn append_reading(&mut self, reading: &Reading, update: bool) {
        let label = time_label(&reading.timestamp);

        self.glucose.push_point(label.clone(), reading.glucose, update);
        self.blood_pressure.push_pair(
            label.clone(),
            reading.bp_systolic,
            reading.bp_diastolic,
            update,
        );
        self.spo2.push_point(label.clone(), reading.spo2, update);
        self.heart_rate.push_point(label, reading.heart_rate, update);
    }

    /// Rebuild every chart from an ascending-by-timestamp history slice.
    ///
    /// Repaints are suppressed for all but the final reading, so a bulk
    /// load costs one redraw regardless of length.
    pub fn replace_history(&mut self, readings: &[Reading]) {
        if readings.is_empty() {
            return;
        }

        self.glucose.clear_silent();
        self.blood_pressure.clear_silent();
        self.spo2.clear_silent();
        self.heart_rate.clear_silent();

        let last = readings.len() - 1;
        for (i, reading) in readings.iter().enumerate() {
            self.append_reading(reading, i == last);
        }
    }

    /// Empty every chart and repaint.
    pub fn clear(&mut self) {
        self.glucose.clear();
        self.blood_pressure.clear();
        self.spo2.clear();
        self.heart_rate.clear();
    }
}

impl std::fmt::Debug for VitalCharts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VitalCharts")
            .field("glucose", &self.glucose)
            .field("blood_pressure", &self.blood_pressure)
            .field("spo2", &self.spo2)
            .field("heart_rate", &self.heart_rate)
            .finish()
    }
}
