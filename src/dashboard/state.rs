//! Dashboard display state
//!
//! Holds the "current values" side of the dashboard: the latest live
//! reading with its classifications, the attached risk prediction, and
//! UI concerns like connection status, pause and alert selection. Chart
//! history lives in the reconciler's buffers, not here; only the live
//! path is authoritative for what is displayed as current.

use chrono::{DateTime, Utc};

use crate::thresholds::{ReadingStatus, classify_reading};
use crate::{Reading, RiskPrediction};

/// Latest live reading with its per-metric classification
#[derive(Debug, Clone)]
pub struct VitalsDisplay {
    pub reading: Reading,
    pub status: ReadingStatus,
    pub prediction: Option<RiskPrediction>,
}

/// Application state
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Current vitals, absent until the first reading arrives
    pub vitals: Option<VitalsDisplay>,

    /// Timestamp of the newest live reading
    pub last_update: Option<DateTime<Utc>>,

    /// Selected alert index (for acknowledging)
    pub selected_alert: usize,

    /// Paused state (live pushes are dropped while paused)
    pub paused: bool,

    /// Streaming connection status
    pub connected: bool,

    /// Error message (if any)
    pub error_message: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a live reading and make it the displayed current value.
    pub fn update_vitals(&mut self, reading: Reading, prediction: Option<RiskPrediction>) {
        self.last_update = Some(reading.timestamp);
        self.vitals = Some(VitalsDisplay {
            status: classify_reading(&reading),
            reading,
            prediction,
        });
    }

    /// Select next alert, wrapping around.
    pub fn select_next_alert(&mut self, alert_count: usize) {
        if alert_count > 0 {
            self.selected_alert = (self.selected_alert + 1) % alert_count;
        }
    }

    /// Select previous alert, wrapping around.
    pub fn select_previous_alert(&mut self, alert_count: usize) {
        if alert_count > 0 {
            self.selected_alert = if self.selected_alert == 0 {
                alert_count - 1
            } else {
                self.selected_alert - 1
            };
        }
    }

    /// Keep the selection inside the list after a refresh shrank it.
    pub fn clamp_alert_selection(&mut self, alert_count: usize) {
        if self.selected_alert >= alert_count && alert_count > 0 {
            self.selected_alert = alert_count - 1;
        }
        if alert_count == 0 {
            self.selected_alert = 0;
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
