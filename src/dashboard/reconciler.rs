//! Data reconciliation across push and pull channels
//!
//! Three paths feed the chart buffers: live pushes (append one reading,
//! repaint immediately), the one-shot startup fetch (treated like a live
//! push by the controller), and the recurring historical bulk pull
//! (clear-then-replay with repaints suppressed until the last point).
//!
//! A bulk pull races live pushes: its network response may resolve after
//! newer readings were already appended. Every live append therefore
//! bumps a sequence number, every pull is stamped with the sequence
//! current when it was issued, and on completion the response is merged
//! with the live readings that arrived after the stamp. The merge is
//! keyed by timestamp with live readings inserted last, so on equal
//! timestamps the push channel wins, and the replayed buffer is always
//! ascending.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::Reading;
use crate::charts::{SERIES_CAPACITY, VitalCharts};

/// Sequence stamp taken when a historical pull is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStamp(u64);

/// Merges live and historical readings into the chart buffers in
/// timestamp order.
pub struct Reconciler {
    charts: VitalCharts,
    live_seq: u64,
    /// Recent live readings with the sequence they arrived at; bounded to
    /// the chart capacity since older entries cannot be displayed anyway.
    recent_live: VecDeque<(u64, Reading)>,
}

impl Reconciler {
    pub fn new(charts: VitalCharts) -> Self {
        Self {
            charts,
            live_seq: 0,
            recent_live: VecDeque::with_capacity(SERIES_CAPACITY),
        }
    }

    pub fn charts(&self) -> &VitalCharts {
        &self.charts
    }

    /// Append one live reading to every chart with an immediate repaint.
    ///
    /// Vital-sign display and alert fan-out are the controller's job;
    /// this path only advances the series.
    pub fn apply_live(&mut self, reading: &Reading) {
        self.live_seq += 1;
        self.recent_live.push_back((self.live_seq, reading.clone()));

        // Trim to chart capacity
        if self.recent_live.len() > SERIES_CAPACITY {
            self.recent_live.pop_front();
        }

        self.charts.append_reading(reading, true);
    }

    /// Stamp to take before issuing a historical pull.
    pub fn history_stamp(&self) -> HistoryStamp {
        HistoryStamp(self.live_seq)
    }

    /// Apply a completed historical pull.
    ///
    /// The response is sorted ascending, merged with live readings newer
    /// than the stamp, and replayed wholesale. An empty response is a
    /// no-op: stale charts keep displaying until the next cycle.
    pub fn apply_history(&mut self, stamp: HistoryStamp, mut readings: Vec<Reading>) {
        if readings.is_empty() {
            return;
        }

        readings.sort_by_key(|r| r.timestamp);

        let superseded = self.live_seq != stamp.0;
        let mut merged: BTreeMap<DateTime<Utc>, Reading> = readings
            .into_iter()
            .map(|reading| (reading.timestamp, reading))
            .collect();

        if superseded {
            // Live pushes that arrived while the pull was in flight take
            // priority over the (older) historical view of the same data.
            for (seq, reading) in &self.recent_live {
                if seq > &stamp.0 {
                    merged.insert(reading.timestamp, reading.clone());
                }
            }
            debug!(
                "historical pull superseded by {} live reading(s), merged",
                self.live_seq - stamp.0
            );
        }

        let ordered: Vec<Reading> = merged.into_values().collect();
        self.charts.replace_history(&ordered);
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("live_seq", &self.live_seq)
            .field("recent_live", &self.recent_live.len())
            .finish_non_exhaustive()
    }
}
