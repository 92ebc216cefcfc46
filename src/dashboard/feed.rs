//! Alert feed
//!
//! The set of unacknowledged alerts currently shown, in arrival order
//! (not timestamp order). The 30 s polling cycle replaces the list
//! wholesale; live-push-attached alerts are appended in between. No
//! dedup beyond what the replace semantics naturally provide: a live
//! append followed by a refresh containing the same alert id may show it
//! twice until the next full refresh rebuilds the list.

use crate::Alert;

#[derive(Debug, Default)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire list with a poll response, keeping its order.
    pub fn refresh(&mut self, alerts: Vec<Alert>) {
        self.alerts = alerts;
    }

    /// Append a single alert without clearing the others.
    pub fn add_one(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn count(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Whether the count badge should be shown. Hidden at zero.
    pub fn badge_visible(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Alert> {
        self.alerts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }
}
