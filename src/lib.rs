pub mod api;
pub mod charts;
pub mod dashboard;
pub mod thresholds;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped snapshot of all monitored vitals, as produced by a
/// wearable device and relayed by the hub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub device_id: String,
    pub timestamp: DateTime<Utc>,
    /// Blood glucose in mg/dL
    pub glucose: f64,
    /// Systolic blood pressure in mmHg
    pub bp_systolic: f64,
    /// Diastolic blood pressure in mmHg
    pub bp_diastolic: f64,
    /// Oxygen saturation in %
    pub spo2: f64,
    /// Heart rate in BPM
    pub heart_rate: f64,
}

/// Disease-risk probabilities attached to a reading by the hub's
/// prediction engine. Absence is a valid state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskPrediction {
    pub diabetes_risk: f64,
    pub heart_disease_risk: f64,
    pub hypoxia_risk: f64,
}

/// A clinical alert raised by the hub. Acknowledgment is a one-way
/// transition performed server-side; the client only requests it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    #[serde(default)]
    pub health_data_id: Option<String>,
    pub message: String,
    /// Condition tag from the hub, e.g. "high_glucose" or "low_spo2"
    #[serde(default)]
    pub condition: Option<String>,
    pub severity: AlertSeverity,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub acknowledged: bool,
}

/// Alert severity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    /// Get the string representation (lowercase)
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
