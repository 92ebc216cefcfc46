//! Wire types for the hub API

use serde::{Deserialize, Serialize};

use crate::{Alert, Reading, RiskPrediction};

/// Event delivered over the streaming push channel.
///
/// The hub broadcasts one of these per processed reading, with the
/// prediction and any alerts that reading raised attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEvent {
    pub health_data: Reading,
    #[serde(default)]
    pub prediction: Option<RiskPrediction>,
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
}

/// Response of `GET /api/latest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResponse {
    pub status: String,
    #[serde(default)]
    pub health_data: Option<Reading>,
    #[serde(default)]
    pub prediction: Option<RiskPrediction>,
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
}

/// Response of `GET /api/history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<Reading>,
}

/// Response of `GET /api/alerts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsResponse {
    pub status: String,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// Response of `POST /api/alerts/{id}/acknowledge`
///
/// Only inspected for logging; the UI never waits on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcknowledgeResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/simulate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// Scenario name: random, healthy, diabetes, heart_issue or hypoxia
    pub scenario: String,
    /// Seconds between generated readings
    pub interval: u64,
}

/// Whether a hub response body reports success.
pub(crate) fn is_success(status: &str) -> bool {
    status == "success"
}
