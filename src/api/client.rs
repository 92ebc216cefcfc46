//! Thin typed client over the hub's REST endpoints
//!
//! Every method applies the dashboard's error taxonomy: a transport
//! failure is an `Err` for the caller to log and skip, while a non-success
//! body or an empty payload collapses to an empty value (a no-op for the
//! caller, not an error).

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{Alert, Reading};

use super::types::{
    AcknowledgeResponse, AlertsResponse, HistoryResponse, LatestResponse, SimulateRequest,
    is_success,
};

/// Reusable client for the hub API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated GET request
    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(url);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request
    }

    /// Build an authenticated POST request
    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.post(url);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request
    }

    /// Fetch the single most recent reading, with its prediction and
    /// alerts. `None` when the hub has no data yet (a fresh hub answers
    /// 404 until the first reading arrives).
    pub async fn latest(&self) -> Result<Option<LatestResponse>> {
        let response = self
            .get("/api/latest")
            .send()
            .await
            .context("Failed to fetch latest reading")?;

        if !response.status().is_success() {
            debug!("No latest reading available: {}", response.status());
            return Ok(None);
        }

        let body: LatestResponse = response
            .json()
            .await
            .context("Failed to parse latest reading")?;

        if !is_success(&body.status) || body.health_data.is_none() {
            return Ok(None);
        }

        Ok(Some(body))
    }

    /// Fetch up to `limit` readings from the last `hours` hours. The hub
    /// does not guarantee ordering; callers sort.
    pub async fn history(&self, hours: u32, limit: u32) -> Result<Vec<Reading>> {
        let response = self
            .get(&format!("/api/history?hours={}&limit={}", hours, limit))
            .send()
            .await
            .context("Failed to fetch history")?;

        if !response.status().is_success() {
            warn!("History request failed: {}", response.status());
            return Ok(Vec::new());
        }

        let body: HistoryResponse = response.json().await.context("Failed to parse history")?;

        if !is_success(&body.status) {
            return Ok(Vec::new());
        }

        Ok(body.data)
    }

    /// Fetch all unacknowledged alerts.
    pub async fn active_alerts(&self) -> Result<Vec<Alert>> {
        let response = self
            .get("/api/alerts?acknowledged=false")
            .send()
            .await
            .context("Failed to fetch alerts")?;

        if !response.status().is_success() {
            warn!("Alerts request failed: {}", response.status());
            return Ok(Vec::new());
        }

        let body: AlertsResponse = response.json().await.context("Failed to parse alerts")?;

        if !is_success(&body.status) {
            return Ok(Vec::new());
        }

        Ok(body.alerts)
    }

    /// Request acknowledgment of an alert. Fire-and-forget from the UI's
    /// perspective; the response is only logged.
    pub async fn acknowledge_alert(&self, alert_id: &str) -> Result<()> {
        let response = self
            .post(&format!("/api/alerts/{}/acknowledge", alert_id))
            .send()
            .await
            .context("Failed to send acknowledgment")?;

        let status = response.status();
        match response.json::<AcknowledgeResponse>().await {
            Ok(body) if is_success(&body.status) => {
                debug!("Alert {} acknowledged", alert_id);
            }
            Ok(body) => {
                warn!(
                    "Acknowledgment of alert {} rejected: {}",
                    alert_id,
                    body.message.unwrap_or_else(|| status.to_string())
                );
            }
            Err(e) => {
                warn!("Malformed acknowledgment response for {}: {}", alert_id, e);
            }
        }

        Ok(())
    }

    /// Start the hub's simulated data generator. Pure passthrough.
    pub async fn simulate(&self, scenario: &str, interval: u64) -> Result<()> {
        self.post("/api/simulate")
            .json(&SimulateRequest {
                scenario: scenario.to_string(),
                interval,
            })
            .send()
            .await
            .context("Failed to start simulation")?
            .error_for_status()
            .context("Simulation request rejected")?;

        Ok(())
    }
}
