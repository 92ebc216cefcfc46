//! Configuration for the dashboard

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hub API base URL
    pub api_url: String,

    /// API authentication token (optional)
    pub api_token: Option<String>,

    /// Seconds between historical chart refreshes (default: 60)
    #[serde(default = "default_history_interval")]
    pub history_interval: u64,

    /// Seconds between alert list refreshes (default: 30)
    #[serde(default = "default_alert_interval")]
    pub alert_interval: u64,

    /// Look-back window for historical pulls in hours (default: 24)
    #[serde(default = "default_history_hours")]
    pub history_hours: u32,

    /// Maximum readings per historical pull (default: 100)
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,

    /// Scenario passed to the hub's simulator (default: "random")
    #[serde(default = "default_sim_scenario")]
    pub sim_scenario: String,

    /// Seconds between simulated readings (default: 5)
    #[serde(default = "default_sim_interval")]
    pub sim_interval: u64,

    /// Enable debug mode (default: false)
    #[serde(default)]
    pub debug: bool,
}

fn default_history_interval() -> u64 {
    60
}

fn default_alert_interval() -> u64 {
    30
}

fn default_history_hours() -> u32 {
    24
}

fn default_history_limit() -> u32 {
    100
}

fn default_sim_scenario() -> String {
    "random".to_string()
}

fn default_sim_interval() -> u64 {
    5
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(|p| p.to_path_buf()).or_else(|| {
            // Try default location
            let home = dirs::home_dir()?;
            let default_path = home.join(".config/vitalwatch/dashboard.toml");
            if default_path.exists() {
                Some(default_path)
            } else {
                None
            }
        });

        if let Some(path) = config_path {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            // Use defaults
            Ok(Self::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            api_token: None,
            history_interval: default_history_interval(),
            alert_interval: default_alert_interval(),
            history_hours: default_history_hours(),
            history_limit: default_history_limit(),
            sim_scenario: default_sim_scenario(),
            sim_interval: default_sim_interval(),
            debug: false,
        }
    }
}
