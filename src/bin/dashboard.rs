//! Patient-vitals TUI dashboard
//!
//! Interactive terminal dashboard for real-time patient monitoring.
//! Connects to the hub's push stream for live readings and polls its API
//! for history and alerts.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use vitalwatch::dashboard::{App, Config};

#[derive(Parser, Debug)]
#[command(name = "vitalwatch-dashboard")]
#[command(about = "Terminal UI dashboard for patient-vitals monitoring", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Hub API URL (overrides config file)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// API authentication token (overrides config file)
    #[arg(short, long, value_name = "TOKEN")]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - redirect logs to file when in TUI mode to avoid console output
    let log_path = dirs::data_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap())
        .join("vitalwatch")
        .join("dashboard.log");

    // Create directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_writer(file)
                .init();
        }
        Err(_) => {
            // If we can't create a log file, use a minimal stderr logger that only shows errors
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_max_level(tracing::Level::ERROR)
                .init();
        }
    }

    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_deref())?;

    // Override with CLI args if provided
    let config = Config {
        api_url: args.url.unwrap_or(config.api_url),
        api_token: args.token.or(config.api_token),
        ..config
    };

    // Create and run the app
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
