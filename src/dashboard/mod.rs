//! Patient-vitals TUI dashboard
//!
//! Merges the hub's streaming push channel with polled history and alert
//! endpoints into bounded, time-ordered chart series, and renders vitals,
//! risk predictions and an acknowledgeable alert feed in the terminal.

#[cfg(feature = "dashboard")]
mod app;
#[cfg(feature = "dashboard")]
mod config;
#[cfg(feature = "dashboard")]
mod ui;
#[cfg(feature = "dashboard")]
mod websocket;

pub mod feed;
pub mod reconciler;
pub mod state;

#[cfg(feature = "dashboard")]
pub use app::App;
#[cfg(feature = "dashboard")]
pub use config::Config;
#[cfg(feature = "dashboard")]
pub use websocket::{StreamClient, StreamEvent};
