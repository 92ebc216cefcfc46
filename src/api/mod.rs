//! Client for the monitoring hub's HTTP API
//!
//! This module contains the wire types shared between the push stream and
//! the polled endpoints, and a thin reqwest-based client. By centralizing
//! the types, we ensure the WebSocket path and the REST path cannot drift
//! apart in (de)serialization.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    AcknowledgeResponse, AlertsResponse, HistoryResponse, LatestResponse, PushEvent,
    SimulateRequest,
};
