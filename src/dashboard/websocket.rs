//! WebSocket client for the hub's streaming push channel

use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Message, client::IntoClientRequest, http::Uri},
};

use crate::api::PushEvent;

/// Event forwarded from the streaming connection to the dashboard loop
#[derive(Debug)]
pub enum StreamEvent {
    /// One pushed reading with optional prediction and alerts
    Data(Box<PushEvent>),
    /// Connection (re)established
    Connected,
    /// Connection lost; reconnect is automatic
    Disconnected(Option<String>),
}

/// Client for the hub's push stream
pub struct StreamClient {
    url: String,
    token: Option<String>,
}

impl StreamClient {
    pub fn new(api_url: &str, token: Option<String>) -> Self {
        // Convert http:// to ws:// and https:// to wss://
        let ws_url = api_url
            .replace("http://", "ws://")
            .replace("https://", "wss://");

        Self {
            url: format!("{}/ws/stream", ws_url.trim_end_matches('/')),
            token,
        }
    }

    /// Connect and start streaming events. The returned receiver yields
    /// events for the lifetime of the dashboard; reconnection happens
    /// transparently behind it.
    pub fn connect(self) -> mpsc::UnboundedReceiver<StreamEvent> {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            self.run(tx).await;
        });

        rx
    }

    async fn run(self, tx: mpsc::UnboundedSender<StreamEvent>) {
        loop {
            tracing::info!("Connecting to push stream: {}", self.url);

            match self.connect_once(&tx).await {
                Ok(_) => {
                    tracing::info!("Push stream disconnected, reconnecting in 5s...");
                }
                Err(e) => {
                    tracing::error!("Push stream error: {}. Reconnecting in 5s...", e);
                    if tx
                        .send(StreamEvent::Disconnected(Some(e.to_string())))
                        .is_err()
                    {
                        return;
                    }
                }
            }

            // Wait before reconnecting
            tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
        }
    }

    async fn connect_once(&self, tx: &mpsc::UnboundedSender<StreamEvent>) -> Result<()> {
        // Append auth token if provided
        let url = if let Some(token) = &self.token {
            format!("{}?token={}", self.url, token)
        } else {
            self.url.clone()
        };

        // Parse URL to extract host and scheme for headers
        let uri: Uri = url.parse().context("Failed to parse stream URL")?;

        let host = uri
            .authority()
            .ok_or_else(|| anyhow::anyhow!("Stream URL missing host"))?
            .as_str()
            .to_string();

        let scheme = uri
            .scheme_str()
            .ok_or_else(|| anyhow::anyhow!("Stream URL missing scheme"))?;

        // Build Origin header (wss -> https, ws -> http)
        let origin_scheme = if scheme == "wss" { "https" } else { "http" };
        let origin = format!("{}://{}", origin_scheme, host);

        // into_client_request() preserves TLS/SNI configuration, which
        // matters when connecting through reverse proxies
        let mut request = url
            .into_client_request()
            .context("Failed to create stream request")?;

        let headers = request.headers_mut();
        headers.insert(
            "Host",
            host.parse().context("Failed to parse Host header value")?,
        );
        headers.insert(
            "Origin",
            origin
                .parse()
                .context("Failed to parse Origin header value")?,
        );
        headers.insert(
            "User-Agent",
            "vitalwatch-dashboard/0.3.0"
                .parse()
                .context("Failed to parse User-Agent header value")?,
        );

        let (ws_stream, _) = connect_async(request)
            .await
            .context("Failed to connect to push stream")?;

        tracing::info!("Push stream connected");
        tx.send(StreamEvent::Connected).ok();

        let (mut write, mut read) = ws_stream.split();

        // Send ping periodically to keep connection alive
        let ping_task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(tokio::time::Duration::from_secs(30)).await;
                if write.send(Message::Ping(vec![])).await.is_err() {
                    break;
                }
            }
        });

        // Read messages from the stream
        while let Some(msg) = read.next().await {
            let msg = msg.context("Push stream message error")?;

            match msg {
                Message::Text(text) => match serde_json::from_str::<PushEvent>(&text) {
                    Ok(event) => {
                        if tx.send(StreamEvent::Data(Box::new(event))).is_err() {
                            // Receiver dropped, exit
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse push event: {}\nRaw JSON: {}", e, text);
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Push stream closed by server");
                    tx.send(StreamEvent::Disconnected(Some(
                        "Connection closed by server".to_string(),
                    )))
                    .ok();
                    break;
                }
                Message::Pong(_) => {
                    // Ignore pong messages
                }
                _ => {
                    // Ignore other message types
                }
            }
        }

        ping_task.abort();

        tx.send(StreamEvent::Disconnected(Some(
            "Connection lost unexpectedly".to_string(),
        )))
        .ok();

        Ok(())
    }
}
