//! Main application logic
//!
//! The controller owns the reconciler, the alert feed and the display
//! state, and wires the three input paths to them: the push stream, the
//! 60 s historical pull and the 30 s alert refresh. No cycle is fatal;
//! failed fetches are logged and the next scheduled attempt self-heals.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::charts::{RedrawFlag, VitalCharts};

use super::{
    config::Config,
    feed::AlertFeed,
    reconciler::Reconciler,
    state::DashboardState,
    ui,
    websocket::{StreamClient, StreamEvent},
};

/// Main TUI application
pub struct App {
    config: Config,
    state: DashboardState,
    reconciler: Reconciler,
    feed: AlertFeed,
    api: ApiClient,
    ws_rx: mpsc::UnboundedReceiver<StreamEvent>,
    redraw: RedrawFlag,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config.api_url, config.api_token.clone())?;

        let redraw = RedrawFlag::new();
        let reconciler = Reconciler::new(VitalCharts::with_redraw_flag(&redraw));

        // Spawn the streaming connection; it reconnects on its own
        let ws_rx = StreamClient::new(&config.api_url, config.api_token.clone()).connect();

        Ok(Self {
            config,
            state: DashboardState::new(),
            reconciler,
            feed: AlertFeed::new(),
            api,
            ws_rx,
            redraw,
        })
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Initial data fetch - latest reading, one history pull, one alert
        // fetch. After this, the push stream and the timers take over.
        self.fetch_initial_data().await;

        // Run event loop
        let result = self.run_event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    /// Startup fetches
    ///
    /// The latest reading is handled like a live push, except its attached
    /// alerts are skipped: the initial alert fetch right after covers them
    /// without double-adding.
    async fn fetch_initial_data(&mut self) {
        match self.api.latest().await {
            Ok(Some(latest)) => {
                if let Some(reading) = latest.health_data {
                    self.state.update_vitals(reading.clone(), latest.prediction);
                    self.reconciler.apply_live(&reading);
                }
            }
            Ok(None) => {
                tracing::debug!("No readings on the hub yet");
            }
            Err(e) => {
                tracing::error!("Initial fetch failed: {}", e);
                self.state.error_message = Some(format!("Connection failed: {}", e));
            }
        }

        self.refresh_alerts().await;
        self.refresh_history().await;
    }

    /// Main event loop
    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut last_history = std::time::Instant::now();
        let mut last_alerts = std::time::Instant::now();

        loop {
            // Render UI
            terminal.draw(|f| ui::render(f, &self.state, self.reconciler.charts(), &self.feed))?;
            self.redraw.take();

            // Handle stream events (non-blocking)
            self.drain_stream_events();

            // Handle keyboard events (with timeout)
            if event::poll(std::time::Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_event(key.code).await?
            {
                break; // Quit
            }

            // Periodic historical repaint
            if last_history.elapsed().as_secs() >= self.config.history_interval {
                self.refresh_history().await;
                last_history = std::time::Instant::now();
            }

            // Periodic alert refresh
            if last_alerts.elapsed().as_secs() >= self.config.alert_interval {
                self.refresh_alerts().await;
                last_alerts = std::time::Instant::now();
            }
        }

        Ok(())
    }

    /// Apply every queued stream event.
    fn drain_stream_events(&mut self) {
        while let Ok(event) = self.ws_rx.try_recv() {
            self.handle_stream_event(event);
        }
    }

    /// Handle one stream event
    fn handle_stream_event(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Data(push) => {
                if self.state.paused {
                    return;
                }

                self.state
                    .update_vitals(push.health_data.clone(), push.prediction);
                self.reconciler.apply_live(&push.health_data);

                if let Some(alerts) = push.alerts {
                    for alert in alerts {
                        self.feed.add_one(alert);
                    }
                }

                if !self.state.connected {
                    self.state.error_message = None;
                }
                self.state.connected = true;
            }
            StreamEvent::Connected => {
                self.state.connected = true;
                self.state.error_message = None;
            }
            StreamEvent::Disconnected(message) => {
                self.state.connected = false;
                self.state.error_message = message;
            }
        }
    }

    /// Pull history and replay it into the charts.
    ///
    /// The stamp is taken before the request goes out and queued live
    /// pushes are drained before applying, so a push that raced the pull
    /// is merged instead of overwritten.
    async fn refresh_history(&mut self) {
        let stamp = self.reconciler.history_stamp();

        match self
            .api
            .history(self.config.history_hours, self.config.history_limit)
            .await
        {
            Ok(readings) => {
                self.drain_stream_events();
                self.reconciler.apply_history(stamp, readings);
            }
            Err(e) => {
                tracing::error!("History refresh failed: {}", e);
            }
        }
    }

    /// Refresh the alert feed from the hub.
    async fn refresh_alerts(&mut self) {
        match self.api.active_alerts().await {
            Ok(alerts) => {
                self.feed.refresh(alerts);
                self.state.clamp_alert_selection(self.feed.count());
            }
            Err(e) => {
                tracing::error!("Alert refresh failed: {}", e);
            }
        }
    }

    /// Acknowledge the selected alert, fire-and-forget.
    ///
    /// The list is not touched here; the next refresh cycle drops the
    /// alert once the hub has recorded the acknowledgment.
    fn acknowledge_selected(&self) {
        let Some(alert) = self.feed.get(self.state.selected_alert) else {
            return;
        };

        let api = self.api.clone();
        let alert_id = alert.id.clone();
        tokio::spawn(async move {
            if let Err(e) = api.acknowledge_alert(&alert_id).await {
                tracing::error!("Failed to acknowledge alert {}: {}", alert_id, e);
            }
        });
    }

    /// Start the hub's data simulator, fire-and-forget.
    fn start_simulation(&self) {
        let api = self.api.clone();
        let scenario = self.config.sim_scenario.clone();
        let interval = self.config.sim_interval;
        tokio::spawn(async move {
            match api.simulate(&scenario, interval).await {
                Ok(_) => tracing::info!("Simulation started: {}", scenario),
                Err(e) => tracing::error!("Failed to start simulation: {}", e),
            }
        });
    }

    /// Handle keyboard event
    async fn handle_key_event(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Ok(true); // Quit
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select_next_alert(self.feed.count());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_previous_alert(self.feed.count());
            }
            KeyCode::Char('a') | KeyCode::Enter => {
                self.acknowledge_selected();
            }
            KeyCode::Char(' ') => {
                self.state.toggle_pause();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.fetch_initial_data().await;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.start_simulation();
            }
            KeyCode::Char('c') => {
                self.state.clear_error();
            }
            _ => {}
        }

        Ok(false)
    }
}
