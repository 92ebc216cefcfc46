//! Main dashboard layout

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::charts::VitalCharts;
use crate::dashboard::feed::AlertFeed;
use crate::dashboard::state::DashboardState;

use super::{alerts, charts, vitals};

/// Render the main dashboard UI
pub fn render(frame: &mut Frame, state: &DashboardState, chart_set: &VitalCharts, feed: &AlertFeed) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(8),  // Vitals + predictions
            Constraint::Min(12),    // Charts
            Constraint::Length(8),  // Alerts
            Constraint::Length(3),  // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);
    vitals::render(frame, chunks[1], state);
    charts::render(frame, chunks[2], chart_set);
    alerts::render(frame, chunks[3], state, feed);
    render_footer(frame, chunks[4], state);
}

/// Render header with title and last-update clock
fn render_header(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut spans = vec![Span::styled(
        "VitalWatch",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(last_update) = &state.last_update {
        spans.push(Span::raw("  |  Last update: "));
        spans.push(Span::styled(
            last_update.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::Gray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Patient Monitor"),
    );

    frame.render_widget(header, area);
}

/// Render footer with status and keybindings
fn render_footer(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let mut footer_text = vec![
        Span::raw("Alerts: "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" | Ack: "),
        Span::styled("A", Style::default().fg(Color::Yellow)),
        Span::raw(" | Pause: "),
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(" | Refresh: "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(" | Simulate: "),
        Span::styled("S", Style::default().fg(Color::Yellow)),
        Span::raw(" | Quit: "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
    ];

    // Connection status
    if state.connected {
        footer_text.push(Span::styled(
            "● Connected",
            Style::default().fg(Color::Green),
        ));
    } else {
        footer_text.push(Span::styled(
            "○ Disconnected",
            Style::default().fg(Color::Red),
        ));
    }

    // Paused indicator
    if state.paused {
        footer_text.push(Span::raw(" | "));
        footer_text.push(Span::styled(
            "⏸ PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Error message
    if let Some(error) = &state.error_message {
        footer_text.push(Span::raw(" | "));
        footer_text.push(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        ));
    }

    let footer =
        Paragraph::new(Line::from(footer_text)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
