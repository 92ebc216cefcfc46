//! Alert feed UI

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::AlertSeverity;
use crate::dashboard::feed::AlertFeed;
use crate::dashboard::state::DashboardState;

/// Visual style class per severity: high is danger, medium is warning,
/// everything else informational.
fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::High => Color::Red,
        AlertSeverity::Medium => Color::Yellow,
        AlertSeverity::Low => Color::Blue,
    }
}

/// Render the alert feed
pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState, feed: &AlertFeed) {
    // The count badge is hidden while there are no alerts
    let title = if feed.badge_visible() {
        format!("Alerts ({})", feed.count())
    } else {
        "Alerts".to_string()
    };

    if feed.is_empty() {
        let message = Paragraph::new("No active alerts")
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::Gray));

        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = feed
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let color = severity_color(alert.severity);

            let content = Line::from(vec![
                Span::styled(
                    format!("[{}] ", alert.timestamp.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<6}", alert.severity.as_str()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(alert.message.clone()),
            ]);

            let mut style = Style::default();
            if i == state.selected_alert {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(list, area);
}
