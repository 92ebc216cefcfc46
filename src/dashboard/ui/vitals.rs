//! Current vitals and risk prediction panels

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::state::DashboardState;
use crate::thresholds::{RiskTier, VitalStatus, risk_percentage, risk_tier};

/// Render the vitals row: current values on the left, risk predictions on
/// the right.
pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_vitals(frame, chunks[0], state);
    render_predictions(frame, chunks[1], state);
}

fn status_style(status: VitalStatus) -> Style {
    match status {
        VitalStatus::Normal => Style::default().fg(Color::Green),
        VitalStatus::Abnormal => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

fn status_tag(status: VitalStatus) -> &'static str {
    match status {
        VitalStatus::Normal => "normal",
        VitalStatus::Abnormal => "abnormal",
    }
}

fn vital_line(name: &str, value: String, unit: &str, status: VitalStatus) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", name), Style::default().fg(Color::Cyan)),
        Span::styled(value, status_style(status)),
        Span::raw(format!(" {} ", unit)),
        Span::styled(format!("[{}]", status_tag(status)), status_style(status)),
    ])
}

fn render_vitals(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default().borders(Borders::ALL).title("Vital Signs");

    let Some(vitals) = &state.vitals else {
        let message = Paragraph::new("Waiting for data...")
            .block(block)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(message, area);
        return;
    };

    let reading = &vitals.reading;
    let status = &vitals.status;

    let lines = vec![
        vital_line(
            "Glucose",
            format!("{:.0}", reading.glucose),
            "mg/dL",
            status.glucose,
        ),
        vital_line(
            "Blood Pres.",
            format!("{:.0}/{:.0}", reading.bp_systolic, reading.bp_diastolic),
            "mmHg",
            status.blood_pressure,
        ),
        vital_line("SpO₂", format!("{:.0}", reading.spo2), "%", status.spo2),
        vital_line(
            "Heart Rate",
            format!("{:.0}", reading.heart_rate),
            "BPM",
            status.heart_rate,
        ),
    ];

    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, area);
}

fn tier_style(tier: RiskTier) -> Style {
    match tier {
        RiskTier::Low => Style::default().fg(Color::Green),
        RiskTier::Medium => Style::default().fg(Color::Yellow),
        RiskTier::High => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

fn prediction_line(name: &str, probability: Option<f64>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<16}", name),
        Style::default().fg(Color::Cyan),
    )];

    match probability {
        Some(p) => {
            let tier = risk_tier(p);
            spans.push(Span::styled(
                format!("{:>3}%", risk_percentage(p)),
                tier_style(tier),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("({})", tier.as_str()), tier_style(tier)));
        }
        None => {
            // No prediction is a valid state
            spans.push(Span::styled("--", Style::default().fg(Color::Gray)));
        }
    }

    Line::from(spans)
}

fn render_predictions(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let prediction = state.vitals.as_ref().and_then(|v| v.prediction);

    let lines = vec![
        prediction_line("Diabetes", prediction.map(|p| p.diabetes_risk)),
        prediction_line("Heart Disease", prediction.map(|p| p.heart_disease_risk)),
        prediction_line("Hypoxia", prediction.map(|p| p.hypoxia_risk)),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Risk Predictions"),
    );

    frame.render_widget(panel, area);
}
