//! Layout components (header, content, status bar)

use crate::app::App;
use crate::lifecycle::LifecyclePhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " NYLUND ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Groundwork · Drammen", Style::default().fg(Color::Gray)),
    ]));
    frame.render_widget(header, area);
}

fn phase_indicator(phase: LifecyclePhase) -> Span<'static> {
    match phase {
        LifecyclePhase::Idle | LifecyclePhase::Validating => {
            Span::styled(" ● ", Style::default().fg(Color::Gray))
        }
        LifecyclePhase::Submitting => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
        LifecyclePhase::Succeeded => Span::styled(" ● ", Style::default().fg(Color::Green)),
        LifecyclePhase::Failed => Span::styled(" ● ", Style::default().fg(Color::Red)),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![phase_indicator(app.lifecycle.phase())];

    let phase_label = match app.lifecycle.phase() {
        LifecyclePhase::Idle | LifecyclePhase::Validating => "ready",
        LifecyclePhase::Submitting => "sending",
        LifecyclePhase::Succeeded => "sent",
        LifecyclePhase::Failed => "failed",
    };
    spans.push(Span::styled(phase_label, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
