//! Form-wide success/error banner

use crate::state::{MessageKind, MessagePanel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn color_for(kind: Option<MessageKind>) -> Color {
    match kind {
        Some(MessageKind::Success) => Color::Green,
        Some(MessageKind::Error) => Color::Red,
        None => Color::White,
    }
}

/// Render the message panel; draws nothing while it is hidden
pub fn render_message_panel(frame: &mut Frame, area: Rect, panel: &MessagePanel) {
    if !panel.is_visible() {
        return;
    }

    let color = color_for(panel.kind());
    let title = match panel.kind() {
        Some(MessageKind::Success) => " Sent ",
        Some(MessageKind::Error) => " Not sent ",
        None => "",
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        panel.text(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(paragraph, area);
}
