//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Form;
use crate::ui::components::{render_message_panel, render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields shown in the left column, in form order
const LEFT_COLUMN: &[usize] = &[0, 1, 2, 3];
/// Fields shown in the right column; the description takes the leftover space
const RIGHT_COLUMN: &[usize] = &[4, 6, 7, 5];

/// Draw the contact form with its message panel and submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let lifecycle = &app.lifecycle;

    let block = Block::default()
        .title(" Request a quote ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let panel_height = if lifecycle.message.is_visible() { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),               // Fields
            Constraint::Length(panel_height),  // Message panel
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(1),             // Help text
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_column(frame, columns[0], app, LEFT_COLUMN);
    draw_column(frame, columns[1], app, RIGHT_COLUMN);

    if lifecycle.message.is_visible() {
        render_message_panel(frame, chunks[1], &lifecycle.message);
    }

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[2])[0];
    render_submit_button(
        frame,
        button_area,
        lifecycle.submit_control.label(lifecycle.messages()),
        lifecycle.form.is_submit_row_active(),
        lifecycle.submit_control.is_enabled(),
        lifecycle.submit_control.is_loading(),
    );

    draw_help_text(
        frame,
        chunks[3],
        &format!("Tab/↑↓: move  ←→/Space: choose  {SUBMIT_SHORTCUT}: send  Esc: quit"),
    );
}

fn draw_column(frame: &mut Frame, area: Rect, app: &App, indices: &[usize]) {
    let form = &app.lifecycle.form;
    let constraints: Vec<Constraint> = indices
        .iter()
        .map(|&i| match form.get_field(i) {
            Some(field) if field.is_multiline() => Constraint::Min(3),
            _ => Constraint::Length(3),
        })
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, &index) in rows.iter().zip(indices) {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, *row, field, form.active_field_index == index);
        }
    }
}
