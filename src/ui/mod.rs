//! UI module for rendering the TUI

pub mod components;
pub mod forms;
pub mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_contact_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
