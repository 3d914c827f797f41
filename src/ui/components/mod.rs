//! Reusable UI components

mod button;
mod message_panel;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use message_panel::render_message_panel;
