//! Application state module

mod forms;
mod panel;

pub use forms::*;
pub use panel::*;
