//! Platform-specific key bindings

use crossterm::event::{KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms, Cmd+S also works on macOS
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// True if the key event is the submit shortcut
pub fn is_submit_shortcut(key: &KeyEvent) -> bool {
    key.code == crossterm::event::KeyCode::Char('s')
        && (key.modifiers.contains(SUBMIT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL))
}
