//! View state for the form-wide message panel and the submit control

use crate::messages::Messages;
use tokio::time::{Duration, Instant};

/// Which banner the message panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Modifier class applied to the panel for this kind
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Success => "form-message--success",
            Self::Error => "form-message--error",
        }
    }
}

/// Form-wide banner shown after a submission finishes
#[derive(Debug, Clone, Default)]
pub struct MessagePanel {
    kind: Option<MessageKind>,
    text: String,
    visible: bool,
    /// When set, the panel hides itself once this instant passes
    hide_at: Option<Instant>,
}

impl MessagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel content and make it visible.
    ///
    /// `hide_after` of `None` keeps the banner up until it is hidden
    /// explicitly.
    pub fn show(
        &mut self,
        kind: MessageKind,
        text: impl Into<String>,
        hide_after: Option<Duration>,
        now: Instant,
    ) {
        self.kind = Some(kind);
        self.text = text.into();
        self.visible = true;
        self.hide_at = hide_after.map(|d| now + d);
    }

    /// Hide the banner and cancel any pending auto-hide
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Apply the auto-hide deadline. Returns true if the panel was hidden by
    /// this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if self.visible && now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Full class list, e.g. `form-message form-message--success`
    pub fn class_name(&self) -> String {
        match self.kind {
            Some(kind) => format!("form-message {}", kind.class_name()),
            None => "form-message".to_string(),
        }
    }
}

/// The submit button: disabled with a loading label while a submission runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    enabled: bool,
    loading: bool,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self {
            enabled: true,
            loading: false,
        }
    }

    pub fn begin_loading(&mut self) {
        self.enabled = false;
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.enabled = true;
        self.loading = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Button text: the loading indicator replaces the normal label
    pub fn label(&self, messages: &Messages) -> &'static str {
        if self.loading {
            messages.loading_label
        } else {
            messages.submit_label
        }
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod message_panel {
        use super::*;

        #[test]
        fn test_new_panel_is_hidden() {
            let panel = MessagePanel::new();
            assert!(!panel.is_visible());
            assert!(panel.kind().is_none());
            assert_eq!(panel.class_name(), "form-message");
        }

        #[test]
        fn test_show_sets_kind_and_class() {
            let mut panel = MessagePanel::new();
            panel.show(MessageKind::Error, "boom", None, Instant::now());
            assert!(panel.is_visible());
            assert_eq!(panel.text(), "boom");
            assert_eq!(panel.class_name(), "form-message form-message--error");
        }

        #[test]
        fn test_tick_hides_at_deadline() {
            let now = Instant::now();
            let mut panel = MessagePanel::new();
            panel.show(
                MessageKind::Success,
                "ok",
                Some(Duration::from_millis(10_000)),
                now,
            );

            assert!(!panel.tick(now + Duration::from_millis(9_999)));
            assert!(panel.is_visible());
            assert!(panel.tick(now + Duration::from_millis(10_000)));
            assert!(!panel.is_visible());
        }

        #[test]
        fn test_tick_without_deadline_keeps_panel() {
            let now = Instant::now();
            let mut panel = MessagePanel::new();
            panel.show(MessageKind::Error, "boom", None, now);
            assert!(!panel.tick(now + Duration::from_secs(3600)));
            assert!(panel.is_visible());
        }

        #[test]
        fn test_hide_cancels_deadline() {
            let now = Instant::now();
            let mut panel = MessagePanel::new();
            panel.show(
                MessageKind::Success,
                "ok",
                Some(Duration::from_secs(1)),
                now,
            );
            panel.hide();
            panel.show(MessageKind::Error, "boom", None, now);
            assert!(!panel.tick(now + Duration::from_secs(2)));
            assert!(panel.is_visible());
        }
    }

    mod submit_control {
        use super::*;

        #[test]
        fn test_default_enabled_with_normal_label() {
            let control = SubmitControl::default();
            assert!(control.is_enabled());
            assert!(!control.is_loading());
            assert_eq!(control.label(&Messages::ENGLISH), "Send enquiry");
        }

        #[test]
        fn test_loading_disables_and_swaps_label() {
            let mut control = SubmitControl::new();
            control.begin_loading();
            assert!(!control.is_enabled());
            assert_eq!(control.label(&Messages::ENGLISH), "Sending...");
            control.finish_loading();
            assert!(control.is_enabled());
            assert_eq!(control.label(&Messages::ENGLISH), "Send enquiry");
        }
    }
}
