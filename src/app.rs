//! Application state and core logic

use crate::config::ContactConfig;
use crate::lifecycle::{FormLifecycle, SubmitError};
use crate::platform::is_submit_shortcut;
use crate::state::{ContactForm, FieldKind, MessagePanel, SubmitControl};
use crate::submission::{SubmissionClientTrait, SubmissionError, SubmissionOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// The contact form and its submission lifecycle
    pub lifecycle: FormLifecycle,
    /// Where validated submissions are sent
    client: Arc<dyn SubmissionClientTrait>,
    /// Submission currently in flight
    pending: Option<JoinHandle<Result<SubmissionOutcome>>>,
    /// Whether the app should quit
    quit: bool,
    /// Short feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ContactConfig, client: Arc<dyn SubmissionClientTrait>) -> Self {
        let lifecycle = FormLifecycle::new(
            ContactForm::new(),
            MessagePanel::new(),
            SubmitControl::new(),
            config.lifecycle_settings(),
        );

        Self {
            lifecycle,
            client,
            pending: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit = true;
            return Ok(());
        }

        if is_submit_shortcut(&key) {
            self.submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.lifecycle.focus_next();
                self.refresh_status();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.lifecycle.focus_prev();
                self.refresh_status();
                return Ok(());
            }
            _ => {}
        }

        if self.lifecycle.form.is_submit_row_active() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.submit();
            }
            return Ok(());
        }

        self.handle_field_key(key);
        self.refresh_status();
        Ok(())
    }

    /// Drop the "fields need attention" notice once no field is marked
    fn refresh_status(&mut self) {
        if !self.lifecycle.form.has_errors() {
            self.status_message = None;
        }
    }

    /// Route a key to the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let index = self.lifecycle.form.active_field_index;
        let Some(kind) = self
            .lifecycle
            .form
            .active_form_field()
            .map(|f| f.kind.clone())
        else {
            return;
        };

        match (kind, key.code) {
            (FieldKind::Checkbox, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.lifecycle.on_input(index, |f| f.toggle());
            }
            (FieldKind::Select(_), KeyCode::Right | KeyCode::Char(' ')) => {
                self.lifecycle.on_input(index, |f| f.cycle_option(true));
            }
            (FieldKind::Select(_), KeyCode::Left) => {
                self.lifecycle.on_input(index, |f| f.cycle_option(false));
            }
            (FieldKind::Textarea, KeyCode::Enter) => {
                self.lifecycle.on_input(index, |f| f.push_char('\n'));
            }
            (_, KeyCode::Enter) => self.lifecycle.focus_next(),
            (_, KeyCode::Backspace) => {
                self.lifecycle.on_input(index, |f| f.pop_char());
            }
            (_, KeyCode::Char(c)) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.lifecycle.on_input(index, |f| f.push_char(c));
            }
            _ => {}
        }
    }

    /// Start a submission if the form validates. The client runs on its own
    /// task so the event loop keeps drawing while it is in flight.
    fn submit(&mut self) {
        match self.lifecycle.begin_submit() {
            Ok(submission) => {
                tracing::info!(
                    submission_id = %submission.submission_id(),
                    "Submitting contact form"
                );
                self.status_message = None;
                let client = Arc::clone(&self.client);
                self.pending = Some(tokio::spawn(async move { client.submit(submission).await }));
            }
            Err(SubmitError::Invalid(errors)) => {
                self.status_message = Some(format!("{} field(s) need attention", errors.len()));
            }
            Err(err) => tracing::debug!("Submit not started: {err}"),
        }
    }

    /// Whether a submission task is still outstanding
    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Collect the submission result if its task has finished
    pub async fn poll_submission(&mut self) {
        if self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            self.await_submission().await;
        }
    }

    /// Wait for the in-flight submission and apply its outcome
    pub async fn await_submission(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };

        let result = match handle.await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(err)) => Err(SubmissionError::Transport(err.to_string())),
            Err(join_err) => Err(SubmissionError::Transport(join_err.to_string())),
        };

        // The banner already reports failures; the log keeps the detail
        if let Err(err) = self.lifecycle.finish_submit(result) {
            tracing::warn!("Submission ended with error: {err}");
        }
    }

    /// Advance timers
    pub fn tick(&mut self) {
        self.lifecycle.tick();
    }
}
