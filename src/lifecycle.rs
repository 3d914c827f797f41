//! Form validation and submission lifecycle
//!
//! Drives the contact form through
//! `Idle -> Validating -> Submitting -> (Succeeded | Failed) -> Idle`.
//! The lifecycle owns the field set, the message panel and the submit
//! control it is constructed with; rendering reads them back.
//!
//! Submitting is split in two halves so the event loop can keep running
//! while the submission is in flight: [`FormLifecycle::begin_submit`]
//! validates and enters the loading state, [`FormLifecycle::finish_submit`]
//! consumes the outcome. [`FormLifecycle::submit`] chains both for callers
//! that can simply await.

use crate::messages::Messages;
use crate::state::{
    ContactForm, FormField, FormSubmission, MessageKind, MessagePanel, SubmitControl,
    ValidationError,
};
use crate::submission::{SubmissionClientTrait, SubmissionError, SubmissionOutcome};
use thiserror::Error;
use tokio::time::{Duration, Instant};

/// How long the success banner stays up
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_millis(10_000);

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit action did not end in success
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error("a submission is already in progress")]
    InProgress,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Tunables for the lifecycle
#[derive(Debug, Clone, Copy)]
pub struct LifecycleSettings {
    pub messages: Messages,
    pub success_message_ttl: Duration,
}

impl Default for LifecycleSettings {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            success_message_ttl: SUCCESS_MESSAGE_TTL,
        }
    }
}

/// The form validation and submission controller
#[derive(Debug, Clone)]
pub struct FormLifecycle {
    pub form: ContactForm,
    pub message: MessagePanel,
    pub submit_control: SubmitControl,
    phase: LifecyclePhase,
    settings: LifecycleSettings,
}

impl FormLifecycle {
    pub fn new(
        form: ContactForm,
        message: MessagePanel,
        submit_control: SubmitControl,
        settings: LifecycleSettings,
    ) -> Self {
        Self {
            form,
            message,
            submit_control,
            phase: LifecyclePhase::Idle,
            settings,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn messages(&self) -> &Messages {
        &self.settings.messages
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LifecyclePhase::Submitting
    }

    fn transition(&mut self, next: LifecyclePhase) {
        tracing::debug!("Form lifecycle {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    /// A field lost focus: validate it
    pub fn on_blur(&mut self, index: usize) -> Result<(), ValidationError> {
        self.form.blur(index, &self.settings.messages)
    }

    /// A field's content changed: apply the edit and drop its error marker
    pub fn on_input(&mut self, index: usize, edit: impl FnOnce(&mut FormField) -> bool) -> bool {
        self.form.input(index, edit)
    }

    pub fn focus_next(&mut self) {
        self.form.focus_next(&self.settings.messages);
    }

    pub fn focus_prev(&mut self) {
        self.form.focus_prev(&self.settings.messages);
    }

    /// Handle a submit action up to the point where the submission is handed
    /// off. On success the form is in `Submitting` with the control disabled
    /// and the returned snapshot must be passed to a client, with the result
    /// fed back through [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<FormSubmission, SubmitError> {
        if self.is_submitting() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return Err(SubmitError::InProgress);
        }

        // A new attempt replaces whatever the previous one left on screen
        self.message.hide();
        self.transition(LifecyclePhase::Validating);

        match self.form.try_snapshot(&self.settings.messages) {
            Ok(submission) => {
                self.submit_control.begin_loading();
                self.transition(LifecyclePhase::Submitting);
                Ok(submission)
            }
            Err(errors) => {
                tracing::debug!("Submit blocked by {} invalid field(s)", errors.len());
                self.transition(LifecyclePhase::Idle);
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Consume the result of the submission started by
    /// [`Self::begin_submit`]. The submit control is restored on every path.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionOutcome, SubmissionError>,
    ) -> Result<(), SubmitError> {
        if !self.is_submitting() {
            tracing::warn!("Submission result arrived outside of a submission; dropping it");
            return Ok(());
        }

        let now = Instant::now();
        let outcome = match result {
            Ok(SubmissionOutcome::Success) => Ok(()),
            Ok(SubmissionOutcome::Failure(reason)) => Err(SubmissionError::Rejected(reason)),
            Err(err) => Err(err),
        };

        let finished = match outcome {
            Ok(()) => {
                tracing::info!("Form submission succeeded");
                self.message.show(
                    MessageKind::Success,
                    self.settings.messages.submission_success,
                    Some(self.settings.success_message_ttl),
                    now,
                );
                self.form.reset();
                tracing::debug!(class = %self.message.class_name(), "Showing form message");
                self.transition(LifecyclePhase::Succeeded);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Form submission error: {err}");
                self.message.show(
                    MessageKind::Error,
                    self.settings.messages.submission_error,
                    None,
                    now,
                );
                tracing::debug!(class = %self.message.class_name(), "Showing form message");
                self.transition(LifecyclePhase::Failed);
                Err(SubmitError::Submission(err))
            }
        };

        self.submit_control.finish_loading();
        finished
    }

    /// Full submit action: validate, hand off to `client`, render the outcome
    pub async fn submit(&mut self, client: &dyn SubmissionClientTrait) -> Result<(), SubmitError> {
        let submission = self.begin_submit()?;
        let result = client
            .submit(submission)
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()));
        self.finish_submit(result)
    }

    /// Advance timers: hides the success banner once its time is up
    pub fn tick(&mut self) {
        if self.message.tick(Instant::now()) && self.phase == LifecyclePhase::Succeeded {
            self.transition(LifecyclePhase::Idle);
        }
    }
}

impl Default for FormLifecycle {
    fn default() -> Self {
        Self::new(
            ContactForm::new(),
            MessagePanel::new(),
            SubmitControl::new(),
            LifecycleSettings::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ValidationErrorKind;
    use crate::submission::MockSubmissionClientTrait;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn fill(lifecycle: &mut FormLifecycle, values: &[(&str, &str)]) {
        for (name, value) in values {
            if let Some(field) = lifecycle.form.field_mut(name) {
                field.set_text(*value);
            }
        }
    }

    fn valid_lifecycle() -> FormLifecycle {
        let mut lifecycle = FormLifecycle::default();
        fill(
            &mut lifecycle,
            &[
                ("name", "Ola"),
                ("email", "ola@x.no"),
                ("phone", "12345678"),
                ("projectType", "foundation"),
                ("description", "test"),
            ],
        );
        lifecycle
    }

    fn succeeding_client() -> MockSubmissionClientTrait {
        let mut client = MockSubmissionClientTrait::new();
        client
            .expect_submit()
            .times(1)
            .returning(|_| Ok(SubmissionOutcome::Success));
        client
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_required_field_blocks_submission() {
            let mut lifecycle = valid_lifecycle();
            fill(&mut lifecycle, &[("name", "")]);
            let mut client = MockSubmissionClientTrait::new();
            client.expect_submit().times(0);

            let err = lifecycle.submit(&client).await.unwrap_err();

            match err {
                SubmitError::Invalid(errors) => {
                    assert_eq!(errors.len(), 1);
                    assert_eq!(errors[0].kind, ValidationErrorKind::Required);
                }
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
        }

        #[tokio::test]
        async fn test_failing_example_annotates_all_three_fields() {
            let mut lifecycle = FormLifecycle::default();
            fill(
                &mut lifecycle,
                &[("name", ""), ("email", "bad"), ("phone", "123")],
            );
            let mut client = MockSubmissionClientTrait::new();
            client.expect_submit().times(0);

            let err = lifecycle.submit(&client).await.unwrap_err();

            let SubmitError::Invalid(errors) = err else {
                panic!("expected validation errors");
            };
            let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    ValidationErrorKind::Required,
                    ValidationErrorKind::InvalidEmail,
                    ValidationErrorKind::InvalidPhone,
                ]
            );
            assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
            assert!(lifecycle.submit_control.is_enabled());
            assert!(!lifecycle.submit_control.is_loading());
            assert!(!lifecycle.message.is_visible());
            assert_eq!(
                lifecycle.form.field("email").and_then(|f| f.error_message()),
                Some("please provide a valid email address")
            );
        }

        #[test]
        fn test_blocked_submit_keeps_values() {
            let mut lifecycle = FormLifecycle::default();
            fill(&mut lifecycle, &[("email", "bad")]);
            assert!(lifecycle.begin_submit().is_err());
            assert_eq!(
                lifecycle.form.field("email").map(|f| f.as_text()),
                Some("bad")
            );
        }

        #[test]
        fn test_input_after_error_removes_marker() {
            let mut lifecycle = FormLifecycle::default();
            fill(&mut lifecycle, &[("phone", "123")]);
            assert!(lifecycle.on_blur(2).is_err());
            assert!(lifecycle.form.fields[2].is_invalid());

            lifecycle.on_input(2, |f| {
                f.set_text("");
                true
            });

            assert!(!lifecycle.form.fields[2].is_invalid());
        }
    }

    mod success {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_example_succeeds_and_resets_form() {
            let mut lifecycle = valid_lifecycle();
            let client = succeeding_client();

            lifecycle.submit(&client).await.unwrap();

            assert_eq!(lifecycle.phase(), LifecyclePhase::Succeeded);
            assert!(lifecycle.message.is_visible());
            assert_eq!(lifecycle.message.kind(), Some(MessageKind::Success));
            assert_eq!(
                lifecycle.message.class_name(),
                "form-message form-message--success"
            );
            let fields = &lifecycle.form.fields;
            assert!(fields.iter().all(|f| f.as_text().is_empty()));
            assert!(lifecycle.submit_control.is_enabled());
            assert!(!lifecycle.submit_control.is_loading());
        }

        #[tokio::test]
        async fn test_client_receives_snapshot_values() {
            let mut lifecycle = valid_lifecycle();
            let mut client = MockSubmissionClientTrait::new();
            client
                .expect_submit()
                .withf(|s| {
                    s.name() == "Ola"
                        && s.email() == "ola@x.no"
                        && s.phone() == "12345678"
                        && s.project_type() == "foundation"
                        && s.description() == "test"
                        && !s.want_site_visit()
                })
                .times(1)
                .returning(|_| Ok(SubmissionOutcome::Success));

            lifecycle.submit(&client).await.unwrap();
        }

        #[test]
        fn test_begin_submit_enters_loading_state() {
            let mut lifecycle = valid_lifecycle();

            let submission = lifecycle.begin_submit().unwrap();

            assert_eq!(submission.name(), "Ola");
            assert_eq!(lifecycle.phase(), LifecyclePhase::Submitting);
            assert!(!lifecycle.submit_control.is_enabled());
            assert!(lifecycle.submit_control.is_loading());
            assert_eq!(
                lifecycle.submit_control.label(lifecycle.messages()),
                "Sending..."
            );
        }

        #[test]
        fn test_resubmit_while_submitting_is_ignored() {
            let mut lifecycle = valid_lifecycle();
            lifecycle.begin_submit().unwrap();

            assert_eq!(lifecycle.begin_submit(), Err(SubmitError::InProgress));
            assert_eq!(lifecycle.phase(), LifecyclePhase::Submitting);
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_banner_hides_after_ten_seconds() {
            let mut lifecycle = valid_lifecycle();
            lifecycle.submit(&succeeding_client()).await.unwrap();

            tokio::time::advance(Duration::from_millis(9_999)).await;
            lifecycle.tick();
            assert!(lifecycle.message.is_visible());
            assert_eq!(lifecycle.phase(), LifecyclePhase::Succeeded);

            tokio::time::advance(Duration::from_millis(1)).await;
            lifecycle.tick();
            assert!(!lifecycle.message.is_visible());
            assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
        }

        #[tokio::test(start_paused = true)]
        async fn test_custom_success_ttl() {
            let mut lifecycle = FormLifecycle::new(
                valid_lifecycle().form,
                MessagePanel::new(),
                SubmitControl::new(),
                LifecycleSettings {
                    messages: Messages::NORWEGIAN,
                    success_message_ttl: Duration::from_secs(2),
                },
            );
            lifecycle.submit(&succeeding_client()).await.unwrap();
            let text = lifecycle.message.text();
            assert!(text.starts_with("Takk for din henvendelse"));

            tokio::time::advance(Duration::from_secs(2)).await;
            lifecycle.tick();
            assert!(!lifecycle.message.is_visible());
        }
    }

    mod failure {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_failure_outcome_shows_error_banner() {
            let mut lifecycle = valid_lifecycle();
            let mut client = MockSubmissionClientTrait::new();
            client
                .expect_submit()
                .times(1)
                .returning(|_| Ok(SubmissionOutcome::Failure("mailbox full".to_string())));

            let err = lifecycle.submit(&client).await.unwrap_err();

            assert_eq!(
                err,
                SubmitError::Submission(SubmissionError::Rejected("mailbox full".to_string()))
            );
            assert_eq!(lifecycle.phase(), LifecyclePhase::Failed);
            assert_eq!(lifecycle.message.kind(), Some(MessageKind::Error));
            assert_eq!(
                lifecycle.message.text(),
                Messages::ENGLISH.submission_error
            );
            // Values are kept so the user can retry
            assert_eq!(
                lifecycle.form.field("name").map(|f| f.as_text()),
                Some("Ola")
            );
            assert!(lifecycle.submit_control.is_enabled());
            assert!(!lifecycle.submit_control.is_loading());
        }

        #[tokio::test]
        async fn test_transport_error_takes_error_path() {
            let mut lifecycle = valid_lifecycle();
            let mut client = MockSubmissionClientTrait::new();
            client
                .expect_submit()
                .times(1)
                .returning(|_| Err(anyhow!("connection refused")));

            let err = lifecycle.submit(&client).await.unwrap_err();

            assert_eq!(
                err,
                SubmitError::Submission(SubmissionError::Transport(
                    "connection refused".to_string()
                ))
            );
            assert_eq!(lifecycle.phase(), LifecyclePhase::Failed);
            assert!(lifecycle.submit_control.is_enabled());
        }

        #[tokio::test(start_paused = true)]
        async fn test_error_banner_does_not_auto_hide() {
            let mut lifecycle = valid_lifecycle();
            lifecycle.begin_submit().unwrap();
            let _ = lifecycle.finish_submit(Ok(SubmissionOutcome::Failure("nope".to_string())));

            tokio::time::advance(Duration::from_secs(60)).await;
            lifecycle.tick();

            assert!(lifecycle.message.is_visible());
            assert_eq!(lifecycle.phase(), LifecyclePhase::Failed);
        }

        #[test]
        fn test_next_attempt_clears_error_banner() {
            let mut lifecycle = valid_lifecycle();
            lifecycle.begin_submit().unwrap();
            let _ = lifecycle.finish_submit(Err(SubmissionError::Transport("down".to_string())));
            assert!(lifecycle.message.is_visible());

            let submission = lifecycle.begin_submit();

            assert!(submission.is_ok());
            assert!(!lifecycle.message.is_visible());
        }

        #[test]
        fn test_stray_result_is_dropped() {
            let mut lifecycle = valid_lifecycle();
            assert!(lifecycle
                .finish_submit(Ok(SubmissionOutcome::Success))
                .is_ok());
            assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
            assert!(!lifecycle.message.is_visible());
            assert_eq!(
                lifecycle.form.field("name").map(|f| f.as_text()),
                Some("Ola")
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_attempt_cancels_pending_auto_hide() {
        let mut lifecycle = valid_lifecycle();
        lifecycle.submit(&succeeding_client()).await.unwrap();

        // Submit an empty form: the success banner goes away immediately
        let _ = lifecycle.begin_submit();
        assert!(!lifecycle.message.is_visible());
        assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);

        tokio::time::advance(SUCCESS_MESSAGE_TTL).await;
        lifecycle.tick();
        assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
    }
}
