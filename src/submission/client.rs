//! Stand-in submission client
//!
//! Waits for a fixed delay, logs the payload and reports success. A real
//! transport replaces this behind [`SubmissionClientTrait`].

use super::{SubmissionClientTrait, SubmissionOutcome};
use crate::state::FormSubmission;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated network delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Client that simulates a network round trip without sending anything
#[derive(Debug, Clone)]
pub struct SimulatedSubmissionClient {
    delay: Duration,
}

impl SimulatedSubmissionClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmissionClient {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionClientTrait for SimulatedSubmissionClient {
    async fn submit(&self, submission: FormSubmission) -> Result<SubmissionOutcome> {
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(&submission)?;
        tracing::info!(
            submission_id = %submission.submission_id(),
            submitted_at = %submission.submitted_at(),
            %payload,
            "Form submitted"
        );

        Ok(SubmissionOutcome::Success)
    }
}
