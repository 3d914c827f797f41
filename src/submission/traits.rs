//! Trait abstraction for the submission operation to enable mocking in tests

use super::SubmissionOutcome;
use crate::state::FormSubmission;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can receive a validated contact form submission.
///
/// Implementations report a rejected submission as
/// `Ok(SubmissionOutcome::Failure(..))` and reserve `Err` for transport
/// problems; the lifecycle shows the error banner for both.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// Deliver a submission
    async fn submit(&self, submission: FormSubmission) -> Result<SubmissionOutcome>;
}
