//! Submission seam: the operation a filled-in form is handed to

mod client;
mod traits;

pub use client::SimulatedSubmissionClient;
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;

use thiserror::Error;

/// Result classification of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Operation-level failure, surfaced as a form-wide banner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The receiving side answered with a failure outcome
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The submission never produced an outcome
    #[error("submission failed: {0}")]
    Transport(String),
}
