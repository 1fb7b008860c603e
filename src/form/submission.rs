//! Lifecycle of a form's submit attempts.
//!
//! `Idle -> Pending -> Succeeded | Failed`, and either terminal state may
//! start a new attempt. At most one attempt is pending per form.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionResult {
    #[default]
    Idle,
    Pending,
    /// Carries the issued session token.
    Succeeded(String),
    Failed(ApiError),
}

impl SubmissionResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionResult::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionResult::Succeeded(_) | SubmissionResult::Failed(_))
    }

    /// Submit is allowed from every state except `Pending`.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    /// State name for log lines; never includes the token.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionResult::Idle => "idle",
            SubmissionResult::Pending => "pending",
            SubmissionResult::Succeeded(_) => "succeeded",
            SubmissionResult::Failed(_) => "failed",
        }
    }
}
