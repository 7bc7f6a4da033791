//! Client-side submission lifecycle.
//!
//! The directory page drives its submission form through the transitions below;
//! the page script mirrors this model and reads [`SUCCESS_RESET_DELAY`] from the
//! rendered page. The admin CLI uses the model directly.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success --delay--> Idle (fields cleared)
//!                       |
//!                       +--failure--> Idle (fields kept for retry)
//! ```

use std::time::{Duration, Instant};

use crate::domain::entities::Submission;

/// How long the success state is shown before the form resets.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Current phase of the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success { since: Instant },
}

/// Submission form state: field values plus the lifecycle phase.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    pub email: String,
    pub twitter: String,
    pub link: String,
    phase: FormPhase,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            twitter: String::new(),
            link: String::new(),
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Starts a submission.
    ///
    /// Returns `false` and leaves the state untouched unless the form is idle.
    /// This is the in-flight guard of the page; it is advisory only and does not
    /// stop a second tab from submitting.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Records the outcome of the in-flight submission.
    pub fn finish(&mut self, succeeded: bool, now: Instant) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = if succeeded {
            FormPhase::Success { since: now }
        } else {
            FormPhase::Idle
        };
    }

    /// Advances time. Leaves the success state and clears the fields once the
    /// reset delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let FormPhase::Success { since } = self.phase
            && now.saturating_duration_since(since) >= SUCCESS_RESET_DELAY
        {
            self.email.clear();
            self.twitter.clear();
            self.link.clear();
            self.phase = FormPhase::Idle;
        }
    }

    /// Builds the submission payload from the current field values.
    pub fn submission(&self) -> Submission {
        Submission::from_parts(
            Some(self.email.clone()),
            Some(self.link.clone()),
            Some(self.twitter.clone()),
        )
    }
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::new()
    }
}
