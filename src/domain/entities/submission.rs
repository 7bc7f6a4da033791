//! Visitor submission entity and relay outcome.

use serde::Serialize;
use validator::{Validate, ValidationError};

/// A candidate directory entry proposed by a visitor.
///
/// `email` and `link` are required; `twitter` is optional. The same schema backs
/// the HTML form (see [`Submission::REQUIRED_FIELDS`]) and the relay entry point,
/// so both layers reject the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Submission {
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Project URL is required"))]
    pub link: String,

    pub twitter: Option<String>,
}

impl Submission {
    /// Form field names that must be filled in.
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["email", "link"];

    /// Builds a submission from raw form values.
    ///
    /// Missing required values become empty strings so that they can still be
    /// forwarded when validation is disabled. A blank twitter handle is dropped.
    pub fn from_parts(email: Option<String>, link: Option<String>, twitter: Option<String>) -> Self {
        Self {
            email: email.unwrap_or_default(),
            link: link.unwrap_or_default(),
            twitter: twitter.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Returns true if `field` is one of [`Self::REQUIRED_FIELDS`].
    pub fn is_required(field: &str) -> bool {
        Self::REQUIRED_FIELDS.contains(&field)
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Outcome of a relay attempt: the status code to report to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionResult {
    pub status: u16,
    /// Set when the request repeated a known idempotency key and was answered
    /// without contacting the store.
    pub duplicate: bool,
}

impl SubmissionResult {
    /// Result carrying the store's response status.
    pub fn forwarded(status: u16) -> Self {
        Self {
            status,
            duplicate: false,
        }
    }

    /// Result for a repeated idempotency key.
    pub fn duplicate() -> Self {
        Self {
            status: 200,
            duplicate: true,
        }
    }

    /// Result for a key whose first relay is still in flight.
    ///
    /// Reported as 409 so the client stays free to retry once that relay
    /// settles.
    pub fn in_progress() -> Self {
        Self {
            status: 409,
            duplicate: true,
        }
    }

    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_fills_missing_with_empty() {
        let submission = Submission::from_parts(None, Some("https://x.io".to_string()), None);

        assert_eq!(submission.email, "");
        assert_eq!(submission.link, "https://x.io");
        assert!(submission.twitter.is_none());
    }

    #[test]
    fn test_blank_twitter_dropped() {
        let submission = Submission::from_parts(
            Some("a@b.com".to_string()),
            Some("https://x.io".to_string()),
            Some("  ".to_string()),
        );
        assert!(submission.twitter.is_none());
    }

    #[test]
    fn test_validation_accepts_complete_submission() {
        let submission = Submission::from_parts(
            Some("a@b.com".to_string()),
            Some("https://x.io".to_string()),
            Some("@john".to_string()),
        );
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_required_fields() {
        let submission = Submission::from_parts(Some(" ".to_string()), None, None);

        let errors = submission.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("link"));
        assert!(!fields.contains_key("twitter"));
    }

    #[test]
    fn test_required_fields() {
        assert!(Submission::is_required("email"));
        assert!(Submission::is_required("link"));
        assert!(!Submission::is_required("twitter"));
    }

    #[test]
    fn test_submission_result_success_range() {
        assert!(SubmissionResult::forwarded(200).is_success());
        assert!(SubmissionResult::forwarded(201).is_success());
        assert!(!SubmissionResult::forwarded(400).is_success());
        assert!(!SubmissionResult::forwarded(500).is_success());

        let duplicate = SubmissionResult::duplicate();
        assert!(duplicate.is_success());
        assert!(duplicate.duplicate);

        let in_progress = SubmissionResult::in_progress();
        assert_eq!(in_progress.status, 409);
        assert!(!in_progress.is_success());
    }
}
