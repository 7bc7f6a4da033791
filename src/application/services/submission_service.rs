//! Submission relay service.

use std::sync::Arc;

use validator::Validate;

use crate::config::ValidationMode;
use crate::domain::entities::{Submission, SubmissionResult};
use crate::domain::repositories::RecordStore;
use crate::error::AppError;
use crate::infrastructure::ledger::{Claim, SubmissionLedger};

/// Service relaying visitor submissions to the store's submission collection.
///
/// Each call issues at most one store request. Store failures are reported as a
/// status code only; the underlying error is logged, never returned.
pub struct SubmissionService<S: RecordStore + ?Sized = dyn RecordStore> {
    store: Arc<S>,
    ledger: Arc<dyn SubmissionLedger>,
    validation_mode: ValidationMode,
}

impl<S: RecordStore + ?Sized> SubmissionService<S> {
    /// Creates a new submission service.
    pub fn new(
        store: Arc<S>,
        ledger: Arc<dyn SubmissionLedger>,
        validation_mode: ValidationMode,
    ) -> Self {
        Self {
            store,
            ledger,
            validation_mode,
        }
    }

    /// Relays a submission and reports the resulting status.
    ///
    /// # Flow
    ///
    /// 1. In [`ValidationMode::Strict`], blank required fields are rejected
    /// 2. A non-empty `idempotency_key` is claimed in the ledger. A key whose
    ///    relay succeeded within the window is answered with
    ///    [`SubmissionResult::duplicate`]; a key still in flight is answered with
    ///    [`SubmissionResult::in_progress`]
    /// 3. The submission is forwarded; the store's status becomes the result,
    ///    or 500 when the store is unreachable or its response unparsable
    /// 4. The key is committed only after a 2xx. Otherwise it is released,
    ///    including when this future is dropped mid-relay
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when strict validation fails. Store
    /// failures are not errors; they are carried in the returned status.
    pub async fn relay(
        &self,
        submission: Submission,
        idempotency_key: Option<&str>,
    ) -> Result<SubmissionResult, AppError> {
        if self.validation_mode == ValidationMode::Strict {
            submission.validate()?;
        }

        let key = idempotency_key.map(str::trim).filter(|k| !k.is_empty());

        let claim = match key {
            Some(key) => match self.ledger.claim(key) {
                Claim::Acquired => Some(KeyClaim::new(self.ledger.as_ref(), key)),
                Claim::Pending => {
                    tracing::info!("Submission with the same key still in flight");
                    return Ok(SubmissionResult::in_progress());
                }
                Claim::Committed => {
                    tracing::info!("Duplicate submission answered without relay");
                    return Ok(SubmissionResult::duplicate());
                }
            },
            None => None,
        };

        let result = match self.store.create_record(&submission).await {
            Ok(status) => SubmissionResult::forwarded(status),
            Err(e) => {
                tracing::warn!(error = %e, "Submission relay failed");
                SubmissionResult::forwarded(e.status())
            }
        };

        if result.is_success()
            && let Some(claim) = claim
        {
            claim.commit();
        }

        Ok(result)
    }
}

/// A pending ledger key owned by one relay.
///
/// Released on drop unless committed, so a failed or cancelled relay never
/// leaves its key blocking retries.
struct KeyClaim<'a> {
    ledger: &'a dyn SubmissionLedger,
    key: &'a str,
    committed: bool,
}

impl<'a> KeyClaim<'a> {
    fn new(ledger: &'a dyn SubmissionLedger, key: &'a str) -> Self {
        Self {
            ledger,
            key,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.ledger.commit(self.key);
        self.committed = true;
    }
}

impl Drop for KeyClaim<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.ledger.release(self.key);
        }
    }
}
