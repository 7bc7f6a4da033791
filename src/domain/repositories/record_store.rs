//! Store trait for directory records.

use crate::domain::entities::{ExternalRecord, Submission};
use async_trait::async_trait;

/// Errors raised by a [`RecordStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("record store unreachable: {0}")]
    Network(String),

    /// The store answered, but the body could not be decoded.
    #[error("record store response could not be decoded: {0}")]
    Decode(String),

    /// The store answered with a non-success status.
    #[error("record store returned {status}: {message}")]
    Upstream { status: u16, message: String },
}

impl StoreError {
    /// Status code to report for this failure.
    ///
    /// Upstream failures mirror the store's status; everything else is a 500.
    pub fn status(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Network(_) | Self::Decode(_) => 500,
        }
    }
}

/// Access to the external record store.
///
/// # Implementations
///
/// - [`crate::infrastructure::notion::NotionStore`] - Notion REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Queries every listing record, sorted ascending by name.
    ///
    /// Issues exactly one request. No retries.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Upstream`] on a non-success status
    /// - [`StoreError::Network`] / [`StoreError::Decode`] when the store is
    ///   unreachable or the response is unparsable
    async fn query_records(&self) -> Result<Vec<ExternalRecord>, StoreError>;

    /// Creates a candidate record in the submission collection.
    ///
    /// # Returns
    ///
    /// The store's success status code.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`RecordStore::query_records`].
    async fn create_record(&self, submission: &Submission) -> Result<u16, StoreError>;

    /// Checks that the listing collection is reachable with the configured credential.
    async fn health_check(&self) -> Result<(), StoreError>;
}
