//! Listing retrieval and normalization service.

use std::sync::Arc;

use crate::domain::entities::ListingEntry;
use crate::domain::normalizer::normalize_all;
use crate::domain::repositories::{RecordStore, StoreError};

/// Outcome of a listing fetch.
///
/// Distinguishes "the store has no valid listings" from "the store could not
/// be read", so the page can show a degraded-state notice for the latter.
#[derive(Debug)]
pub enum ListingFetch {
    Available(Vec<ListingEntry>),
    Unavailable(StoreError),
}

impl ListingFetch {
    /// Entries to render; empty when the store was unavailable.
    pub fn entries(&self) -> &[ListingEntry] {
        match self {
            Self::Available(entries) => entries,
            Self::Unavailable(_) => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Service producing the directory's listing entries.
///
/// Queries the store once per call, normalizes every record, and keeps the
/// store's ascending-by-name order. Nothing is cached between calls.
pub struct ListingService<S: RecordStore + ?Sized = dyn RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> ListingService<S> {
    /// Creates a new listing service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches and normalizes the current listings.
    ///
    /// Store failures are not propagated as errors; they are logged and
    /// returned as [`ListingFetch::Unavailable`].
    pub async fn fetch_listings(&self) -> ListingFetch {
        let records = match self.store.query_records().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Listing fetch failed; rendering degraded page");
                return ListingFetch::Unavailable(e);
            }
        };

        let entries = normalize_all(&records);

        let discarded = records.len() - entries.len();
        if discarded > 0 {
            tracing::debug!(discarded, "Discarded incomplete listing records");
        }

        ListingFetch::Available(entries)
    }
}
