use std::sync::Arc;

use crate::application::services::{ListingService, SubmissionService};
use crate::config::ValidationMode;
use crate::domain::repositories::RecordStore;
use crate::infrastructure::ledger::SubmissionLedger;
use crate::telemetry::AnalyticsConfig;

/// Shared state injected into every handler.
///
/// Holds no request data; everything here is either immutable configuration
/// or a thread-safe service.
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService>,
    pub submission_service: Arc<SubmissionService>,
    pub store: Arc<dyn RecordStore>,
    pub ledger: Arc<dyn SubmissionLedger>,
    pub analytics: Option<AnalyticsConfig>,
}

impl AppState {
    /// Wires the services around a store and a submission ledger.
    pub fn new(
        store: Arc<dyn RecordStore>,
        ledger: Arc<dyn SubmissionLedger>,
        validation_mode: ValidationMode,
        analytics: Option<AnalyticsConfig>,
    ) -> Self {
        let listing_service = Arc::new(ListingService::new(store.clone()));
        let submission_service = Arc::new(SubmissionService::new(
            store.clone(),
            ledger.clone(),
            validation_mode,
        ));

        Self {
            listing_service,
            submission_service,
            store,
            ledger,
            analytics,
        }
    }
}
