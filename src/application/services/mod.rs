//! Business logic services for the application layer.

pub mod listing_service;
pub mod submission_service;

pub use listing_service::{ListingFetch, ListingService};
pub use submission_service::SubmissionService;
