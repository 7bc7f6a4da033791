//! Application layer services implementing the directory's use cases.
//!
//! Services consume the [`crate::domain::repositories::RecordStore`] trait and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::listing_service::ListingService`] - Fetch and normalize listings
//! - [`services::submission_service::SubmissionService`] - Relay visitor submissions

pub mod services;
