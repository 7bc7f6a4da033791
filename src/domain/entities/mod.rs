//! Core domain entities representing the directory data model.
//!
//! Entities are plain data structures. Records from the store are ephemeral:
//! they are fetched per page view, normalized, rendered, and dropped.
//!
//! # Entity Types
//!
//! - [`ExternalRecord`] - A raw, loosely-typed record from the store
//! - [`ListingEntry`] - A validated entry ready for rendering
//! - [`Submission`] - A visitor-proposed entry awaiting relay
//! - [`SubmissionResult`] - The status reported back after a relay attempt

pub mod listing;
pub mod record;
pub mod submission;

pub use listing::ListingEntry;
pub use record::ExternalRecord;
pub use submission::{Submission, SubmissionResult};
