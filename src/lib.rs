//! # App Directory
//!
//! A public directory of third-party apps backed by a Notion database, with a
//! submission endpoint that relays visitor proposals into a second database for
//! curation. Built with Axum and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, listing entries, submissions, normalization
//! - **Application Layer** ([`application`]) - Listing retrieval and submission relay
//! - **Infrastructure Layer** ([`infrastructure`]) - Notion client, duplicate submission ledger
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered directory page
//!
//! ## Request Flow
//!
//! Every page view queries the store once, sorted ascending by name. Records
//! missing a name, link, or description are dropped; the rest are rendered in
//! store order. A store failure renders the page with a degraded-state notice.
//!
//! Every submission is validated against one shared schema, checked against the
//! duplicate ledger, and forwarded to the store at most once. The store's status
//! is reported back to the visitor.
//!
//! ## Quick Start
//!
//! ```bash
//! export NOTION_TOKEN="secret_..."
//! export NOTION_DATABASE_ID="..."
//! export NOTION_DATABASE_ID_REQUESTS="..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ListingFetch, ListingService, SubmissionService};
    pub use crate::domain::entities::{ExternalRecord, ListingEntry, Submission, SubmissionResult};
    pub use crate::domain::repositories::{RecordStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
