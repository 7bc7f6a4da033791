//! Notion REST API integration.
//!
//! - [`NotionStore`] - [`crate::domain::repositories::RecordStore`] over HTTP
//! - [`types`] - Request and response bodies

mod client;
pub mod types;

pub use client::NotionStore;
