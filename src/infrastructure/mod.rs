//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`notion`] - Record store over the Notion REST API
//! - [`ledger`] - Duplicate submission suppression (in-memory and no-op implementations)

pub mod ledger;
pub mod notion;
