//! Store trait definitions for the domain layer.
//!
//! The traits abstract access to the external record store. Concrete
//! implementations live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/store_notion.rs` for the HTTP implementation.

pub mod record_store;

pub use record_store::{RecordStore, StoreError};

#[cfg(test)]
pub use record_store::MockRecordStore;
