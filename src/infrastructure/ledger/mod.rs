//! Duplicate submission suppression.
//!
//! Provides a [`SubmissionLedger`] trait with two implementations:
//! - [`MemoryLedger`] - In-process, time-windowed key set
//! - [`NullLedger`] - No-op implementation for disabled de-duplication

mod memory_ledger;
mod null_ledger;
mod service;

pub use memory_ledger::MemoryLedger;
pub use null_ledger::NullLedger;
pub use service::{Claim, SubmissionLedger};
