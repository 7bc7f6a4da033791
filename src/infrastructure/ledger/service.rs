//! Submission ledger trait.

/// Outcome of claiming an idempotency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The key was unknown; the caller now owns it and should relay.
    Acquired,
    /// Another relay with this key is still in flight.
    Pending,
    /// A relay with this key succeeded within the window.
    Committed,
}

/// Remembers idempotency keys of in-flight and successfully relayed submissions.
///
/// Implementations must be thread-safe. A key is claimed as pending before the
/// store is contacted, committed only after the store accepted the record, and
/// released otherwise, so only successful relays suppress later repeats.
///
/// # Implementations
///
/// - [`crate::infrastructure::ledger::MemoryLedger`] - In-process map with a time window
/// - [`crate::infrastructure::ledger::NullLedger`] - Remembers nothing (de-duplication disabled)
pub trait SubmissionLedger: Send + Sync {
    /// Claims `key` as pending unless it is already pending or committed.
    fn claim(&self, key: &str) -> Claim;

    /// Marks a pending `key` as successfully relayed. The window starts now.
    fn commit(&self, key: &str);

    /// Forgets a pending `key` so that a retry is relayed again.
    ///
    /// Committed keys are left untouched.
    fn release(&self, key: &str);

    /// Number of keys currently remembered.
    fn tracked(&self) -> usize;

    /// Returns whether de-duplication is active.
    fn is_enabled(&self) -> bool;
}
