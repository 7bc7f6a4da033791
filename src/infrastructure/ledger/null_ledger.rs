//! No-op ledger used when de-duplication is disabled.

use super::service::{Claim, SubmissionLedger};
use tracing::debug;

/// A ledger that never remembers a key.
///
/// Every submission is relayed, matching a deployment without idempotency keys.
pub struct NullLedger;

impl NullLedger {
    pub fn new() -> Self {
        debug!("Using NullLedger (duplicate submissions are relayed)");
        Self
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionLedger for NullLedger {
    fn claim(&self, _key: &str) -> Claim {
        Claim::Acquired
    }

    fn commit(&self, _key: &str) {}

    fn release(&self, _key: &str) {}

    fn tracked(&self) -> usize {
        0
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_ledger_always_claims() {
        let ledger = NullLedger::new();

        assert_eq!(ledger.claim("k"), Claim::Acquired);
        ledger.commit("k");
        assert_eq!(ledger.claim("k"), Claim::Acquired);
        assert_eq!(ledger.tracked(), 0);
        assert!(!ledger.is_enabled());
    }
}
