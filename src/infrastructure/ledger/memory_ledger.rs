//! In-memory ledger with a time window.

use super::service::{Claim, SubmissionLedger};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Upper bound on remembered keys; beyond it new keys are relayed untracked.
const MAX_TRACKED_KEYS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Pending,
    Committed,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: KeyState,
    since: Instant,
}

/// Ledger keeping idempotency keys in a process-local map.
///
/// Entries expire `window` after they were claimed (pending) or committed.
/// Expired entries are pruned on every claim. The lock is never held across an
/// await point.
pub struct MemoryLedger {
    window: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryLedger {
    pub fn new(window: Duration) -> Self {
        info!("Duplicate submission window: {}s", window.as_secs());
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn claim_at(&self, key: &str, now: Instant) -> Claim {
        let mut entries = self.entries();

        entries.retain(|_, entry| now.saturating_duration_since(entry.since) < self.window);

        if let Some(entry) = entries.get(key) {
            debug!(key, state = ?entry.state, "Repeated submission key");
            return match entry.state {
                KeyState::Pending => Claim::Pending,
                KeyState::Committed => Claim::Committed,
            };
        }

        if entries.len() >= MAX_TRACKED_KEYS {
            warn!("Submission ledger full; relaying key untracked");
            return Claim::Acquired;
        }

        entries.insert(
            key.to_string(),
            Entry {
                state: KeyState::Pending,
                since: now,
            },
        );
        Claim::Acquired
    }

    fn commit_at(&self, key: &str, now: Instant) {
        if let Some(entry) = self.entries().get_mut(key) {
            entry.state = KeyState::Committed;
            entry.since = now;
        }
    }
}

impl SubmissionLedger for MemoryLedger {
    fn claim(&self, key: &str) -> Claim {
        self.claim_at(key, Instant::now())
    }

    fn commit(&self, key: &str) {
        self.commit_at(key, Instant::now());
    }

    fn release(&self, key: &str) {
        let mut entries = self.entries();
        if entries
            .get(key)
            .is_some_and(|entry| entry.state == KeyState::Pending)
        {
            entries.remove(key);
        }
    }

    fn tracked(&self) -> usize {
        self.entries().len()
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_key_reported_as_pending() {
        let ledger = MemoryLedger::new(Duration::from_secs(60));
        let now = Instant::now();

        assert_eq!(ledger.claim_at("abc", now), Claim::Acquired);
        assert_eq!(
            ledger.claim_at("abc", now + Duration::from_secs(1)),
            Claim::Pending
        );
        assert_eq!(ledger.claim_at("other", now), Claim::Acquired);
        assert_eq!(ledger.tracked(), 2);
    }

    #[test]
    fn test_committed_key_within_window_rejected() {
        let ledger = MemoryLedger::new(Duration::from_secs(60));
        let now = Instant::now();

        ledger.claim_at("abc", now);
        ledger.commit_at("abc", now);

        assert_eq!(
            ledger.claim_at("abc", now + Duration::from_secs(30)),
            Claim::Committed
        );
    }

    #[test]
    fn test_window_starts_at_commit() {
        let ledger = MemoryLedger::new(Duration::from_secs(60));
        let now = Instant::now();

        ledger.claim_at("abc", now);
        ledger.commit_at("abc", now + Duration::from_secs(50));

        assert_eq!(
            ledger.claim_at("abc", now + Duration::from_secs(100)),
            Claim::Committed
        );
        assert_eq!(
            ledger.claim_at("abc", now + Duration::from_secs(110)),
            Claim::Acquired
        );
    }

    #[test]
    fn test_released_key_can_be_claimed_again() {
        let ledger = MemoryLedger::new(Duration::from_secs(60));

        assert_eq!(ledger.claim("abc"), Claim::Acquired);
        ledger.release("abc");
        assert_eq!(ledger.tracked(), 0);
        assert_eq!(ledger.claim("abc"), Claim::Acquired);
    }

    #[test]
    fn test_release_keeps_committed_key() {
        let ledger = MemoryLedger::new(Duration::from_secs(60));

        ledger.claim("abc");
        ledger.commit("abc");
        ledger.release("abc");

        assert_eq!(ledger.claim("abc"), Claim::Committed);
    }

    #[test]
    fn test_expired_entries_pruned() {
        let ledger = MemoryLedger::new(Duration::from_secs(1));
        let now = Instant::now();

        ledger.claim_at("a", now);
        ledger.claim_at("b", now);
        ledger.commit_at("b", now);
        ledger.claim_at("c", now + Duration::from_secs(5));

        assert_eq!(ledger.tracked(), 1);
        assert!(ledger.is_enabled());
    }
}
