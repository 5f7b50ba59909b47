//! Once-per-address admission

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// The set of addresses already admitted during one scan session.
///
/// Used only when the session runs in "once" mode; otherwise every event is admitted without consulting it.
#[derive(Debug, Default)]
pub struct AddressDeduplicator {
    seen: Mutex<HashSet<u64>>,
}

impl AddressDeduplicator {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `address` is admitted and `false` on every later call.
    ///
    /// The check and the insert happen under one lock, so concurrent callers with the same address see exactly one
    /// `true` between them.
    pub fn try_admit(&self, address: u64) -> bool {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).insert(address)
    }

    /// Number of distinct addresses admitted so far
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no address has been admitted yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::AddressDeduplicator;

    #[test]
    fn admits_once() {
        let dedup = AddressDeduplicator::new();
        assert!(dedup.try_admit(0xAABBCCDDEEFF));
        assert!(!dedup.try_admit(0xAABBCCDDEEFF));
        assert!(!dedup.try_admit(0xAABBCCDDEEFF));
        assert!(dedup.try_admit(0x112233445566));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn concurrent_admission_has_one_winner() {
        let dedup = Arc::new(AddressDeduplicator::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let dedup = dedup.clone();
                std::thread::spawn(move || dedup.try_admit(0x0102030405))
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|admitted| *admitted)
            .count();
        assert_eq!(admitted, 1);
    }
}
