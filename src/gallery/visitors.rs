// SPDX-License-Identifier: MPL-2.0
//! Locally persisted visit counter.

use super::preferences::PreferenceStore;

/// Preference key holding the decimal visit count.
pub const VISITOR_COUNT_KEY: &str = "visitor-count";

/// Registers one visit and returns the new count.
///
/// An absent or unparsable stored value counts as no previous visit. A
/// failed write is logged; the returned count is still shown.
pub fn register_visit<S: PreferenceStore + ?Sized>(store: &mut S) -> u64 {
    let previous = store
        .get(VISITOR_COUNT_KEY)
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let count = previous.saturating_add(1);

    if let Err(error) = store.set(VISITOR_COUNT_KEY, &count.to_string()) {
        tracing::warn!(%error, "failed to persist visitor count");
    }
    tracing::info!(count, "visit registered");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::preferences::MemoryStore;

    #[test]
    fn first_visit_counts_one() {
        let mut store = MemoryStore::new();
        assert_eq!(register_visit(&mut store), 1);
        assert_eq!(store.get(VISITOR_COUNT_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn each_visit_increments() {
        let mut store = MemoryStore::new();
        register_visit(&mut store);
        register_visit(&mut store);
        assert_eq!(register_visit(&mut store), 3);
    }

    #[test]
    fn garbage_restarts_at_one() {
        let mut store = MemoryStore::new();
        store.set(VISITOR_COUNT_KEY, "lots").unwrap();
        assert_eq!(register_visit(&mut store), 1);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut store = MemoryStore::new();
        store.set(VISITOR_COUNT_KEY, &u64::MAX.to_string()).unwrap();
        assert_eq!(register_visit(&mut store), u64::MAX);
    }
}
