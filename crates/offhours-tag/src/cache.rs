//! Memoized parse outcomes keyed by the raw tag.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::tag::core::Schedule;

/// A cached parse outcome; `None` marks a tag that failed to parse.
pub type CachedOutcome = Option<Arc<Schedule>>;

/// Process-lifetime cache of parse outcomes.
///
/// Keys are raw tags used verbatim. Invalid outcomes are cached as well, so
/// a malformed tag is only parsed once. Entries are never evicted; `clear`
/// exists to reset state between tests.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    entries: RwLock<HashMap<String, CachedOutcome>>,
    computed: AtomicUsize,
}

impl ScheduleCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for `tag`, if any.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<CachedOutcome> {
        self.read_entries().get(tag).cloned()
    }

    /// Stores an outcome, replacing any existing entry for `tag`.
    pub fn insert(&self, tag: &str, outcome: CachedOutcome) {
        self.write_entries().insert(tag.to_string(), outcome);
    }

    /// Returns the cached outcome for `tag`, computing and storing it on a miss.
    ///
    /// The lock is not held while `compute` runs, so concurrent misses on the
    /// same tag may each compute; the last insert wins.
    pub fn get_or_insert_with(
        &self,
        tag: &str,
        compute: impl FnOnce() -> CachedOutcome,
    ) -> CachedOutcome {
        if let Some(outcome) = self.get(tag) {
            tracing::trace!(valid = outcome.is_some(), "Schedule cache hit");
            return outcome;
        }

        let outcome = compute();
        self.computed.fetch_add(1, Ordering::Relaxed);
        self.insert(tag, outcome.clone());
        outcome
    }

    /// Number of outcomes computed through [`Self::get_or_insert_with`].
    #[must_use]
    pub fn parse_count(&self) -> usize {
        self.computed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Drops every entry and resets the parse counter.
    pub fn clear(&self) {
        self.write_entries().clear();
        self.computed.store(0, Ordering::Relaxed);
    }

    /// Locks the map for reading and recovers from poisoning.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, CachedOutcome>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.entries.clear_poison();
                poisoned.into_inner()
            }
        }
    }

    /// Locks the map for writing and recovers from poisoning.
    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, CachedOutcome>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.entries.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::timezone::TimezoneId;

    fn schedule() -> Arc<Schedule> {
        Arc::new(Schedule {
            off: None,
            on: None,
            tz: TimezoneId::new("America/New_York"),
        })
    }

    #[test]
    fn miss_computes_once() {
        let cache = ScheduleCache::new();

        let first = cache.get_or_insert_with("tz=et", || Some(schedule()));
        let second = cache.get_or_insert_with("tz=et", || panic!("should be cached"));

        assert_eq!(first, second);
        assert_eq!(cache.parse_count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_outcomes_are_cached() {
        let cache = ScheduleCache::new();

        assert_eq!(cache.get_or_insert_with("bad", || None), None);
        assert_eq!(cache.get("bad"), Some(None));
        assert_eq!(cache.get_or_insert_with("bad", || Some(schedule())), None);
        assert_eq!(cache.parse_count(), 1);
    }

    #[test]
    fn keys_are_verbatim() {
        let cache = ScheduleCache::new();

        cache.insert("tz=et", Some(schedule()));
        assert!(cache.get("tz=et ").is_none());
        assert!(cache.get("TZ=et").is_none());
    }

    #[test]
    fn clear_resets_entries_and_counter() {
        let cache = ScheduleCache::new();
        cache.get_or_insert_with("tz=et", || Some(schedule()));

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.parse_count(), 0);
    }
}
