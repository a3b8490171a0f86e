//! TTL cache for resolved show lists, one entry per normalized actor name.
//!
//! Stores typed `Arc<Vec<ShowRecord>>` — no JSON round-trip on reads. Entries
//! expire lazily at read time; nothing sweeps in the background. Capacity is
//! bounded so a scripted caller cycling through names cannot exhaust memory.

use crate::tvmaze::ShowRecord;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Hard cap on cached actors. Cardinality is expected to stay far below this
/// (a Sonarr instance tracks a handful of people), so the O(n) eviction scan
/// is a non-issue.
const MAX_ENTRIES: usize = 1000;

#[derive(Clone, Default)]
pub struct ShowCache {
    /// normalized actor name → (expires_at, value)
    entries: Arc<DashMap<String, (Instant, Arc<Vec<ShowRecord>>)>>,
}

impl ShowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached show list if an entry exists and has not expired.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<ShowRecord>>> {
        let entry = self.entries.get(key)?;
        let (expires_at, ref value) = *entry;
        if Instant::now() < expires_at {
            Some(value.clone())
        } else {
            None
        }
    }

    /// Insert or replace the entry for `key`, expiring `ttl` from now.
    ///
    /// Replacement is atomic per key — concurrent readers see either the old
    /// or the new `Arc`, never a mix.
    pub fn put(&self, key: String, value: Arc<Vec<ShowRecord>>, ttl: Duration) {
        if self.entries.len() >= MAX_ENTRIES && !self.entries.contains_key(&key) {
            self.evict_oldest();
        }
        self.entries.insert(key, (Instant::now() + ttl, value));
    }

    /// Number of live-or-stale entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the entry closest to expiry. With a uniform TTL this is also the
    /// oldest insertion.
    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().0)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
            debug!(actor = %key, "evicted oldest cache entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shows(ids: &[&str]) -> Arc<Vec<ShowRecord>> {
        Arc::new(
            ids.iter()
                .map(|id| ShowRecord {
                    tvdb_id: id.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn get_returns_fresh_entry() {
        let cache = ShowCache::new();
        cache.put(
            "bryan cranston".into(),
            shows(&["81189"]),
            Duration::from_secs(3600),
        );

        let hit = cache.get("bryan cranston").expect("entry should be live");
        assert_eq!(hit[0].tvdb_id, "81189");
    }

    #[test]
    fn get_misses_unknown_key() {
        let cache = ShowCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("nobody").is_none());
    }

    #[test]
    fn expired_entry_is_a_miss_but_stays_resident() {
        let cache = ShowCache::new();
        cache.put("key".into(), shows(&["1"]), Duration::from_millis(20));
        assert!(cache.get("key").is_some());

        std::thread::sleep(Duration::from_millis(40));
        assert!(cache.get("key").is_none());
        // Lazy expiry: the stale entry is only replaced by the next put.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_replaces_existing_entry() {
        let cache = ShowCache::new();
        cache.put("key".into(), shows(&["1"]), Duration::from_secs(60));
        cache.put("key".into(), shows(&["2", "3"]), Duration::from_secs(60));

        let hit = cache.get("key").unwrap();
        assert_eq!(hit.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn eviction_drops_oldest_at_capacity() {
        let cache = ShowCache::new();
        for i in 0..MAX_ENTRIES {
            // Staggered TTLs stand in for staggered insertion times.
            cache.put(
                format!("actor-{i}"),
                shows(&["1"]),
                Duration::from_secs(3600 + i as u64),
            );
        }
        assert_eq!(cache.len(), MAX_ENTRIES);

        cache.put("one-more".into(), shows(&["2"]), Duration::from_secs(7200));
        assert_eq!(cache.len(), MAX_ENTRIES);
        assert!(cache.get("actor-0").is_none());
        assert!(cache.get("one-more").is_some());
    }

    #[test]
    fn overwriting_at_capacity_does_not_evict() {
        let cache = ShowCache::new();
        for i in 0..MAX_ENTRIES {
            cache.put(format!("actor-{i}"), shows(&["1"]), Duration::from_secs(60));
        }
        cache.put("actor-5".into(), shows(&["9"]), Duration::from_secs(60));
        assert_eq!(cache.len(), MAX_ENTRIES);
    }
}
