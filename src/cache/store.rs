//! Product Cache Module
//!
//! Flat keyed cache mapping product ids to lookup outcomes, with hit/miss
//! statistics. No capacity limit and no expiration: entries live until a
//! mutation explicitly invalidates them.

use std::collections::HashMap;

use crate::cache::{CacheStats, CachedLookup};

// == Product Cache ==
/// In-memory cache of point-lookup outcomes, keyed by product id.
///
/// The reserved aggregate key (`AGGREGATE_KEY`) shares this map; mutations
/// evict it so any future aggregate caching can never serve stale results.
#[derive(Debug, Default)]
pub struct ProductCache {
    /// Key to lookup-outcome storage
    entries: HashMap<String, CachedLookup>,
    /// Performance statistics
    stats: CacheStats,
}

impl ProductCache {
    // == Constructor ==
    /// Creates a new empty ProductCache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Retrieves the cached outcome for a key, recording a hit or miss.
    ///
    /// `Some(CachedLookup::Absent)` is a hit: the store was already consulted
    /// and had nothing. `None` means the key has never been looked up (or was
    /// evicted) and the caller must go to the store.
    pub fn get(&mut self, key: &str) -> Option<CachedLookup> {
        match self.entries.get(key) {
            Some(lookup) => {
                self.stats.record_hit();
                Some(lookup.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves the cached outcome without touching statistics.
    pub fn peek(&self, key: &str) -> Option<&CachedLookup> {
        self.entries.get(key)
    }

    // == Put ==
    /// Stores a lookup outcome under a key, overwriting any previous entry.
    pub fn put(&mut self, key: String, lookup: CachedLookup) {
        self.entries.insert(key, lookup);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Evict ==
    /// Removes an entry by key.
    ///
    /// Returns true if an entry was present. Evicting a key with no entry is
    /// a no-op and does not count as an eviction.
    pub fn evict(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_eviction();
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Evict All ==
    /// Removes every entry from the cache.
    pub fn evict_all(&mut self) {
        let count = self.entries.len() as u64;
        self.entries.clear();
        self.stats.evictions += count;
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;

    fn chair_lookup() -> CachedLookup {
        CachedLookup::Found(NewProduct::new("Chair", 80.0, "Furniture").with_id("p1"))
    }

    #[test]
    fn test_cache_new() {
        let cache = ProductCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_put_and_get() {
        let mut cache = ProductCache::new();

        cache.put("p1".to_string(), chair_lookup());
        let lookup = cache.get("p1");

        assert_eq!(lookup, Some(chair_lookup()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_uncached_key() {
        let mut cache = ProductCache::new();

        assert_eq!(cache.get("nonexistent"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_cache_absent_marker_is_a_hit() {
        let mut cache = ProductCache::new();

        cache.put("missing".to_string(), CachedLookup::Absent);

        assert_eq!(cache.get("missing"), Some(CachedLookup::Absent));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_cache_evict() {
        let mut cache = ProductCache::new();

        cache.put("p1".to_string(), chair_lookup());
        assert!(cache.evict("p1"));

        assert!(cache.is_empty());
        assert_eq!(cache.get("p1"), None);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_cache_evict_missing_key_is_noop() {
        let mut cache = ProductCache::new();

        assert!(!cache.evict("nonexistent"));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = ProductCache::new();

        cache.put("p1".to_string(), chair_lookup());
        cache.put("p1".to_string(), CachedLookup::Absent);

        assert_eq!(cache.get("p1"), Some(CachedLookup::Absent));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_evict_all() {
        let mut cache = ProductCache::new();

        cache.put("p1".to_string(), chair_lookup());
        cache.put("p2".to_string(), CachedLookup::Absent);
        cache.evict_all();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn test_cache_peek_does_not_touch_stats() {
        let mut cache = ProductCache::new();
        cache.put("p1".to_string(), chair_lookup());

        assert!(cache.peek("p1").is_some());
        assert!(cache.peek("p2").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_cache_stats_counts() {
        let mut cache = ProductCache::new();

        cache.put("p1".to_string(), chair_lookup());
        cache.get("p1"); // hit
        cache.get("p2"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
