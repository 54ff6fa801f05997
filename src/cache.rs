//! # Bounded memoization cache
//!
//! Processed record sets are memoized keyed by their resolved file path, so an
//! identical request skips re-reading and re-deriving. The cache is a small,
//! explicit LRU: fixed capacity, least-recently-used entry evicted when a new
//! key arrives at capacity. Keeping the policy in one visible structure makes
//! eviction testable, unlike a memoization decorator.

use ahash::AHashMap;
use camino::Utf8PathBuf;

use crate::record_set::RecordSet;

/// A fixed-capacity, least-recently-used cache of processed record sets.
#[derive(Debug)]
pub struct BoundedCache {
    capacity: usize,
    tick: u64,
    entries: AHashMap<Utf8PathBuf, (u64, RecordSet)>,
}

impl BoundedCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        BoundedCache {
            capacity,
            tick: 0,
            entries: AHashMap::with_capacity(capacity),
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a record set, marking the entry as most recently used.
    pub fn get(&mut self, key: &Utf8PathBuf) -> Option<&RecordSet> {
        self.tick += 1;
        let tick = self.tick;
        self.entries.get_mut(key).map(|(used, record_set)| {
            *used = tick;
            &*record_set
        })
    }

    /// Insert a record set, evicting the least-recently-used entry at capacity.
    pub fn insert(&mut self, key: Utf8PathBuf, record_set: RecordSet) {
        self.tick += 1;
        if !self.entries.contains_key(&key) && self.entries.len() == self.capacity {
            // Linear scan is fine at this capacity
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, (used, _))| *used)
                .map(|(k, _)| k.clone())
            {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, (self.tick, record_set));
    }
}
