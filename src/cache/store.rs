//! Flag Store Module
//!
//! Bounded recency cache combining HashMap storage with LRU tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, FlagEntry, LruTracker};

// == Flag Store ==
/// Fixed capacity flag storage with least-recently-used eviction.
///
/// Not internally synchronized; share it behind a lock.
#[derive(Debug)]
pub struct FlagStore {
    /// Identifier to flag storage
    entries: HashMap<String, FlagEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl FlagStore {
    // == Constructor ==
    /// Creates a new FlagStore holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            lru: LruTracker::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Put ==
    /// Stores an entry under `key`, marking it most recently used.
    ///
    /// If `key` is new and the store is full, exactly one entry (the least
    /// recently used) is evicted first and its key returned.
    pub fn put(&mut self, key: String, entry: FlagEntry) -> Option<String> {
        let mut evicted = None;

        if !self.entries.contains_key(&key) {
            if self.entries.len() >= self.capacity {
                if let Some(oldest) = self.lru.evict_oldest() {
                    self.entries.remove(&oldest);
                    self.stats.record_eviction();
                    debug!(key = %oldest, "evicted least recently used flag");
                    evicted = Some(oldest);
                }
            }
            self.stats.record_insertion();
        }

        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Get ==
    /// Retrieves an entry by key, promoting it to most recently used.
    pub fn get(&mut self, key: &str) -> Option<FlagEntry> {
        match self.entries.get(key) {
            Some(entry) => {
                let entry = entry.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                Some(entry)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves an entry without touching recency or statistics.
    pub fn peek(&self, key: &str) -> Option<&FlagEntry> {
        self.entries.get(key)
    }

    // == Keys ==
    /// Returns all resident keys, least recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.lru.keys()
    }

    // == Recent ==
    /// Returns the `n` most recently used keys (clamped to the number of
    /// resident entries), ordered oldest first like [`FlagStore::keys`].
    pub fn recent(&self, n: usize) -> Vec<String> {
        self.lru.newest(n)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
