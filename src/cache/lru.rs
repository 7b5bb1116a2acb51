//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;

/// Null link in the intrusive list.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    key: String,
    prev: usize,
    next: usize,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in an arena-backed doubly linked list where:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// An index map from key to arena slot keeps `touch`, `remove` and
/// `evict_oldest` O(1). Freed slots are recycled through a free list.
#[derive(Debug)]
pub struct LruTracker {
    /// Key to arena slot
    index: HashMap<String, usize>,
    /// Node storage; `None` marks a free slot
    arena: Vec<Option<Node>>,
    /// Free slots available for reuse
    free: Vec<usize>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
}

impl Default for LruTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            arena: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to head).
    ///
    /// If the key is new it is linked in at the head.
    pub fn touch(&mut self, key: &str) {
        if let Some(&slot) = self.index.get(key) {
            if slot != self.head {
                self.unlink(slot);
                self.push_head(slot);
            }
            return;
        }

        let node = Node {
            key: key.to_string(),
            prev: NIL,
            next: NIL,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.arena[slot] = Some(node);
                slot
            }
            None => {
                self.arena.push(Some(node));
                self.arena.len() - 1
            }
        };
        self.index.insert(key.to_string(), slot);
        self.push_head(slot);
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(slot) = self.index.remove(key) {
            self.unlink(slot);
            self.release(slot);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        if self.tail == NIL {
            return None;
        }
        let slot = self.tail;
        self.unlink(slot);
        let node = self.release(slot)?;
        self.index.remove(&node.key);
        Some(node.key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.node(self.tail).map(|n| n.key.as_str())
    }

    // == Keys ==
    /// Returns every tracked key, least recently used first.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.tail;
        while let Some(node) = self.node(cursor) {
            keys.push(node.key.clone());
            cursor = node.prev;
        }
        keys
    }

    /// Returns the `n` most recently used keys, oldest of them first.
    pub fn newest(&self, n: usize) -> Vec<String> {
        let n = n.min(self.index.len());
        let mut keys = Vec::with_capacity(n);
        let mut cursor = self.head;
        while keys.len() < n {
            match self.node(cursor) {
                Some(node) => {
                    keys.push(node.key.clone());
                    cursor = node.next;
                }
                None => break,
            }
        }
        keys.reverse();
        keys
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Internal Linking ==
    fn node(&self, slot: usize) -> Option<&Node> {
        self.arena.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node> {
        self.arena.get_mut(slot).and_then(Option::as_mut)
    }

    fn push_head(&mut self, slot: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(slot) {
            node.prev = NIL;
            node.next = old_head;
        }
        match self.node_mut(old_head) {
            Some(head) => head.prev = slot,
            None => self.tail = slot,
        }
        self.head = slot;
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = match self.node(slot) {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        match self.node_mut(prev) {
            Some(p) => p.next = next,
            None => self.head = next,
        }
        match self.node_mut(next) {
            Some(n) => n.prev = prev,
            None => self.tail = prev,
        }
        if let Some(node) = self.node_mut(slot) {
            node.prev = NIL;
            node.next = NIL;
        }
    }

    fn release(&mut self, slot: usize) -> Option<Node> {
        let node = self.arena.get_mut(slot)?.take();
        if node.is_some() {
            self.free.push(slot);
        }
        node
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert!(lru.keys().is_empty());
    }

    #[test]
    fn test_lru_touch_new_key() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("key1"));
        assert_eq!(lru.keys(), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");
        lru.touch("key1");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("key2"));
        assert_eq!(lru.keys(), vec!["key2", "key3", "key1"]);
    }

    #[test]
    fn test_lru_touch_head_is_noop() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("b");

        assert_eq!(lru.keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");

        assert_eq!(lru.evict_oldest(), Some("key1".to_string()));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.evict_oldest(), Some("key2".to_string()));
        assert_eq!(lru.evict_oldest(), Some("key3".to_string()));
        assert_eq!(lru.evict_oldest(), None);
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");

        lru.remove("key2");

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains("key2"));
        assert_eq!(lru.keys(), vec!["key1", "key3"]);
    }

    #[test]
    fn test_lru_remove_nonexistent_key() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.remove("nonexistent");

        assert_eq!(lru.len(), 1);
        assert!(lru.contains("key1"));
    }

    #[test]
    fn test_lru_remove_only_key() {
        let mut lru = LruTracker::new();

        lru.touch("solo");
        lru.remove("solo");

        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);
        lru.touch("next");
        assert_eq!(lru.keys(), vec!["next"]);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("a");
        lru.touch("c");
        lru.touch("b");

        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
    }

    #[test]
    fn test_lru_slots_are_recycled() {
        let mut lru = LruTracker::new();

        for i in 0..4 {
            lru.touch(&format!("k{}", i));
        }
        lru.evict_oldest();
        lru.evict_oldest();
        lru.touch("k4");
        lru.touch("k5");

        assert_eq!(lru.arena.len(), 4);
        assert_eq!(lru.keys(), vec!["k2", "k3", "k4", "k5"]);
    }

    #[test]
    fn test_lru_newest() {
        let mut lru = LruTracker::new();

        for key in ["a", "b", "c", "d", "e"] {
            lru.touch(key);
        }

        assert_eq!(lru.newest(2), vec!["d", "e"]);
        assert_eq!(lru.newest(0), Vec::<String>::new());
        assert_eq!(lru.newest(50), lru.keys());
    }
}
