// src/cache.rs
// Whole-input memoization for keystroke-frequency callers.
//
// FIFO, not LRU: eviction follows insertion order only and reads never touch
// the queue. Keys are the raw, untrimmed input; two raw strings that trim to
// the same phrase are distinct entries on purpose.

use std::collections::{HashMap, VecDeque};

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Bounded input → output map with first-inserted-first-evicted behavior.
/// Entries are created, read, or evicted, never mutated.
#[derive(Debug)]
pub struct TranslationCache {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl TranslationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(1024)),
            order: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn lookup(&self, input: &str) -> Option<String> {
        self.entries.get(input).cloned()
    }

    /// Insert, evicting the single oldest entry first when full. Storing a
    /// key that is already present is a no-op; outputs are deterministic, so
    /// the existing entry is already correct.
    pub fn store(&mut self, input: &str, output: &str) {
        if self.capacity == 0 || self.entries.contains_key(input) {
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(input.to_string(), output.to_string());
        self.order.push_back(input.to_string());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_lookup() {
        let mut cache = TranslationCache::new(4);
        cache.store("다음 주", "next week");
        assert_eq!(cache.lookup("다음 주").as_deref(), Some("next week"));
        assert_eq!(cache.lookup("지난 주"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn raw_keys_are_not_normalized() {
        let mut cache = TranslationCache::new(4);
        cache.store("다음 주", "next week");
        // Same phrase, different raw whitespace: a distinct key.
        assert_eq!(cache.lookup(" 다음 주 "), None);
    }

    #[test]
    fn evicts_oldest_insertion_first() {
        let mut cache = TranslationCache::new(3);
        for (k, v) in [("a", "1"), ("b", "2"), ("c", "3")] {
            cache.store(k, v);
        }
        // A read of the oldest entry must not protect it: FIFO, not LRU.
        assert!(cache.lookup("a").is_some());

        cache.store("d", "4");
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.lookup("a"), None);
        assert!(cache.lookup("b").is_some());
        assert!(cache.lookup("d").is_some());

        cache.store("e", "5");
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.lookup("b"), None);
    }

    #[test]
    fn duplicate_store_is_noop() {
        let mut cache = TranslationCache::new(2);
        cache.store("a", "1");
        cache.store("a", "other");
        assert_eq!(cache.lookup("a").as_deref(), Some("1"));
        assert_eq!(cache.len(), 1);

        // The duplicate must not occupy a second queue slot.
        cache.store("b", "2");
        cache.store("c", "3");
        assert_eq!(cache.lookup("a"), None);
        assert!(cache.lookup("b").is_some());
    }

    #[test]
    fn zero_capacity_never_stores() {
        let mut cache = TranslationCache::new(0);
        cache.store("a", "1");
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.lookup("a"), None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = TranslationCache::new(2);
        cache.store("a", "1");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.lookup("a"), None);
        // Still usable after clear.
        cache.store("b", "2");
        assert_eq!(cache.len(), 1);
    }
}
