//! Memoizing concurrent map: thread-safe get-or-compute caching.
//!
//! [`MemoMap`] guarantees that each key's value is computed at most once per
//! successful call, no matter how many threads race on the same absent key.
//! The whole check-and-insert sequence runs under a single coarse mutex, so
//! concurrent calls for *different* keys are also serialized. That is an
//! intentional simplicity-over-throughput trade-off: correctness is total
//! ordering of all get-or-compute operations, not parallel factory execution.
//! Do not switch to per-key striping without re-specifying those guarantees.
//!
//! Values are stored as `Arc<V>`, so every caller shares one immutable
//! computation result for the life of the map.
//!
//! # Deadlock
//!
//! The lock is held across the factory invocation. A factory that calls back
//! into the *same* map will deadlock; calling into a *different* map is safe.
//!
//! # Example
//!
//! ```rust
//! use sequin::MemoMap;
//!
//! let cache: MemoMap<String, usize> = MemoMap::new();
//!
//! let len = cache.get_or_compute("hello".to_string(), |key| key.len());
//! assert_eq!(*len, 5);
//!
//! // Second call returns the cached value without invoking the factory.
//! let len = cache.get_or_compute("hello".to_string(), |_| unreachable!());
//! assert_eq!(*len, 5);
//!
//! let stats = cache.stats();
//! assert_eq!((stats.hits, stats.misses), (1, 1));
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// Statistics for a [`MemoMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    /// Number of get-or-compute calls answered from the cache.
    pub hits: u64,
    /// Number of get-or-compute calls that invoked the factory.
    pub misses: u64,
    /// Number of entries currently cached.
    pub entries: usize,
}

impl MemoStats {
    /// Fraction of get-or-compute calls answered from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct MemoInner<K, V> {
    entries: HashMap<K, Arc<V>>,
    hits: u64,
    misses: u64,
}

/// A thread-safe get-or-compute cache with coarse-grained mutual exclusion.
///
/// See the [module docs](self) for the concurrency contract.
#[derive(Debug)]
pub struct MemoMap<K, V> {
    inner: Mutex<MemoInner<K, V>>,
}

impl<K: Hash + Eq, V> MemoMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty map with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(MemoInner {
                entries: HashMap::with_capacity(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Return the cached value for `key`, or invoke `factory`, store its
    /// result, and return it.
    ///
    /// The factory runs at most once per key across all threads; every
    /// caller observes the same `Arc`.
    pub fn get_or_compute<F>(&self, key: K, factory: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        let mut inner = self.inner.lock();
        if let Some(value) = inner.entries.get(&key) {
            let value = Arc::clone(value);
            inner.hits += 1;
            trace!(hits = inner.hits, "memo hit");
            return value;
        }
        inner.misses += 1;
        trace!(misses = inner.misses, "memo miss, invoking factory");
        let value = Arc::new(factory(&key));
        inner.entries.insert(key, Arc::clone(&value));
        value
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// If the factory fails, no entry is stored and the error propagates
    /// unmodified to this caller; a later call for the same key re-invokes
    /// the factory. Exactly-once therefore means at most one *successful*
    /// computation per key, not at most one attempt.
    pub fn try_get_or_compute<F, E>(&self, key: K, factory: F) -> Result<Arc<V>, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        let mut inner = self.inner.lock();
        if let Some(value) = inner.entries.get(&key) {
            let value = Arc::clone(value);
            inner.hits += 1;
            return Ok(value);
        }
        inner.misses += 1;
        let value = Arc::new(factory(&key)?);
        inner.entries.insert(key, Arc::clone(&value));
        Ok(value)
    }

    /// Return the cached value for `key` without computing anything.
    ///
    /// A peek: does not count toward hit/miss statistics.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.inner.lock().entries.get(key).map(Arc::clone)
    }

    /// Check whether `key` has a cached value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().entries.contains_key(key)
    }

    /// Remove the entry for `key`, returning whether it existed.
    pub fn remove(&self, key: &K) -> bool {
        self.inner.lock().entries.remove(key).is_some()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Check if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Drop all entries. Statistics are kept.
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    /// Snapshot the hit/miss statistics.
    pub fn stats(&self) -> MemoStats {
        let inner = self.inner.lock();
        MemoStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}

impl<K: Hash + Eq, V> Default for MemoMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
