//! Insertion-order-preserving grouping container.
//!
//! A [`Lookup`] is a stable multi-map built in a single pass over a source
//! sequence: each element is routed to the group of its computed key, keys
//! iterate in first-occurrence order, and each group iterates in the order
//! its elements were encountered. The ordering is explicit in the data
//! structure (an [`IndexMap`]), not an artifact of hash-map enumeration.
//!
//! Duplicate keys *merge* here. The error-on-duplicate behavior belongs to
//! [`to_unique_map`], which builds a plain key-to-value map and refuses key
//! collisions. The two behaviors are deliberately distinct.
//!
//! # Examples
//!
//! ```rust
//! use sequin::Lookup;
//!
//! let lookup = Lookup::from_iter_by(["apple", "avocado", "banana"], |s| s.as_bytes()[0]);
//!
//! assert_eq!(lookup.get(&b'a'), ["apple", "avocado"]);
//! assert_eq!(lookup.get(&b'b'), ["banana"]);
//! assert_eq!(lookup.get(&b'z'), [""; 0]); // unseen key: empty, never an error
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

use indexmap::IndexMap;
use indexmap::map::Entry;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::{SequenceError, SequenceResult};

/// An ordered group of elements sharing one key.
///
/// Append-only while its [`Lookup`] is under construction, immutable once the
/// lookup is returned to the caller. Dereferences to a slice, so all slice
/// methods apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<V> {
    items: SmallVec<[V; 4]>,
}

impl<V> Group<V> {
    fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    fn push(&mut self, item: V) {
        self.items.push(item);
    }

    /// Number of elements in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the group is empty. Groups inside a lookup never are; this
    /// exists for slice-API completeness.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// View the group as a slice, in insertion order.
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    /// Iterate the group's elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }
}

impl<V> Deref for Group<V> {
    type Target = [V];

    fn deref(&self) -> &[V] {
        &self.items
    }
}

impl<V> IntoIterator for Group<V> {
    type Item = V;
    type IntoIter = smallvec::IntoIter<[V; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Group<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A stable multi-map from key to [`Group`], preserving first-occurrence key
/// order.
///
/// Invariants:
/// - each key appears exactly once; an already-seen key appends to its
///   existing group instead of creating a new entry;
/// - key iteration order equals first-occurrence order and is never
///   re-ordered by later insertions;
/// - groups are immutable once the lookup is returned.
///
/// Construction is a single O(N) pass with amortized O(1) key lookup.
#[derive(Debug, Clone)]
pub struct Lookup<K, V> {
    groups: IndexMap<K, Group<V>>,
}

impl<K: Hash + Eq, V> Lookup<K, V> {
    /// Build a lookup from a source sequence, grouping elements by `key_fn`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sequin::Lookup;
    ///
    /// let lookup = Lookup::from_iter_by([("a", 1), ("b", 2), ("a", 3)], |pair| pair.0);
    /// assert_eq!(lookup.keys().collect::<Vec<_>>(), [&"a", &"b"]);
    /// assert_eq!(lookup.get("a"), [("a", 1), ("a", 3)]);
    /// ```
    pub fn from_iter_by<I, F>(source: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> K,
    {
        Self::from_iter_with(source, key_fn, |item| item)
    }

    /// Build a lookup, projecting each element through `elem_fn` before it
    /// is appended to its group.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sequin::Lookup;
    ///
    /// let lookup = Lookup::from_iter_with([("a", 1), ("a", 3)], |pair| pair.0, |pair| pair.1);
    /// assert_eq!(lookup.get("a"), [1, 3]);
    /// ```
    pub fn from_iter_with<I, FK, FV>(source: I, mut key_fn: FK, mut elem_fn: FV) -> Self
    where
        I: IntoIterator,
        FK: FnMut(&I::Item) -> K,
        FV: FnMut(I::Item) -> V,
    {
        let mut groups: IndexMap<K, Group<V>> = IndexMap::new();
        for item in source {
            let key = key_fn(&item);
            groups.entry(key).or_insert_with(Group::new).push(elem_fn(item));
        }
        trace!(keys = groups.len(), "lookup built");
        Self { groups }
    }

    /// Get the group for `key` as a slice, or an empty slice if the key was
    /// never seen. Never an error.
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.get(key).map(Group::as_slice).unwrap_or(&[])
    }

    /// Check whether `key` was seen during construction.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the lookup holds no keys.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate the keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Iterate `(key, group)` pairs in first-occurrence key order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, Group<V>> {
        self.groups.iter()
    }

    /// Consume the lookup, projecting each `(key, group)` pair through `f`.
    ///
    /// The grouping pass already happened eagerly at construction; this
    /// projection is lazy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sequin::Lookup;
    ///
    /// let lookup = Lookup::from_iter_with([("a", 1), ("b", 2), ("a", 3)], |p| p.0, |p| p.1);
    /// let totals: Vec<(&str, i32)> = lookup
    ///     .map_groups(|key, group| (*key, group.iter().sum()))
    ///     .collect();
    /// assert_eq!(totals, vec![("a", 4), ("b", 2)]);
    /// ```
    pub fn map_groups<R, F>(self, mut f: F) -> impl Iterator<Item = R>
    where
        F: FnMut(&K, &Group<V>) -> R,
    {
        self.groups.into_iter().map(move |(key, group)| f(&key, &group))
    }
}

impl<K, V> Default for Lookup<K, V> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<K, V> IntoIterator for Lookup<K, V> {
    type Item = (K, Group<V>);
    type IntoIter = indexmap::map::IntoIter<K, Group<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Lookup<K, V> {
    type Item = (&'a K, &'a Group<V>);
    type IntoIter = indexmap::map::Iter<'a, K, Group<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Build a key-to-element map from a source sequence, failing with
/// [`SequenceError::DuplicateKey`] if two elements project to the same key.
///
/// Unlike [`Lookup`] construction, key collisions are an error here, not a
/// merge; nothing is silently overwritten. Keys keep first-occurrence order.
///
/// # Example
///
/// ```rust
/// use sequin::lookup::to_unique_map;
///
/// let map = to_unique_map([("x", 1), ("y", 2)], |pair| pair.0)?;
/// assert_eq!(map[&"x"], ("x", 1));
///
/// let err = to_unique_map([("x", 1), ("x", 2)], |pair| pair.0).unwrap_err();
/// assert!(err.is_duplicate_key());
/// # Ok::<(), sequin::SequenceError>(())
/// ```
pub fn to_unique_map<I, K, F>(source: I, key_fn: F) -> SequenceResult<IndexMap<K, I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq + fmt::Debug,
    F: FnMut(&I::Item) -> K,
{
    to_unique_map_with(source, key_fn, |item| item)
}

/// Build a key-to-value map with a projected value per element, failing with
/// [`SequenceError::DuplicateKey`] on a key collision.
pub fn to_unique_map_with<I, K, V, FK, FV>(
    source: I,
    mut key_fn: FK,
    mut elem_fn: FV,
) -> SequenceResult<IndexMap<K, V>>
where
    I: IntoIterator,
    K: Hash + Eq + fmt::Debug,
    FK: FnMut(&I::Item) -> K,
    FV: FnMut(I::Item) -> V,
{
    let mut map = IndexMap::new();
    for item in source {
        let key = key_fn(&item);
        match map.entry(key) {
            Entry::Occupied(entry) => return Err(SequenceError::duplicate_key(entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(elem_fn(item));
            }
        }
    }
    Ok(map)
}
