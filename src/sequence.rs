//! The [`SequenceExt`] extension trait: chaining sugar for the lazy adaptors
//! plus the eager terminal queries.
//!
//! The trait is implemented for every `Iterator`, so pipelines read as method
//! chains. Lazy operators whose names would collide with `Iterator`'s inherent
//! methods (`filter`, `map`, `flat_map`, `skip`, `skip_while`, `take_while`)
//! live only as free constructors in [`adaptors`](crate::adaptors); the rest
//! are exposed here as methods.
//!
//! # Examples
//!
//! ```rust
//! use sequin::SequenceExt;
//!
//! // Terminal queries return explicit results instead of panicking.
//! let first = [10, 20, 30].into_iter().try_first()?;
//! assert_eq!(first, 10);
//!
//! let sum = [1, 2, 3, 4].into_iter().fold_with(0, |acc, n| acc + n);
//! assert_eq!(sum, 10);
//! # Ok::<(), sequin::SequenceError>(())
//! ```
//!
//! ```rust
//! use sequin::SequenceExt;
//!
//! // Lazy sugar composes with std adaptors.
//! let padded: Vec<i32> = (0..0).default_if_empty(-1).collect();
//! assert_eq!(padded, vec![-1]);
//!
//! let joined: Vec<i32> = [1, 2].into_iter().concat_with([3, 4]).collect();
//! assert_eq!(joined, vec![1, 2, 3, 4]);
//! ```

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::adaptors::{Concat, DefaultIfEmpty, OrderBy, concat, default_if_empty, order_by};
use crate::error::{SequenceError, SequenceResult};
use crate::lookup::{self, Lookup};

/// Extension methods for any iterator: lazy pipeline sugar and eager
/// terminal queries with explicit error reporting.
///
/// Counting is deliberately not duplicated here: [`Iterator::count`] already
/// has the exact eager-full-traversal semantics a pipeline terminal needs.
pub trait SequenceExt: Iterator + Sized {
    // ===== Lazy operators =====

    /// Yield all of `self` in order, then all of `other` in order.
    ///
    /// Neither input is consumed eagerly.
    fn concat_with<J>(self, other: J) -> Concat<Self, J::IntoIter>
    where
        J: IntoIterator<Item = Self::Item>,
    {
        concat(self, other)
    }

    /// Yield the sequence unchanged, or a single fallback element if it is
    /// empty.
    fn default_if_empty(self, default: Self::Item) -> DefaultIfEmpty<Self> {
        default_if_empty(self, default)
    }

    /// Sort by the ascending natural order of the selected key.
    ///
    /// Eager: materializes the full source on the first pull. The sort is
    /// stable.
    fn order_by_key<K, F>(self, key_fn: F) -> OrderBy<Self, F>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        order_by(self, key_fn)
    }

    // ===== Eager terminal queries =====

    /// Check whether the sequence produces at least one element.
    ///
    /// Short-circuits after pulling a single element.
    fn has_elements(mut self) -> bool {
        self.next().is_some()
    }

    /// Check whether any element matches the predicate.
    ///
    /// Short-circuits on the first match.
    fn matches_any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.any(|item| predicate(&item))
    }

    /// Check whether the sequence produces an element equal to `value`.
    ///
    /// Short-circuits on the first match.
    fn contains_element(mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.any(|item| item == *value)
    }

    /// Return the first element, or [`SequenceError::EmptySequence`] if the
    /// sequence is empty.
    fn try_first(mut self) -> SequenceResult<Self::Item> {
        self.next().ok_or_else(|| SequenceError::empty("try_first"))
    }

    /// Return the first element, or `default` if the sequence is empty.
    fn first_or(mut self, default: Self::Item) -> Self::Item {
        self.next().unwrap_or(default)
    }

    /// Return the only element.
    ///
    /// Fails with [`SequenceError::EmptySequence`] on an empty sequence and
    /// [`SequenceError::MultipleElements`] if a second element is produced.
    fn try_single(mut self) -> SequenceResult<Self::Item> {
        let first = self
            .next()
            .ok_or_else(|| SequenceError::empty("try_single"))?;
        if self.next().is_some() {
            return Err(SequenceError::multiple("try_single"));
        }
        Ok(first)
    }

    /// Return the only element, or `default` if the sequence is empty.
    ///
    /// Still fails with [`SequenceError::MultipleElements`] if a second
    /// element is produced.
    fn single_or(mut self, default: Self::Item) -> SequenceResult<Self::Item> {
        match self.next() {
            None => Ok(default),
            Some(first) => {
                if self.next().is_some() {
                    Err(SequenceError::multiple("single_or"))
                } else {
                    Ok(first)
                }
            }
        }
    }

    /// Left-fold the sequence starting from an explicit seed.
    ///
    /// Present for pipeline symmetry with [`fold_first`](Self::fold_first);
    /// equivalent to `Iterator::fold`.
    fn fold_with<A, F>(self, seed: A, combine: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.fold(seed, combine)
    }

    /// Left-fold the sequence using its first element as the seed.
    ///
    /// Fails with [`SequenceError::EmptySequence`] on an empty sequence.
    fn fold_first<F>(mut self, combine: F) -> SequenceResult<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let seed = self
            .next()
            .ok_or_else(|| SequenceError::empty("fold_first"))?;
        Ok(self.fold(seed, combine))
    }

    // ===== Grouping terminals =====

    /// Group the sequence into a [`Lookup`] keyed by `key_fn`.
    ///
    /// Eager: performs a single pass over the source. Elements sharing a key
    /// are merged into one group in encounter order; key iteration order is
    /// first-occurrence order.
    fn into_lookup<K, F>(self, key_fn: F) -> Lookup<K, Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        Lookup::from_iter_by(self, key_fn)
    }

    /// Group the sequence into a [`Lookup`], projecting each element through
    /// `elem_fn` before it is appended to its group.
    fn into_lookup_with<K, V, FK, FV>(self, key_fn: FK, elem_fn: FV) -> Lookup<K, V>
    where
        K: Hash + Eq,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        Lookup::from_iter_with(self, key_fn, elem_fn)
    }

    /// Build a key-to-element map, failing with
    /// [`SequenceError::DuplicateKey`] if two elements project to the same
    /// key. Keys keep first-occurrence order.
    fn into_unique_map<K, F>(self, key_fn: F) -> SequenceResult<IndexMap<K, Self::Item>>
    where
        K: Hash + Eq + fmt::Debug,
        F: FnMut(&Self::Item) -> K,
    {
        lookup::to_unique_map(self, key_fn)
    }

    /// Build a key-to-value map with a projected value per element, failing
    /// with [`SequenceError::DuplicateKey`] on a key collision.
    fn into_unique_map_with<K, V, FK, FV>(
        self,
        key_fn: FK,
        elem_fn: FV,
    ) -> SequenceResult<IndexMap<K, V>>
    where
        K: Hash + Eq + fmt::Debug,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        lookup::to_unique_map_with(self, key_fn, elem_fn)
    }
}

impl<I: Iterator> SequenceExt for I {}
