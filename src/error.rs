//! Error types for sequence operations.
//!
//! All failures in this crate are local and synchronous: they are reported to
//! the immediate caller and never retried or suppressed internally. Factory
//! errors from [`MemoMap::try_get_or_compute`](crate::MemoMap::try_get_or_compute)
//! keep their caller-supplied type and do not pass through this module.
//!
//! # Examples
//!
//! ```rust
//! use sequin::{SequenceError, SequenceExt};
//!
//! let err = std::iter::empty::<i32>().try_first().unwrap_err();
//! assert!(err.is_empty_sequence());
//!
//! let err = [1, 2].into_iter().try_single().unwrap_err();
//! assert!(err.is_multiple_elements());
//! ```

use std::fmt;

use thiserror::Error;

/// Result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors that can occur while evaluating a sequence pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A terminal operation required at least one element.
    #[error("{operation}: sequence contains no elements")]
    EmptySequence {
        /// The terminal operation that failed.
        operation: &'static str,
    },

    /// A terminal operation required exactly one element but found more.
    #[error("{operation}: sequence contains more than one element")]
    MultipleElements {
        /// The terminal operation that failed.
        operation: &'static str,
    },

    /// Two elements projected to the same key while building a unique map.
    #[error("duplicate key `{key}` while building map")]
    DuplicateKey {
        /// Debug rendering of the offending key.
        key: String,
    },
}

impl SequenceError {
    /// Create an empty-sequence error for the given operation.
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptySequence { operation }
    }

    /// Create a multiple-elements error for the given operation.
    pub fn multiple(operation: &'static str) -> Self {
        Self::MultipleElements { operation }
    }

    /// Create a duplicate-key error, capturing the key via its `Debug` form.
    pub fn duplicate_key(key: &impl fmt::Debug) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }

    /// Check if this is an empty-sequence error.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence { .. })
    }

    /// Check if this is a multiple-elements error.
    pub fn is_multiple_elements(&self) -> bool {
        matches!(self, Self::MultipleElements { .. })
    }

    /// Check if this is a duplicate-key error.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_display() {
        let err = SequenceError::empty("try_first");
        assert_eq!(err.to_string(), "try_first: sequence contains no elements");
        assert!(err.is_empty_sequence());
        assert!(!err.is_multiple_elements());
    }

    #[test]
    fn test_multiple_elements_display() {
        let err = SequenceError::multiple("try_single");
        assert_eq!(
            err.to_string(),
            "try_single: sequence contains more than one element"
        );
        assert!(err.is_multiple_elements());
    }

    #[test]
    fn test_duplicate_key_captures_debug_form() {
        let err = SequenceError::duplicate_key(&"x");
        assert_eq!(err.to_string(), "duplicate key `\"x\"` while building map");
        assert!(err.is_duplicate_key());

        let err = SequenceError::duplicate_key(&42);
        assert!(err.to_string().contains("42"));
    }
}
