//! # Sequin
//!
//! Lazy sequence operators, ordered grouping, and memoized computation for
//! Rust iterators.
//!
//! Sequin has three parts:
//!
//! - **Lazy operators** ([`adaptors`]) and the [`SequenceExt`] extension
//!   trait: composable pipeline stages (filter, map, flat-map, concat, skip,
//!   conditional skip/take, empty-fallback, stable ordering) plus eager
//!   terminal queries that report cardinality violations as explicit errors
//!   instead of panicking.
//! - **Ordered grouping** ([`lookup`]): [`Lookup`], a multimap whose keys
//!   iterate in first-occurrence order and whose groups keep element
//!   encounter order, plus duplicate-rejecting map construction.
//! - **Memoized computation** ([`memo`]): [`MemoMap`], a thread-safe
//!   get-or-compute cache where every factory runs at most once per key.
//!
//! # Quick Start
//!
//! ```rust
//! use sequin::SequenceExt;
//! use sequin::adaptors::{filter, map};
//!
//! // Pipelines stay lazy until a terminal query pulls them.
//! let evens = filter(1..=10, |n| n % 2 == 0);
//! let labels: Vec<String> = map(evens, |n| format!("#{n}")).collect();
//! assert_eq!(labels[0], "#2");
//!
//! // Terminal queries surface empty/multiple cardinality as errors.
//! let only = [42].into_iter().try_single()?;
//! assert_eq!(only, 42);
//! # Ok::<(), sequin::SequenceError>(())
//! ```
//!
//! Grouping preserves both key order and element order:
//!
//! ```rust
//! use sequin::SequenceExt;
//!
//! let words = ["apple", "bat", "avocado", "cat"];
//! let by_initial = words.into_iter().into_lookup(|w| w.as_bytes()[0]);
//!
//! assert_eq!(by_initial.get(&b'a'), ["apple", "avocado"]);
//! assert_eq!(by_initial.get(&b'z'), [] as [&str; 0]);
//! ```
//!
//! Memoization shares each computed value across callers:
//!
//! ```rust
//! use sequin::MemoMap;
//!
//! let cache: MemoMap<u32, u64> = MemoMap::new();
//! let squared = cache.get_or_compute(12, |n| u64::from(n * n));
//! assert_eq!(*squared, 144);
//! ```
//!
//! # Logging
//!
//! Sequin emits `tracing` events at trace level when building lookups and
//! serving memoized values. Enable the optional `tracing-subscriber` feature
//! and set `SEQUIN_DEBUG=true` to see them; see the [`logging`] module.

pub mod adaptors;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod memo;
pub mod sequence;

pub use error::{SequenceError, SequenceResult};
pub use lookup::{Group, Lookup};
pub use memo::{MemoMap, MemoStats};
pub use sequence::SequenceExt;
