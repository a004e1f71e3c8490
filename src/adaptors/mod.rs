//! Lazy sequence adaptors.
//!
//! Each adaptor wraps an upstream iterator and advances it on demand: no work
//! happens until a consumer calls `next()`, and dropping an adaptor mid-iteration
//! drops the whole upstream chain. A pipeline is restarted by rebuilding it from
//! its source, so any `IntoIterator` source that can hand out fresh cursors
//! (a slice, a `Vec`, a range) supports repeated traversal.
//!
//! Every adaptor has a free constructor function here; the ones whose names do
//! not collide with `Iterator`'s inherent methods are also available as chaining
//! methods on [`SequenceExt`](crate::SequenceExt).
//!
//! # Example
//!
//! ```rust
//! use sequin::adaptors::{filter, map};
//!
//! let doubled_evens: Vec<i32> = map(filter(1..=6, |n| n % 2 == 0), |n| n * 2).collect();
//! assert_eq!(doubled_evens, vec![4, 8, 12]);
//! ```

mod concat;
mod default_if_empty;
mod filter;
mod flat_map;
mod map;
mod order_by;
mod skip;
mod take_while;

pub use concat::{Concat, concat};
pub use default_if_empty::{DefaultIfEmpty, default_if_empty};
pub use filter::{Filter, filter};
pub use flat_map::{FlatMap, flat_map};
pub use map::{Map, map};
pub use order_by::{OrderBy, order_by};
pub use skip::{Skip, SkipWhile, skip, skip_while};
pub use take_while::{TakeWhile, take_while};
