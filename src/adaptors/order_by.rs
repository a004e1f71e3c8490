//! OrderBy adaptor: stable ascending sort by a selected key.

/// An eager-on-demand adaptor producing the source's elements sorted by the
/// ascending natural order of the selected key.
///
/// Unlike the other adaptors this one must materialize its entire source, so
/// it is not safe over unbounded sources. Materialization is deferred until
/// the first `next()` call; merely constructing the adaptor does no work.
/// The sort is stable: elements with equal keys keep their original relative
/// order.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::order_by;
///
/// let sorted: Vec<(i32, &str)> = order_by([(1, "a"), (1, "b"), (0, "c")], |pair| pair.0).collect();
/// assert_eq!(sorted, vec![(0, "c"), (1, "a"), (1, "b")]);
/// ```
pub struct OrderBy<I: Iterator, F> {
    source: Option<I>,
    key_fn: F,
    sorted: std::vec::IntoIter<I::Item>,
}

/// Create an [`OrderBy`] over any source.
pub fn order_by<I, F, K>(source: I, key_fn: F) -> OrderBy<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    OrderBy {
        source: Some(source.into_iter()),
        key_fn,
        sorted: Vec::new().into_iter(),
    }
}

impl<I, F, K> Iterator for OrderBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.take() {
            let mut items: Vec<_> = source.collect();
            // Vec::sort_by_key is a stable sort.
            items.sort_by_key(&mut self.key_fn);
            self.sorted = items.into_iter();
        }
        self.sorted.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}
