//! Filter adaptor: keep only elements matching a predicate.

/// A lazy adaptor yielding only the elements for which the predicate holds.
///
/// The predicate is re-evaluated on every traversal, so rebuilding the
/// pipeline from its source re-filters from scratch. Safe over unbounded
/// sources: each `next()` pulls upstream only until one match is found.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::filter;
///
/// let evens: Vec<i32> = filter([1, 2, 3, 4, 5, 6], |n| n % 2 == 0).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

/// Create a [`Filter`] over any source.
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        iter: source.into_iter(),
        predicate,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The predicate may reject everything.
        (0, self.iter.size_hint().1)
    }
}
