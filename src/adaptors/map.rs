//! Map adaptor: project each element through a function.

/// A lazy adaptor applying a projection to every element.
///
/// Preserves both the length and the order of the source.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::map;
///
/// let squares: Vec<i32> = map([1, 2, 3], |n| n * n).collect();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct Map<I, F> {
    iter: I,
    projection: F,
}

/// Create a [`Map`] over any source.
pub fn map<I, F, R>(source: I, projection: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    Map {
        iter: source.into_iter(),
        projection,
    }
}

impl<I, F, R> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.iter.next().map(&mut self.projection)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
