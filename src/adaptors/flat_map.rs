//! FlatMap adaptor: project each element to a subsequence and flatten.

/// A lazy adaptor projecting each element to a subsequence and draining each
/// inner sequence fully, in source order, before advancing to the next outer
/// element.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::flat_map;
///
/// let repeated: Vec<i32> = flat_map([1, 2, 3], |n| vec![n; n as usize]).collect();
/// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub struct FlatMap<I, F, J: IntoIterator> {
    outer: I,
    projection: F,
    inner: Option<J::IntoIter>,
}

/// Create a [`FlatMap`] over any source.
pub fn flat_map<I, F, J>(source: I, projection: F) -> FlatMap<I::IntoIter, F, J>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    FlatMap {
        outer: source.into_iter(),
        projection,
        inner: None,
    }
}

impl<I, F, J> Iterator for FlatMap<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
            }
            let outer = self.outer.next()?;
            self.inner = Some((self.projection)(outer).into_iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_map_drains_inner_in_source_order() {
        let result: Vec<i32> = flat_map([10, 20], |n| vec![n, n + 1, n + 2]).collect();
        assert_eq!(result, vec![10, 11, 12, 20, 21, 22]);
    }

    #[test]
    fn test_flat_map_skips_empty_inner_sequences() {
        let result: Vec<i32> = flat_map([0, 2, 0, 1], |n| vec![n; n as usize]).collect();
        assert_eq!(result, vec![2, 2, 1]);
    }

    #[test]
    fn test_flat_map_empty_outer() {
        let result: Vec<i32> = flat_map(Vec::<i32>::new(), |n| vec![n]).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_flat_map_all_inner_empty() {
        let result: Vec<i32> = flat_map([1, 2, 3], |_| Vec::<i32>::new()).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_flat_map_only_projects_consumed_outer_elements() {
        let mut calls = 0;
        let mut flattened = flat_map([1, 2, 3], |n| {
            calls += 1;
            vec![n, n]
        });
        assert_eq!(flattened.next(), Some(1));
        assert_eq!(flattened.next(), Some(1));
        drop(flattened);
        assert_eq!(calls, 1);
    }
}
