//! DefaultIfEmpty adaptor: substitute a fallback element for an empty source.

/// A lazy adaptor yielding the source unchanged if it produces at least one
/// element, or a single fallback element if the source turns out to be empty.
///
/// Emptiness can only be detected by pulling the first element, so the first
/// `next()` call always advances the upstream once.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::default_if_empty;
///
/// let result: Vec<i32> = default_if_empty(Vec::new(), 0).collect();
/// assert_eq!(result, vec![0]);
///
/// let result: Vec<i32> = default_if_empty([1, 2], 0).collect();
/// assert_eq!(result, vec![1, 2]);
/// ```
pub struct DefaultIfEmpty<I: Iterator> {
    iter: I,
    default: Option<I::Item>,
    produced_any: bool,
}

/// Create a [`DefaultIfEmpty`] over any source.
pub fn default_if_empty<I>(source: I, default: I::Item) -> DefaultIfEmpty<I::IntoIter>
where
    I: IntoIterator,
{
    DefaultIfEmpty {
        iter: source.into_iter(),
        default: Some(default),
        produced_any: false,
    }
}

impl<I: Iterator> Iterator for DefaultIfEmpty<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(item) = self.iter.next() {
            self.produced_any = true;
            return Some(item);
        }
        if self.produced_any {
            None
        } else {
            self.produced_any = true;
            self.default.take()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.produced_any {
            (lower, upper)
        } else {
            // At least the fallback element will be produced.
            (lower.max(1), upper.map(|u| u.max(1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_if_empty_on_empty_source() {
        let result: Vec<i32> = default_if_empty(Vec::new(), 42).collect();
        assert_eq!(result, vec![42]);
    }

    #[test]
    fn test_default_if_empty_on_non_empty_source() {
        let result: Vec<i32> = default_if_empty([1, 2, 3], 42).collect();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_yielded_exactly_once() {
        let mut seq = default_if_empty(Vec::<i32>::new(), 7);
        assert_eq!(seq.next(), Some(7));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_default_if_empty_single_element_source() {
        let result: Vec<i32> = default_if_empty([9], 42).collect();
        assert_eq!(result, vec![9]);
    }

    #[test]
    fn test_size_hint_lower_bound_is_at_least_one() {
        let seq = default_if_empty(Vec::<i32>::new(), 0);
        assert_eq!(seq.size_hint().0, 1);
    }
}
