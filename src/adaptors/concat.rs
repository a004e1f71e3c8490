//! Concat adaptor: one sequence followed by another.

/// A lazy adaptor yielding all of the first sequence in order, then all of
/// the second. Neither input is consumed eagerly.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::concat;
///
/// let joined: Vec<i32> = concat([1, 2], [3, 4]).collect();
/// assert_eq!(joined, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

/// Create a [`Concat`] over two sources with the same element type.
pub fn concat<A, B>(first: A, second: B) -> Concat<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Concat {
        first: first.into_iter(),
        second: second.into_iter(),
        first_done: false,
    }
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if !self.first_done {
            if let Some(item) = self.first.next() {
                return Some(item);
            }
            self.first_done = true;
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = if self.first_done {
            (0, Some(0))
        } else {
            self.first.size_hint()
        };
        let (second_lower, second_upper) = self.second.size_hint();
        // The combined hint may not fit in usize.
        let upper = first_upper
            .zip(second_upper)
            .and_then(|(a, b)| a.checked_add(b));
        (first_lower.saturating_add(second_lower), upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_yields_first_then_second() {
        let result: Vec<&str> = concat(["a", "b"], ["c"]).collect();
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_concat_length_is_sum_of_inputs() {
        assert_eq!(concat(0..3, 0..5).count(), 8);
    }

    #[test]
    fn test_concat_empty_first() {
        let result: Vec<i32> = concat(Vec::new(), [1, 2]).collect();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_concat_empty_second() {
        let result: Vec<i32> = concat([1, 2], Vec::new()).collect();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_concat_both_empty() {
        let result: Vec<i32> = concat(Vec::new(), Vec::new()).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_concat_second_input_stays_untouched_while_first_yields() {
        let mut joined = concat([1, 2], std::iter::once_with(|| panic!("pulled too early")));
        assert_eq!(joined.next(), Some(1));
        assert_eq!(joined.next(), Some(2));
        drop(joined);
    }

    #[test]
    fn test_concat_size_hint() {
        let joined = concat([1, 2], [3, 4, 5]);
        assert_eq!(joined.size_hint(), (5, Some(5)));
    }

    #[test]
    fn test_concat_size_hint_upper_bound_does_not_overflow() {
        // An upstream claiming usize::MAX elements must not wrap the sum.
        struct Huge;
        impl Iterator for Huge {
            type Item = i32;

            fn next(&mut self) -> Option<i32> {
                Some(0)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (0, Some(usize::MAX))
            }
        }

        let joined = concat(Huge, [1, 2, 3]);
        assert_eq!(joined.size_hint(), (3, None));
    }
}
