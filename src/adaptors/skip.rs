//! Skip adaptors: discard a prefix by count or by predicate.

/// A lazy adaptor discarding exactly `n` leading elements (fewer if the
/// source is shorter, in which case nothing is yielded).
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::skip;
///
/// let tail: Vec<i32> = skip([1, 2, 3, 4], 2).collect();
/// assert_eq!(tail, vec![3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    remaining: usize,
}

/// Create a [`Skip`] over any source.
pub fn skip<I>(source: I, n: usize) -> Skip<I::IntoIter>
where
    I: IntoIterator,
{
    Skip {
        iter: source.into_iter(),
        remaining: n,
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.remaining > 0 {
            self.iter.next()?;
            self.remaining -= 1;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|u| u.saturating_sub(self.remaining)),
        )
    }
}

/// A lazy adaptor discarding the contiguous prefix of elements matching a
/// predicate.
///
/// The gate is one-shot: once an element fails the predicate, that element
/// and every element after it are yielded regardless of what the predicate
/// would say about them.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::skip_while;
///
/// // 8 is retained even though it is even: the gate closed at 5.
/// let result: Vec<i32> = skip_while([2, 4, 5, 6, 8], |n| n % 2 == 0).collect();
/// assert_eq!(result, vec![5, 6, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: P,
    gate_closed: bool,
}

/// Create a [`SkipWhile`] over any source.
pub fn skip_while<I, P>(source: I, predicate: P) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    SkipWhile {
        iter: source.into_iter(),
        predicate,
        gate_closed: false,
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.gate_closed {
            return self.iter.next();
        }
        loop {
            let item = self.iter.next()?;
            if !(self.predicate)(&item) {
                self.gate_closed = true;
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The entire source may be skipped.
        (0, self.iter.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Skip =====

    #[test]
    fn test_skip_discards_exact_prefix() {
        let result: Vec<i32> = skip([1, 2, 3, 4, 5], 3).collect();
        assert_eq!(result, vec![4, 5]);
    }

    #[test]
    fn test_skip_zero_yields_everything() {
        let result: Vec<i32> = skip([1, 2], 0).collect();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_skip_past_end_yields_empty() {
        let result: Vec<i32> = skip([1, 2], 10).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_skip_only_discards_on_first_pull() {
        let mut tail = skip(1.., 5);
        assert_eq!(tail.next(), Some(6));
        assert_eq!(tail.next(), Some(7));
    }

    // ===== SkipWhile =====

    #[test]
    fn test_skip_while_gate_closes_once() {
        let result: Vec<i32> = skip_while([2, 4, 5, 6, 8], |n| n % 2 == 0).collect();
        assert_eq!(result, vec![5, 6, 8]);
    }

    #[test]
    fn test_skip_while_nothing_matches() {
        let result: Vec<i32> = skip_while([5, 2, 4], |n| n % 2 == 0).collect();
        assert_eq!(result, vec![5, 2, 4]);
    }

    #[test]
    fn test_skip_while_everything_matches() {
        let result: Vec<i32> = skip_while([2, 4, 6], |n| n % 2 == 0).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_skip_while_empty_source() {
        let result: Vec<i32> = skip_while(Vec::<i32>::new(), |_| true).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_skip_while_stops_invoking_predicate_after_gate_closes() {
        let mut calls = 0;
        let result: Vec<i32> = skip_while([2, 5, 6], |n| {
            calls += 1;
            n % 2 == 0
        })
        .collect();
        assert_eq!(result, vec![5, 6]);
        // Evaluated for 2 and 5, never for 6.
        assert_eq!(calls, 2);
    }
}
