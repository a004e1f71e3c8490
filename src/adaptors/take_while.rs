//! TakeWhile adaptor: yield a contiguous matching prefix.

/// A lazy adaptor yielding the contiguous prefix of elements matching a
/// predicate.
///
/// Production stops permanently at the first element failing the predicate,
/// even if later elements would satisfy it; the failing element itself is
/// consumed from the upstream but never yielded.
///
/// # Example
///
/// ```rust
/// use sequin::adaptors::take_while;
///
/// // Stops at 5; the even 6 after it is never produced.
/// let prefix: Vec<i32> = take_while([2, 4, 5, 6], |n| n % 2 == 0).collect();
/// assert_eq!(prefix, vec![2, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    exhausted: bool,
}

/// Create a [`TakeWhile`] over any source.
pub fn take_while<I, P>(source: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        iter: source.into_iter(),
        predicate,
        exhausted: false,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.iter.next()?;
        if (self.predicate)(&item) {
            Some(item)
        } else {
            self.exhausted = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}
