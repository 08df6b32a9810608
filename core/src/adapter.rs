//! Bridges classic `Iterator`s into the cursor protocol.
//!
//! An iterator yields owned elements one at a time. [`IterCursor`] parks each one
//! in a slot it owns and returns a one-element view over the slot. The slot is
//! overwritten on the next call, which the borrow checker already forbids while
//! the previous view is in use.

use core::iter::Fuse;

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::view::View;

/// Cursor over any iterator, one element per view.
///
/// The wrapped iterator is fused: once it reports the end, it is never polled
/// again, so exhaustion is permanent even for iterators that would resume.
///
/// ```
/// use spanwalk_core::{Cursor, IteratorExt};
///
/// let mut cursor = [1, 2, 3].into_iter().into_cursor();
/// assert_eq!(cursor.next_view(5), [1]);
/// assert_eq!(cursor.next_view(5), [2]);
/// assert_eq!(cursor.next_view(5), [3]);
/// assert!(cursor.next_view(5).is_empty());
/// ```
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iter: Fuse<I>,
    slot: Option<I::Item>,
}

static_assertions::assert_not_impl_any!(IterCursor<core::ops::Range<u8>>: Clone, Copy);

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor {
            iter: iter.fuse(),
            slot: None,
        }
    }

    /// Gives back the underlying iterator, dropping any parked element.
    pub fn into_inner(self) -> Fuse<I> {
        self.iter
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Element = I::Item;

    fn next_view(&mut self, max_count: usize) -> View<'_, I::Item> {
        if max_count == 0 {
            return View::EMPTY;
        }
        match self.iter.next() {
            Some(element) => View::single(self.slot.insert(element)),
            None => {
                if self.slot.take().is_some() {
                    tracing::trace!("iterator cursor exhausted");
                }
                View::EMPTY
            }
        }
    }

    fn skip(&mut self, max_offset: usize) -> usize {
        self.slot = None;
        self.iter.by_ref().take(max_offset).count()
    }
}

/// Conversion from an iterator into an [`IterCursor`].
pub trait IteratorExt: Iterator + Sized {
    fn into_cursor(self) -> IterCursor<Self> {
        IterCursor::new(self)
    }
}

impl<I: Iterator> IteratorExt for I {}

/// A sequence backed by an iterator factory.
///
/// Each cursor gets a fresh iterator from the factory, so the sequence can be
/// traversed any number of times.
#[derive(Debug, Clone, Copy)]
pub struct IterSequence<F> {
    factory: F,
}

/// Creates a [`Sequence`] whose cursors adapt the iterators returned by `factory`.
///
/// ```
/// use spanwalk_core::{algo, from_iter_fn};
///
/// let squares = from_iter_fn(|| (1..=4).map(|n| n * n));
/// assert!(algo::elements_equal(&squares, &[1, 4, 9, 16]));
/// assert_eq!(algo::count(&squares), 4);
/// ```
pub fn from_iter_fn<F, I>(factory: F) -> IterSequence<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    IterSequence { factory }
}

impl<F, I> Sequence for IterSequence<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Element = I::Item;
    type Cursor<'s>
        = IterCursor<I>
    where
        Self: 's;

    fn cursor(&self) -> IterCursor<I> {
        IterCursor::new((self.factory)())
    }

    fn underestimated_count(&self) -> usize {
        (self.factory)().size_hint().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::UNBOUNDED;

    /// Yields `Some` on odd calls and `None` on even ones, forever.
    struct Flaky {
        calls: u32,
    }

    impl Iterator for Flaky {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.calls += 1;
            (self.calls % 2 == 1).then_some(self.calls)
        }
    }

    #[test]
    fn test_one_element_per_view() {
        let mut cursor = vec![1, 2, 3].into_iter().into_cursor();
        for expected in 1..=3 {
            let view = cursor.next_view(5);
            assert_eq!(view.len(), 1);
            assert_eq!(view[0], expected);
        }
        assert!(cursor.next_view(5).is_empty());
    }

    #[test]
    fn test_non_copy_elements() {
        let words = ["alpha", "beta"];
        let mut cursor = words.iter().map(|w| w.to_uppercase()).into_cursor();
        assert_eq!(cursor.next_view(UNBOUNDED)[0], "ALPHA");
        assert_eq!(cursor.next_view(UNBOUNDED)[0], "BETA");
        assert!(cursor.next_view(UNBOUNDED).is_empty());
    }

    #[test]
    fn test_exhaustion_is_permanent() {
        let mut cursor = Flaky { calls: 0 }.into_cursor();
        assert_eq!(cursor.next_view(1), [1]);
        assert!(cursor.next_view(1).is_empty());
        // The underlying iterator would yield again; the cursor must not.
        assert!(cursor.next_view(1).is_empty());
        assert_eq!(cursor.skip(3), 0);
    }

    #[test]
    fn test_zero_request_does_not_pull() {
        let mut cursor = (10..12).into_cursor();
        assert!(cursor.next_view(0).is_empty());
        assert_eq!(cursor.next_view(1), [10]);
    }

    #[test]
    fn test_skip() {
        let mut cursor = (0..5).into_cursor();
        assert_eq!(cursor.skip(2), 2);
        assert_eq!(cursor.next_view(10), [2]);
        assert_eq!(cursor.skip(10), 2);
        assert!(cursor.next_view(10).is_empty());
    }

    #[test]
    fn test_iter_sequence_is_repeatable() {
        let seq = from_iter_fn(|| "abc".chars());
        assert_eq!(seq.underestimated_count(), 1);
        for _ in 0..2 {
            let mut cursor = seq.cursor();
            assert_eq!(cursor.next_view(UNBOUNDED), ['a']);
            assert_eq!(cursor.skip(UNBOUNDED), 2);
        }
    }

    #[test]
    fn test_into_inner() {
        let mut cursor = (0..4).into_cursor();
        cursor.skip(1);
        let rest: Vec<_> = cursor.into_inner().collect();
        assert_eq!(rest, vec![1, 2, 3]);
    }
}
