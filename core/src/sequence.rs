//! The sequence capability: things that can produce cursors.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::contiguous::ContiguousCursor;
use crate::cursor::Cursor;
use crate::segmented::SegmentedCursor;

/// A sequence that can be traversed by borrow-scoped cursors.
///
/// `cursor` takes `&self`, so any number of cursors may walk the same sequence at
/// once, and none of them can outlive it. The sequence cannot be mutated while a
/// cursor over it is alive.
///
/// The cursor type is a concrete associated type rather than a boxed trait object,
/// which keeps run-splitting logic visible to the optimizer.
///
/// # Traversal pattern
///
/// Consumers walk a sequence in two levels: views, then elements within a view.
///
/// ```
/// use spanwalk_core::{Cursor, Sequence, UNBOUNDED};
///
/// let names = vec![String::from("ada"), String::from("grace")];
/// let mut total = 0;
///
/// let mut cursor = names.cursor();
/// loop {
///     let view = cursor.next_view(UNBOUNDED);
///     if view.is_empty() {
///         break;
///     }
///     for index in view.indices() {
///         total += view[index].len(); // borrowed, never cloned
///     }
/// }
/// assert_eq!(total, 8);
/// ```
pub trait Sequence {
    type Element;

    type Cursor<'s>: Cursor<Element = Self::Element>
    where
        Self: 's;

    /// Creates a cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// A lower bound on the number of elements a full traversal yields.
    ///
    /// Computed without consuming anything. Useful for pre-sizing buffers.
    fn underestimated_count(&self) -> usize {
        0
    }

    /// Answers membership without a full scan, if the sequence knows how.
    ///
    /// `None` asks the caller to fall back to a linear scan.
    fn fast_contains(&self, element: &Self::Element) -> Option<bool> {
        let _ = element;
        None
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Element = S::Element;
    type Cursor<'s>
        = S::Cursor<'s>
    where
        Self: 's;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    fn underestimated_count(&self) -> usize {
        (**self).underestimated_count()
    }

    fn fast_contains(&self, element: &Self::Element) -> Option<bool> {
        (**self).fast_contains(element)
    }
}

macro_rules! impl_contiguous_sequence {
    ($(impl<T $(, const $n:ident: usize)?> for $ty:ty;)*) => {
        $(
            impl<T $(, const $n: usize)?> Sequence for $ty {
                type Element = T;
                type Cursor<'s>
                    = ContiguousCursor<'s, T>
                where
                    Self: 's;

                #[inline]
                fn cursor(&self) -> ContiguousCursor<'_, T> {
                    ContiguousCursor::new(&self[..])
                }

                fn underestimated_count(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_contiguous_sequence! {
    impl<T> for [T];
    impl<T, const N: usize> for [T; N];
    impl<T> for Vec<T>;
    impl<T> for Box<[T]>;
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Sequence for smallvec::SmallVec<A> {
    type Element = A::Item;
    type Cursor<'s>
        = ContiguousCursor<'s, A::Item>
    where
        Self: 's;

    fn cursor(&self) -> ContiguousCursor<'_, A::Item> {
        ContiguousCursor::new(self.as_slice())
    }

    fn underestimated_count(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Cursor<'s>
        = SegmentedCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> SegmentedCursor<'_, T> {
        let (front, back) = self.as_slices();
        SegmentedCursor::new(front, back)
    }

    fn underestimated_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::UNBOUNDED;

    fn drain<S: Sequence + ?Sized>(seq: &S) -> Vec<S::Element>
    where
        S::Element: Clone,
    {
        let mut out = Vec::with_capacity(seq.underestimated_count());
        let mut cursor = seq.cursor();
        loop {
            let view = cursor.next_view(UNBOUNDED);
            if view.is_empty() {
                break;
            }
            out.extend(view.iter().cloned());
        }
        out
    }

    #[test]
    fn test_slice_like_sequences() {
        let array = [1, 2, 3];
        let vec = vec![1, 2, 3];
        let boxed: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        assert_eq!(drain(&array), vec![1, 2, 3]);
        assert_eq!(drain(&vec), vec![1, 2, 3]);
        assert_eq!(drain(&boxed), vec![1, 2, 3]);
        assert_eq!(drain(&array[1..]), vec![2, 3]);
        assert_eq!(vec.underestimated_count(), 3);
    }

    #[test]
    fn test_contiguous_sequence_is_one_view() {
        let vec: Vec<u32> = (0..100).collect();
        let mut cursor = vec.cursor();
        assert_eq!(cursor.next_view(UNBOUNDED).len(), 100);
        assert!(cursor.next_view(UNBOUNDED).is_empty());
    }

    #[test]
    fn test_vec_deque_wrapped() {
        let mut deque = VecDeque::with_capacity(4);
        deque.push_back('c');
        deque.push_back('d');
        deque.push_front('b');
        deque.push_front('a');
        assert_eq!(drain(&deque), vec!['a', 'b', 'c', 'd']);
        assert_eq!(deque.underestimated_count(), 4);
    }

    #[test]
    fn test_concurrent_cursors_share_sequence() {
        let data = vec![1, 2, 3];
        let mut first = data.cursor();
        let mut second = data.cursor();
        assert_eq!(first.next_view(1), [1]);
        assert_eq!(second.next_view(UNBOUNDED), [1, 2, 3]);
        assert_eq!(first.next_view(UNBOUNDED), [2, 3]);
    }

    #[test]
    fn test_reference_forwards() {
        let data = vec![4, 5];
        let by_ref = &data;
        assert_eq!(by_ref.underestimated_count(), 2);
        assert_eq!(drain(&by_ref), vec![4, 5]);
        assert_eq!(by_ref.fast_contains(&4), None);
    }

    #[cfg(feature = "smallvec")]
    #[test]
    fn test_smallvec() {
        let small: smallvec::SmallVec<[u8; 4]> = smallvec::smallvec![1, 2, 3];
        assert_eq!(drain(&small), vec![1, 2, 3]);
    }
}
