//! On-demand sequences whose elements are computed rather than stored.
//!
//! There is no backing buffer to point a multi-element view at, so a generative
//! cursor materializes one element at a time into a slot it owns and hands out a
//! view of length one over that slot.

use core::ops::Range;

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::view::View;

mod private {
    pub trait Sealed {}
}

/// Integer types that can be stepped through by a [`Stride`].
///
/// This is a sealed trait - it cannot be implemented outside this crate.
pub trait StrideElement: Copy + PartialOrd + private::Sealed {
    #[doc(hidden)]
    const ZERO: Self;
    #[doc(hidden)]
    const ONE: Self;

    /// Number of elements in `start, start + step, ...` strictly below `end`.
    #[doc(hidden)]
    fn count(start: Self, end: Self, step: Self) -> usize;

    /// `start + step * index`. Only called for indices below `count`.
    #[doc(hidden)]
    fn nth(start: Self, step: Self, index: usize) -> Self;

    /// Index of `value` in the progression, ignoring the upper bound.
    #[doc(hidden)]
    fn index_of(start: Self, step: Self, value: Self) -> Option<usize>;
}

// Offsets are computed in the unsigned type of the same width, so every span
// between two values of `$ty` is representable.
macro_rules! impl_stride_element {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl StrideElement for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn count(start: Self, end: Self, step: Self) -> usize {
                    if end <= start {
                        return 0;
                    }
                    let span = end.abs_diff(start);
                    let count = span.div_ceil(step as $unsigned);
                    usize::try_from(count).unwrap_or(usize::MAX)
                }

                fn nth(start: Self, step: Self, index: usize) -> Self {
                    // index < count, so step * index < end - start fits.
                    let offset = (step as $unsigned).wrapping_mul(index as $unsigned);
                    start.wrapping_add(offset as $ty)
                }

                fn index_of(start: Self, step: Self, value: Self) -> Option<usize> {
                    if value < start {
                        return None;
                    }
                    let offset = value.abs_diff(start);
                    let step = step as $unsigned;
                    if offset % step != 0 {
                        return None;
                    }
                    usize::try_from(offset / step).ok()
                }
            }
        )*
    };
}

impl_stride_element!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

/// An arithmetic progression `start, start + step, ...` strictly below `end`.
///
/// ```
/// use spanwalk_core::{Cursor, Sequence, Stride};
///
/// let evens = Stride::new(0, 7, 2);
/// assert_eq!(evens.underestimated_count(), 4);
///
/// let mut cursor = evens.cursor();
/// // Generated elements always come one per view.
/// assert_eq!(cursor.next_view(10), [0]);
/// assert_eq!(cursor.skip(2), 2);
/// assert_eq!(cursor.next_view(10), [6]);
/// assert!(cursor.next_view(10).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride<T> {
    start: T,
    end: T,
    step: T,
}

impl<T: StrideElement> Stride<T> {
    /// # Panics
    ///
    /// Panics if `step` is not positive.
    #[track_caller]
    pub fn new(start: T, end: T, step: T) -> Self {
        assert!(step > T::ZERO, "stride step must be positive");
        Stride { start, end, step }
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Exact number of elements in the progression.
    pub fn len(&self) -> usize {
        T::count(self.start, self.end, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: StrideElement> From<Range<T>> for Stride<T> {
    fn from(range: Range<T>) -> Self {
        Stride::new(range.start, range.end, T::ONE)
    }
}

/// Cursor over a [`Stride`], yielding one generated element per view.
#[derive(Debug)]
pub struct StrideCursor<T> {
    stride: Stride<T>,
    index: usize,
    len: usize,
    slot: Option<T>,
}

static_assertions::assert_not_impl_any!(StrideCursor<u32>: Clone, Copy);

impl<T: StrideElement> StrideCursor<T> {
    pub fn new(stride: Stride<T>) -> Self {
        StrideCursor {
            stride,
            index: 0,
            len: stride.len(),
            slot: None,
        }
    }

    /// Number of elements not yet produced.
    pub fn remaining_len(&self) -> usize {
        self.len - self.index
    }
}

impl<T: StrideElement> Cursor for StrideCursor<T> {
    type Element = T;

    fn next_view(&mut self, max_count: usize) -> View<'_, T> {
        if max_count == 0 || self.index == self.len {
            return View::EMPTY;
        }
        let value = T::nth(self.stride.start, self.stride.step, self.index);
        self.index += 1;
        if self.index == self.len {
            tracing::trace!(len = self.len, "stride cursor drained");
        }
        View::single(self.slot.insert(value))
    }

    fn skip(&mut self, max_offset: usize) -> usize {
        let skipped = max_offset.min(self.len - self.index);
        self.index += skipped;
        skipped
    }
}

impl<T: StrideElement> Sequence for Stride<T> {
    type Element = T;
    type Cursor<'s>
        = StrideCursor<T>
    where
        Self: 's;

    fn cursor(&self) -> StrideCursor<T> {
        StrideCursor::new(*self)
    }

    fn underestimated_count(&self) -> usize {
        self.len()
    }

    fn fast_contains(&self, element: &T) -> Option<bool> {
        if *element >= self.end {
            return Some(false);
        }
        let found = T::index_of(self.start, self.step, *element)
            .is_some_and(|index| index < self.len());
        Some(found)
    }
}
