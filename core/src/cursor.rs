//! The cursor capability: stateful traversal handing out bounded views.

use alloc::boxed::Box;

use crate::algo::Cloned;
use crate::view::View;

/// Request size meaning "as many elements as the current run holds".
pub const UNBOUNDED: usize = usize::MAX;

/// Exclusive traversal state over a sequence.
///
/// A cursor yields successive [`View`]s over contiguous runs of elements. Every
/// view borrows the cursor, so it has to be dropped before the cursor is asked
/// for anything else. Cursors in this crate never implement `Clone`: forking a
/// traversal by duplicating its cursor is not supported.
///
/// # Contract
///
/// - `next_view(max_count)` returns `0 <= len <= max_count` elements. An empty
///   view for `max_count > 0` means the cursor is exhausted, and every later
///   call returns an empty view as well.
/// - `next_view(0)` returns an empty view and leaves the cursor untouched. It is
///   not an end-of-traversal signal.
/// - `skip(n)` advances by `min(n, remaining)` elements and returns that count.
///
/// `dyn Cursor<Element = T>` is available for callers that want a single cursor
/// type across storage kinds, at the cost of a virtual call per view.
pub trait Cursor {
    type Element;

    /// Returns the next contiguous run of at most `max_count` elements.
    fn next_view(&mut self, max_count: usize) -> View<'_, Self::Element>;

    /// Advances past up to `max_offset` elements, returning how many were skipped.
    ///
    /// The default drains views until the offset is reached. Cursors that can move
    /// their position in constant time override it.
    fn skip(&mut self, max_offset: usize) -> usize {
        skip_by_views(self, max_offset)
    }

    /// Bridges back to classic iteration by cloning each element.
    fn cloned(self) -> Cloned<Self>
    where
        Self: Sized,
        Self::Element: Clone,
    {
        Cloned::new(self)
    }

    /// Borrows the cursor so that an algorithm taking a cursor by value leaves the
    /// rest of the traversal to the caller.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

/// The view-draining `skip` used by [`Cursor::skip`] unless overridden.
pub fn skip_by_views<C>(cursor: &mut C, max_offset: usize) -> usize
where
    C: Cursor + ?Sized,
{
    let mut skipped = 0;
    while skipped < max_offset {
        let taken = cursor.next_view(max_offset - skipped).len();
        if taken == 0 {
            break;
        }
        skipped += taken;
    }
    skipped
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Element = C::Element;

    #[inline]
    fn next_view(&mut self, max_count: usize) -> View<'_, Self::Element> {
        (**self).next_view(max_count)
    }

    #[inline]
    fn skip(&mut self, max_offset: usize) -> usize {
        (**self).skip(max_offset)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Element = C::Element;

    #[inline]
    fn next_view(&mut self, max_count: usize) -> View<'_, Self::Element> {
        (**self).next_view(max_count)
    }

    #[inline]
    fn skip(&mut self, max_offset: usize) -> usize {
        (**self).skip(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContiguousCursor;

    /// A cursor that only implements `next_view`, to exercise the default `skip`.
    struct Chunked<'a> {
        data: &'a [i32],
        chunk: usize,
    }

    impl Cursor for Chunked<'_> {
        type Element = i32;

        fn next_view(&mut self, max_count: usize) -> View<'_, i32> {
            let n = max_count.min(self.chunk).min(self.data.len());
            let (head, tail) = self.data.split_at(n);
            self.data = tail;
            View::new(head)
        }
    }

    #[test]
    fn test_default_skip_accumulates_views() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let mut cursor = Chunked {
            data: &data,
            chunk: 2,
        };
        assert_eq!(cursor.skip(5), 5);
        assert_eq!(cursor.next_view(UNBOUNDED), [6, 7]);
        assert_eq!(cursor.skip(3), 0);
    }

    #[test]
    fn test_default_skip_stops_at_end() {
        let data = [1, 2, 3];
        let mut cursor = Chunked {
            data: &data,
            chunk: 1,
        };
        assert_eq!(cursor.skip(10), 3);
        assert!(cursor.next_view(1).is_empty());
    }

    #[test]
    fn test_skip_zero() {
        let data = [1, 2, 3];
        let mut cursor = Chunked {
            data: &data,
            chunk: 3,
        };
        assert_eq!(cursor.skip(0), 0);
        assert_eq!(cursor.next_view(UNBOUNDED), [1, 2, 3]);
    }

    #[test]
    fn test_boxed_dyn_cursor() {
        let data = [1, 2, 3, 4];
        let mut cursor: Box<dyn Cursor<Element = i32>> = Box::new(ContiguousCursor::new(&data));
        assert_eq!(cursor.skip(1), 1);
        assert_eq!(cursor.next_view(2), [2, 3]);
        assert_eq!(cursor.next_view(2), [4]);
        assert!(cursor.next_view(2).is_empty());
    }

    #[test]
    fn test_by_ref_leaves_cursor_usable() {
        let data = [1, 2, 3, 4];
        let mut cursor = ContiguousCursor::new(&data);
        let first_two: Vec<i32> = cursor.by_ref().cloned().take(2).collect();
        assert_eq!(first_two, vec![1, 2]);
        assert_eq!(cursor.next_view(UNBOUNDED), [3, 4]);
    }
}
