//! Cursor over a single contiguous buffer.

use crate::cursor::Cursor;
use crate::view::View;

/// Cursor over one contiguous block of elements.
///
/// An unbounded request returns everything that is left in a single view.
///
/// ```
/// use spanwalk_core::{ContiguousCursor, Cursor};
///
/// let data = [10, 20, 30];
/// let mut cursor = ContiguousCursor::new(&data);
/// assert_eq!(cursor.next_view(2), [10, 20]);
/// assert_eq!(cursor.next_view(2), [30]);
/// assert!(cursor.next_view(2).is_empty());
/// ```
#[derive(Debug)]
pub struct ContiguousCursor<'a, T> {
    elements: &'a [T],
    offset: usize,
}

static_assertions::assert_not_impl_any!(ContiguousCursor<'static, u8>: Clone, Copy);

impl<'a, T> ContiguousCursor<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        ContiguousCursor {
            elements,
            offset: 0,
        }
    }

    /// Number of elements already consumed.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The elements not yet consumed.
    pub fn remaining(&self) -> &'a [T] {
        &self.elements[self.offset..]
    }

    /// Like [`Cursor::next_view`], but the view borrows the buffer rather than the
    /// cursor and may be held across later calls.
    pub fn next_run(&mut self, max_count: usize) -> View<'a, T> {
        let start = self.offset;
        let taken = max_count.min(self.elements.len() - start);
        if taken == 0 {
            return View::EMPTY;
        }
        self.offset += taken;
        if self.offset == self.elements.len() {
            tracing::trace!(len = self.elements.len(), "contiguous cursor drained");
        }
        View::new(&self.elements[start..self.offset])
    }
}

impl<T> Cursor for ContiguousCursor<'_, T> {
    type Element = T;

    #[inline]
    fn next_view(&mut self, max_count: usize) -> View<'_, T> {
        self.next_run(max_count)
    }

    fn skip(&mut self, max_offset: usize) -> usize {
        let skipped = max_offset.min(self.elements.len() - self.offset);
        self.offset += skipped;
        skipped
    }
}
