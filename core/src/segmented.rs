//! Cursors over storage that is not laid out as one block.
//!
//! [`SegmentedCursor`] covers the two-run case of a ring buffer or a
//! [`VecDeque`](alloc::collections::VecDeque): `[head, end)` followed by
//! `[0, head)`. [`RunsCursor`] walks any number of runs, e.g. the chunks of an
//! arena-backed list.
//!
//! Both cursors drain a run completely, over as many calls as the caller's
//! `max_count` requires, before moving to the next one. Empty runs are passed
//! over, so an empty view always means the whole traversal is done.

use core::mem;

use crate::cursor::Cursor;
use crate::view::View;

/// Cursor over two runs, served in order.
///
/// ```
/// use spanwalk_core::{Cursor, SegmentedCursor};
///
/// // Logical order [a, b, c, d] stored wrapped as [c, d | a, b].
/// let storage = ['a', 'b', 'c', 'd'];
/// let (tail, head) = storage.split_at(2);
/// let mut cursor = SegmentedCursor::new(head, tail);
/// assert_eq!(cursor.next_view(10), ['c', 'd']);
/// assert_eq!(cursor.next_view(10), ['a', 'b']);
/// assert!(cursor.next_view(10).is_empty());
/// ```
#[derive(Debug)]
pub struct SegmentedCursor<'a, T> {
    current: &'a [T],
    pending: &'a [T],
}

static_assertions::assert_not_impl_any!(SegmentedCursor<'static, u8>: Clone, Copy);

impl<'a, T> SegmentedCursor<'a, T> {
    pub fn new(first: &'a [T], second: &'a [T]) -> Self {
        SegmentedCursor {
            current: first,
            pending: second,
        }
    }

    /// Number of elements left across both runs.
    pub fn remaining_len(&self) -> usize {
        self.current.len() + self.pending.len()
    }

    /// Like [`Cursor::next_view`], but the view borrows the storage rather than the
    /// cursor.
    pub fn next_run(&mut self, max_count: usize) -> View<'a, T> {
        if max_count == 0 {
            return View::EMPTY;
        }
        if self.current.is_empty() {
            if self.pending.is_empty() {
                return View::EMPTY;
            }
            tracing::trace!(len = self.pending.len(), "segmented cursor moving to second run");
            self.current = mem::take(&mut self.pending);
        }
        let taken = max_count.min(self.current.len());
        let (head, tail) = self.current.split_at(taken);
        self.current = tail;
        View::new(head)
    }
}

impl<T> Cursor for SegmentedCursor<'_, T> {
    type Element = T;

    #[inline]
    fn next_view(&mut self, max_count: usize) -> View<'_, T> {
        self.next_run(max_count)
    }

    fn skip(&mut self, max_offset: usize) -> usize {
        let from_current = max_offset.min(self.current.len());
        self.current = &self.current[from_current..];
        let from_pending = (max_offset - from_current).min(self.pending.len());
        if from_pending > 0 {
            self.current = &self.pending[from_pending..];
            self.pending = &[];
        }
        from_current + from_pending
    }
}

/// Cursor over an ordered list of runs.
///
/// Each view stays inside one run; a run longer than `max_count` is split over
/// several calls.
#[derive(Debug)]
pub struct RunsCursor<'a, T> {
    current: &'a [T],
    runs: &'a [&'a [T]],
}

static_assertions::assert_not_impl_any!(RunsCursor<'static, u8>: Clone, Copy);

impl<'a, T> RunsCursor<'a, T> {
    pub fn new(runs: &'a [&'a [T]]) -> Self {
        RunsCursor { current: &[], runs }
    }

    /// Moves to the next non-empty run. Returns `false` once all runs are used up.
    fn refill(&mut self) -> bool {
        while self.current.is_empty() {
            match self.runs.split_first() {
                Some((next, rest)) => {
                    self.current = next;
                    self.runs = rest;
                }
                None => return false,
            }
        }
        true
    }

    /// Like [`Cursor::next_view`], but the view borrows the storage rather than the
    /// cursor.
    pub fn next_run(&mut self, max_count: usize) -> View<'a, T> {
        if max_count == 0 || !self.refill() {
            return View::EMPTY;
        }
        let taken = max_count.min(self.current.len());
        let (head, tail) = self.current.split_at(taken);
        self.current = tail;
        if self.current.is_empty() && self.runs.is_empty() {
            tracing::trace!("runs cursor drained");
        }
        View::new(head)
    }
}

impl<T> Cursor for RunsCursor<'_, T> {
    type Element = T;

    #[inline]
    fn next_view(&mut self, max_count: usize) -> View<'_, T> {
        self.next_run(max_count)
    }

    fn skip(&mut self, max_offset: usize) -> usize {
        let mut skipped = 0;
        while skipped < max_offset && self.refill() {
            let step = (max_offset - skipped).min(self.current.len());
            self.current = &self.current[step..];
            skipped += step;
        }
        skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::UNBOUNDED;

    #[test]
    fn test_wrapped_storage_scenario() {
        let storage = ['a', 'b', 'c', 'd'];
        let mut cursor = SegmentedCursor::new(&storage[2..], &storage[..2]);
        assert_eq!(cursor.next_view(10), ['c', 'd']);
        assert_eq!(cursor.next_view(10), ['a', 'b']);
        assert!(cursor.next_view(10).is_empty());
        assert!(cursor.next_view(10).is_empty());
    }

    #[test]
    fn test_first_run_drains_before_second() {
        let first = [1, 2, 3];
        let second = [4, 5];
        let mut cursor = SegmentedCursor::new(&first, &second);
        assert_eq!(cursor.next_view(2), [1, 2]);
        assert_eq!(cursor.next_view(2), [3]);
        assert_eq!(cursor.next_view(2), [4, 5]);
        assert!(cursor.next_view(2).is_empty());
    }

    #[test]
    fn test_empty_first_run() {
        let second = [4, 5];
        let mut cursor = SegmentedCursor::new(&[], &second);
        assert_eq!(cursor.remaining_len(), 2);
        assert_eq!(cursor.next_view(UNBOUNDED), [4, 5]);
        assert!(cursor.next_view(UNBOUNDED).is_empty());
    }

    #[test]
    fn test_zero_request_keeps_runs() {
        let second = [4, 5];
        let mut cursor = SegmentedCursor::new(&[], &second);
        assert!(cursor.next_view(0).is_empty());
        assert!(cursor.current.is_empty());
        assert_eq!(cursor.pending, [4, 5]);
        assert_eq!(cursor.next_view(1), [4]);
    }

    #[test]
    fn test_skip_across_runs() {
        let first = [1, 2];
        let second = [3, 4, 5];
        let mut cursor = SegmentedCursor::new(&first, &second);
        assert_eq!(cursor.skip(3), 3);
        assert_eq!(cursor.remaining_len(), 2);
        assert_eq!(cursor.next_view(UNBOUNDED), [4, 5]);
        assert_eq!(cursor.skip(1), 0);
    }

    #[test]
    fn test_skip_within_first_run() {
        let first = [1, 2, 3];
        let second = [4];
        let mut cursor = SegmentedCursor::new(&first, &second);
        assert_eq!(cursor.skip(1), 1);
        assert_eq!(cursor.next_view(UNBOUNDED), [2, 3]);
        assert_eq!(cursor.next_view(UNBOUNDED), [4]);
    }

    #[test]
    fn test_skip_clamps_to_remaining() {
        let first = [1];
        let second = [2, 3];
        let mut cursor = SegmentedCursor::new(&first, &second);
        assert_eq!(cursor.skip(100), 3);
        assert!(cursor.next_view(UNBOUNDED).is_empty());
    }

    #[test]
    fn test_runs_cursor_skips_empty_runs() {
        let a = [1, 2];
        let b: [i32; 0] = [];
        let c = [3];
        let runs: [&[i32]; 4] = [&b, &a, &b, &c];
        let mut cursor = RunsCursor::new(&runs);
        assert_eq!(cursor.next_view(UNBOUNDED), [1, 2]);
        assert_eq!(cursor.next_view(UNBOUNDED), [3]);
        assert!(cursor.next_view(UNBOUNDED).is_empty());
        assert!(cursor.next_view(UNBOUNDED).is_empty());
    }

    #[test]
    fn test_runs_cursor_splits_long_runs() {
        let a = [1, 2, 3, 4, 5];
        let runs: [&[i32]; 1] = [&a];
        let mut cursor = RunsCursor::new(&runs);
        assert_eq!(cursor.next_view(2), [1, 2]);
        assert_eq!(cursor.next_view(2), [3, 4]);
        assert_eq!(cursor.next_view(2), [5]);
        assert!(cursor.next_view(2).is_empty());
    }

    #[test]
    fn test_runs_cursor_skip() {
        let a = [1, 2];
        let b = [3, 4, 5];
        let runs: [&[i32]; 2] = [&a, &b];
        let mut cursor = RunsCursor::new(&runs);
        assert_eq!(cursor.skip(3), 3);
        assert_eq!(cursor.next_view(UNBOUNDED), [4, 5]);
        assert_eq!(cursor.skip(3), 0);
    }

    #[test]
    fn test_runs_cursor_no_runs() {
        let runs: [&[u8]; 0] = [];
        let mut cursor = RunsCursor::new(&runs);
        assert!(cursor.next_view(UNBOUNDED).is_empty());
        assert_eq!(cursor.skip(1), 0);
    }
}
