#![allow(unsafe_code)]

//! RingBuffer: a growable double-ended queue whose storage wraps around.
//!
//! RingBuffer provides a FIFO/LIFO container that:
//! - Pushes and pops at both ends in O(1)
//! - Keeps its elements in one allocation, split into at most two runs
//! - Doubles its capacity when full, re-linearizing the contents
//! - Is traversed through a [`SegmentedCursor`], one view per run
//!
//! ```text
//! physical:  [ a | b | c | d ]        head = 2
//!                      └ head
//! runs:      [c, d] then [a, b]
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc};
use core::{
    fmt,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
    slice,
};

use spanwalk_core::{SegmentedCursor, Sequence, algo};

/// Errors from sizing a ring buffer's allocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// The requested capacity does not fit in a single allocation.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide the requested memory.
    #[error("allocation of {capacity} elements failed")]
    AllocFailed { capacity: usize },
}

const MIN_NON_ZERO_CAP: usize = 4;

pub struct RingBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,  // usize::MAX for zero-sized T
    head: usize, // physical index of the first element
    len: usize,
    _marker: PhantomData<T>,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(RingBuffer<u64>, [usize; 4]);

// SAFETY: RingBuffer owns its elements like Vec does.
unsafe impl<T: Send> Send for RingBuffer<T> {}
unsafe impl<T: Sync> Sync for RingBuffer<T> {}

#[cold]
#[track_caller]
fn allocation_failure(err: RingError) -> ! {
    panic!("ring buffer allocation failed: {err}")
}

impl<T> RingBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if Self::IS_ZST { usize::MAX } else { 0 },
            head: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty buffer holding at least `capacity` elements without
    /// reallocating.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, RingError> {
        let mut ring = Self::new();
        if capacity > ring.cap {
            ring.realloc(capacity)?;
        }
        Ok(ring)
    }

    /// Like [`RingBuffer::try_with_capacity`], panicking on failure.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| allocation_failure(err))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Physical slot of the element at logical index `index` (`index <= cap`).
    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        let to_end = self.cap - self.head;
        if index >= to_end {
            index - to_end
        } else {
            self.head + index
        }
    }

    /// Makes room for at least `additional` more elements.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), RingError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(RingError::CapacityOverflow)?;
        if required <= self.cap {
            return Ok(());
        }
        let new_cap = required
            .max(self.cap.saturating_mul(2))
            .max(MIN_NON_ZERO_CAP);
        self.realloc(new_cap)
    }

    #[cold]
    #[track_caller]
    fn grow_one(&mut self) {
        debug_assert_eq!(self.len, self.cap);
        if let Err(err) = self.try_reserve(1) {
            allocation_failure(err);
        }
    }

    /// Moves the contents into a fresh allocation of `new_cap` slots, with the
    /// first element at slot 0.
    fn realloc(&mut self, new_cap: usize) -> Result<(), RingError> {
        debug_assert!(!Self::IS_ZST);
        debug_assert!(new_cap >= self.len);
        let layout = Layout::array::<T>(new_cap).map_err(|_| RingError::CapacityOverflow)?;
        // SAFETY: `layout` has non-zero size since T is not zero-sized and new_cap > 0.
        let new_ptr = NonNull::new(unsafe { alloc(layout) }.cast::<T>())
            .ok_or(RingError::AllocFailed { capacity: new_cap })?;

        let (first, second) = self.as_slices();
        // SAFETY: the new allocation holds new_cap >= len slots and does not overlap
        // the old one. Elements are moved bitwise; the old slots are never read again.
        unsafe {
            ptr::copy_nonoverlapping(first.as_ptr(), new_ptr.as_ptr(), first.len());
            ptr::copy_nonoverlapping(
                second.as_ptr(),
                new_ptr.as_ptr().add(first.len()),
                second.len(),
            );
        }

        let old_cap = self.cap;
        self.free_allocation();
        self.ptr = new_ptr;
        self.cap = new_cap;
        self.head = 0;
        tracing::debug!(old_cap, new_cap, len = self.len, "ring buffer grew");
        Ok(())
    }

    /// Releases the allocation without touching the elements.
    fn free_allocation(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }
        // SAFETY: ptr was allocated with exactly this layout in `realloc`.
        unsafe {
            let layout = Layout::array::<T>(self.cap).unwrap_unchecked();
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }

    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap {
            self.grow_one();
        }
        let slot = self.physical(self.len);
        // SAFETY: slot < cap and is not occupied, since len < cap.
        unsafe { ptr::write(self.ptr.as_ptr().add(slot), value) };
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        if self.len == self.cap {
            self.grow_one();
        }
        self.head = if self.head == 0 {
            self.cap - 1
        } else {
            self.head - 1
        };
        // SAFETY: head < cap and the slot before the old head is free since len < cap.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.head), value) };
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: head holds an initialized element, which is logically removed below.
        let value = unsafe { ptr::read(self.ptr.as_ptr().add(self.head)) };
        self.head = self.physical(1);
        self.len -= 1;
        Some(value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let slot = self.physical(self.len);
        // SAFETY: slot held the last initialized element, now outside `len`.
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(slot)) })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len, so the physical slot is initialized.
        Some(unsafe { &*self.ptr.as_ptr().add(self.physical(index)) })
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// The contents as two runs in logical order. The second run is empty unless
    /// the contents wrap past the end of the allocation.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = self.len.min(self.cap - self.head);
        // SAFETY: [head, head + first_len) and [0, len - first_len) are initialized
        // and within the allocation.
        unsafe {
            let base = self.ptr.as_ptr();
            (
                slice::from_raw_parts(base.add(self.head), first_len),
                slice::from_raw_parts(base, self.len - first_len),
            )
        }
    }

    fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first_len = self.len.min(self.cap - self.head);
        // SAFETY: as in `as_slices`; the two ranges do not overlap.
        unsafe {
            let base = self.ptr.as_ptr();
            (
                slice::from_raw_parts_mut(base.add(self.head), first_len),
                slice::from_raw_parts_mut(base, self.len - first_len),
            )
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (first, second) = self.as_slices();
        first.iter().chain(second)
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let (first, second) = self.as_mut_slices();
        let (first, second) = (first as *mut [T], second as *mut [T]);
        // Reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        self.head = 0;
        // SAFETY: both runs were initialized and are no longer reachable.
        unsafe {
            ptr::drop_in_place(first);
            ptr::drop_in_place(second);
        }
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
        self.free_allocation();
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        let mut ring = Self::with_capacity(self.len);
        ring.extend(self.iter().cloned());
        ring
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && algo::elements_equal(self, other)
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let Err(err) = self.try_reserve(iter.size_hint().0) {
            allocation_failure(err);
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Sequence for RingBuffer<T> {
    type Element = T;
    type Cursor<'s>
        = SegmentedCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> SegmentedCursor<'_, T> {
        let (first, second) = self.as_slices();
        SegmentedCursor::new(first, second)
    }

    fn underestimated_count(&self) -> usize {
        self.len
    }
}
