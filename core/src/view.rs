//! Read-only views over contiguous runs of elements.
//!
//! A [`View`] is what a [`Cursor`](crate::Cursor) hands out: a bounded, indexable
//! window over elements that somebody else owns. Views never own or copy their
//! elements. When a view comes out of [`Cursor::next_view`](crate::Cursor::next_view)
//! its lifetime is tied to the `&mut` borrow of the cursor, so it is dead by the
//! time the cursor can be advanced again.
//!
//! The empty view doubles as the end-of-traversal sentinel.

use core::fmt::Debug;
use core::ops::{Index, Range};
use core::slice;

/// A bounded, non-owning, read-only view over contiguous elements.
pub struct View<'a, T> {
    elements: &'a [T],
}

static_assertions::assert_eq_size!(View<'static, u64>, [usize; 2]);

// --- Manual Clone/Copy/Debug/Default to avoid T: Clone/Copy/Default bounds ---

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T: Debug> Debug for View<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.elements).finish()
    }
}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<'a, T> View<'a, T> {
    /// The empty view. Returned by every cursor once it is exhausted.
    pub const EMPTY: Self = View { elements: &[] };

    pub const fn new(elements: &'a [T]) -> Self {
        View { elements }
    }

    /// A view over exactly one element.
    pub const fn single(element: &'a T) -> Self {
        View {
            elements: slice::from_ref(element),
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elements.get(index)
    }

    pub fn first(&self) -> Option<&'a T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.elements.last()
    }

    /// The valid indices of this view, `0..len`.
    pub fn indices(&self) -> Range<usize> {
        0..self.elements.len()
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.elements.iter()
    }

    /// The underlying slice, with the full lifetime of the view.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.elements
    }

    /// The first `min(count, len)` elements.
    pub fn prefix(self, count: usize) -> Self {
        let count = count.min(self.elements.len());
        View {
            elements: &self.elements[..count],
        }
    }

    /// Drops the first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > len`.
    #[track_caller]
    pub fn trim_front(self, count: usize) -> Self {
        assert!(
            count <= self.elements.len(),
            "cannot trim {count} elements from a view of length {}",
            self.elements.len()
        );
        View {
            elements: &self.elements[count..],
        }
    }

    /// Splits the view in two at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > len`.
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let (head, tail) = self.elements.split_at(mid);
        (View::new(head), View::new(tail))
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(elements: &'a [T]) -> Self {
        View::new(elements)
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// --- Equality is element-wise, like slices ---

impl<T, U> PartialEq<View<'_, U>> for View<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &View<'_, U>) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for View<'_, T> {}

impl<T, U> PartialEq<[U]> for View<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.elements == other
    }
}

impl<T, U> PartialEq<&[U]> for View<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.elements == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for View<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.elements == &other[..]
    }
}
