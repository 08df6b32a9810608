use crate::cursor::{Cursor, UNBOUNDED};
use crate::sequence::Sequence;

/// Returns `true` if `a` and `b` have the same length and pairwise equal elements.
///
/// The two sides may split their storage into runs at unrelated boundaries; the
/// comparison only ever asks `b` for as many elements as are left in the current
/// view of `a`.
///
/// ```
/// use std::collections::VecDeque;
/// use spanwalk_core::algo::elements_equal;
///
/// let mut wrapped = VecDeque::with_capacity(5);
/// wrapped.extend([3, 4, 5]);
/// wrapped.push_front(2);
/// wrapped.push_front(1);
///
/// assert!(elements_equal(&[1, 2, 3, 4, 5], &wrapped));
/// assert!(!elements_equal(&[1, 2, 3, 4], &wrapped));
/// ```
pub fn elements_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    A::Element: PartialEq<B::Element>,
{
    cursors_equal(a.cursor(), b.cursor())
}

/// Like [`elements_equal`], comparing whatever is left in two cursors.
///
/// Both cursors are consumed up to the first difference.
pub fn cursors_equal<A, B>(mut a: A, mut b: B) -> bool
where
    A: Cursor,
    B: Cursor,
    A::Element: PartialEq<B::Element>,
{
    loop {
        let mut rest = a.next_view(UNBOUNDED);
        if rest.is_empty() {
            let longer = !b.next_view(1).is_empty();
            if longer {
                tracing::debug!("sequences differ: right side is longer");
            }
            return !longer;
        }
        while !rest.is_empty() {
            let other = b.next_view(rest.len());
            if other.is_empty() {
                tracing::debug!("sequences differ: left side is longer");
                return false;
            }
            let overlap = other.len();
            if rest.as_slice()[..overlap] != *other.as_slice() {
                tracing::debug!(overlap, "sequences differ: element mismatch");
                return false;
            }
            rest = rest.trim_front(overlap);
        }
    }
}
