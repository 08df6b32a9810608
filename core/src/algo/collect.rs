use alloc::vec::Vec;

use crate::cursor::{Cursor, UNBOUNDED};
use crate::sequence::Sequence;

/// Clones every element of `seq` into a `Vec`, pre-sized by
/// [`Sequence::underestimated_count`].
pub fn to_vec<S>(seq: &S) -> Vec<S::Element>
where
    S: Sequence + ?Sized,
    S::Element: Clone,
{
    let mut out = Vec::with_capacity(seq.underestimated_count());
    let mut cursor = seq.cursor();
    loop {
        let view = cursor.next_view(UNBOUNDED);
        if view.is_empty() {
            return out;
        }
        out.extend_from_slice(view.as_slice());
    }
}

/// Iterator over clones of a cursor's elements. See [`Cursor::cloned`].
///
/// Pulls one element per view, so a cursor that is only partially iterated
/// stays positioned right after the last element returned.
#[derive(Debug)]
pub struct Cloned<C> {
    cursor: C,
}

impl<C> Cloned<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Cloned { cursor }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Cloned<C>
where
    C: Cursor,
    C::Element: Clone,
{
    type Item = C::Element;

    fn next(&mut self) -> Option<C::Element> {
        self.cursor.next_view(1).first().cloned()
    }

    fn nth(&mut self, n: usize) -> Option<C::Element> {
        if self.cursor.skip(n) < n {
            return None;
        }
        self.next()
    }
}

impl<C> core::iter::FusedIterator for Cloned<C>
where
    C: Cursor,
    C::Element: Clone,
{
}
