use crate::cursor::{Cursor, UNBOUNDED};
use crate::options::TraversalOptions;
use crate::sequence::Sequence;
use crate::view::View;

/// Calls `f` on every view of `seq`, requesting at most `options.max_view_len`
/// elements each time.
///
/// # Panics
///
/// Panics if `options.max_view_len` is zero.
#[track_caller]
pub fn traverse<S, F>(seq: &S, options: TraversalOptions, mut f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(View<'_, S::Element>),
{
    assert!(options.max_view_len > 0, "max_view_len must be positive");
    let mut cursor = seq.cursor();
    loop {
        let view = cursor.next_view(options.max_view_len);
        if view.is_empty() {
            break;
        }
        f(view);
    }
}

/// Calls `f` on every element of `seq`, in order, by reference.
pub fn for_each_element<S, F>(seq: &S, mut f: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Element),
{
    traverse(seq, TraversalOptions::default(), |view| {
        for element in view {
            f(element);
        }
    });
}

/// Folds every element of `seq` into an accumulator.
pub fn fold<S, B, F>(seq: &S, init: B, mut f: F) -> B
where
    S: Sequence + ?Sized,
    F: FnMut(B, &S::Element) -> B,
{
    let mut acc = init;
    let mut cursor = seq.cursor();
    loop {
        let view = cursor.next_view(UNBOUNDED);
        if view.is_empty() {
            return acc;
        }
        for element in view {
            acc = f(acc, element);
        }
    }
}

/// Counts the elements of `seq` without looking at them.
pub fn count<S: Sequence + ?Sized>(seq: &S) -> usize {
    let mut cursor = seq.cursor();
    cursor.skip(UNBOUNDED)
}
