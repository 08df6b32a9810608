use crate::cursor::{Cursor, UNBOUNDED};
use crate::sequence::Sequence;

/// Returns `true` if `seq` contains an element equal to `needle`.
///
/// Asks [`Sequence::fast_contains`] first and scans only when it declines.
pub fn contains<S>(seq: &S, needle: &S::Element) -> bool
where
    S: Sequence + ?Sized,
    S::Element: PartialEq,
{
    if let Some(found) = seq.fast_contains(needle) {
        return found;
    }
    let mut cursor = seq.cursor();
    loop {
        let view = cursor.next_view(UNBOUNDED);
        if view.is_empty() {
            return false;
        }
        if view.as_slice().contains(needle) {
            return true;
        }
    }
}

/// The smallest element of `seq`, cloned out of its view.
///
/// Returns the first of several equal minima.
pub fn min_element<S>(seq: &S) -> Option<S::Element>
where
    S: Sequence + ?Sized,
    S::Element: Ord + Clone,
{
    select(seq, |candidate, best| candidate < best)
}

/// The largest element of `seq`, cloned out of its view.
///
/// Returns the first of several equal maxima.
pub fn max_element<S>(seq: &S) -> Option<S::Element>
where
    S: Sequence + ?Sized,
    S::Element: Ord + Clone,
{
    select(seq, |candidate, best| candidate > best)
}

/// Keeps the element for which `better(candidate, best)` last held. Only clones
/// when the best element changes.
fn select<S, F>(seq: &S, better: F) -> Option<S::Element>
where
    S: Sequence + ?Sized,
    S::Element: Clone,
    F: Fn(&S::Element, &S::Element) -> bool,
{
    let mut best: Option<S::Element> = None;
    let mut cursor = seq.cursor();
    loop {
        let view = cursor.next_view(UNBOUNDED);
        if view.is_empty() {
            return best;
        }
        for element in view {
            let replace = match &best {
                Some(current) => better(element, current),
                None => true,
            };
            if replace {
                best = Some(element.clone());
            }
        }
    }
}
