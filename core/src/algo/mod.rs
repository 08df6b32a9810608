//! Algorithms built on the two-level traversal pattern.
//!
//! Every function here walks its input the same way: request a view, process its
//! elements by reference, stop at the first empty view. The base traits put no
//! requirement on the element type; each algorithm asks only for what it needs
//! (`PartialEq` to compare, `Ord + Clone` for extrema, `Clone` to collect).

mod collect;
mod compare;
mod drive;
mod search;

pub use collect::{Cloned, to_vec};
pub use compare::{cursors_equal, elements_equal};
pub use drive::{count, fold, for_each_element, traverse};
pub use search::{contains, max_element, min_element};
