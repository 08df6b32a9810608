//! Batched, borrow-scoped traversal.
//!
//! # Overview
//!
//! `Iterator::next` hands out one element at a time, which forces a copy or a move
//! of each element into the caller's hands. This crate walks sequences without
//! either: a [`Cursor`] hands back read-only [`View`]s over runs of contiguous
//! elements, and each view is only valid until the cursor is asked for the next
//! one.
//!
//! - [`Sequence`]: anything that can produce cursors (`Vec`, slices, arrays,
//!   `VecDeque`, [`Stride`], iterator factories, ...).
//! - [`Cursor`]: `next_view(max_count)` and `skip(max_offset)`.
//! - [`View`]: a bounded, indexable window over elements owned elsewhere.
//!
//! # Reference cursors
//!
//! | Storage | Cursor | Views |
//! |---------|--------|-------|
//! | one buffer | [`ContiguousCursor`] | whole remainder at once |
//! | wrapped buffer | [`SegmentedCursor`] | one per run, two runs |
//! | chunked storage | [`RunsCursor`] | one per run, any number |
//! | computed values | [`StrideCursor`] | one element each |
//! | any `Iterator` | [`IterCursor`] | one element each |
//!
//! # Traversal pattern
//!
//! ```
//! use spanwalk_core::{Cursor, Sequence, UNBOUNDED};
//!
//! let data = vec![10, 20, 30];
//! let mut cursor = data.cursor();
//! let mut sum = 0;
//! loop {
//!     let view = cursor.next_view(UNBOUNDED);
//!     if view.is_empty() {
//!         break;
//!     }
//!     for index in view.indices() {
//!         sum += view[index];
//!     }
//! }
//! assert_eq!(sum, 60);
//! ```
//!
//! Cursors borrow their sequence, so the sequence cannot be changed under them,
//! and views borrow their cursor, so a stale view cannot be read:
//!
//! ```compile_fail
//! use spanwalk_core::{Cursor, Sequence};
//!
//! let mut data = vec![1, 2, 3];
//! let mut cursor = data.cursor();
//! data.push(4);
//! cursor.next_view(1);
//! ```
//!
//! ```compile_fail
//! use spanwalk_core::{Cursor, IteratorExt};
//!
//! let mut cursor = (1..4).into_cursor();
//! let first = cursor.next_view(1);
//! let second = cursor.next_view(1);
//! assert_eq!(first[0], second[0]);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod adapter;
pub mod algo;
pub mod contiguous;
pub mod cursor;
pub mod generative;
pub mod options;
pub mod segmented;
pub mod sequence;
pub mod view;

pub use adapter::{IterCursor, IterSequence, IteratorExt, from_iter_fn};
pub use contiguous::ContiguousCursor;
pub use cursor::{Cursor, UNBOUNDED, skip_by_views};
pub use generative::{Stride, StrideCursor, StrideElement};
pub use options::{TraversalOptions, TraversalOptionsOverride};
pub use segmented::{RunsCursor, SegmentedCursor};
pub use sequence::Sequence;
pub use view::View;
