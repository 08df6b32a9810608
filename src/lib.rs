//! Spanwalk - batched, borrow-scoped traversal of sequences
//!
//! # Overview
//!
//! A [`Cursor`] walks a [`Sequence`] by handing out read-only [`View`]s over
//! runs of contiguous elements. A view stays valid until the cursor is asked
//! for the next one, so elements are never copied out of their storage and the
//! storage cannot change while it is being walked.
//!
//! The same contract covers very different storage:
//!
//! - contiguous buffers (`Vec`, slices, arrays): one view for everything
//! - wrapped buffers (`VecDeque`, [`ring::RingBuffer`]): one view per run
//! - chunked storage ([`chunk_list::ChunkList`]): one view per chunk
//! - computed values ([`Stride`]) and plain iterators ([`IteratorExt`]): one
//!   element per view
//!
//! Algorithms in [`algo`] work across all of them.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::VecDeque;
//!
//! use spanwalk::{Cursor, Sequence, Stride, UNBOUNDED, algo};
//!
//! let mut deque = VecDeque::from([3, 4, 5]);
//! deque.push_front(2);
//! deque.push_front(1);
//!
//! // Views follow the storage, not the logical order.
//! let mut total = 0;
//! let mut cursor = deque.cursor();
//! loop {
//!     let view = cursor.next_view(UNBOUNDED);
//!     if view.is_empty() {
//!         break;
//!     }
//!     total += view.iter().sum::<i32>();
//! }
//! assert_eq!(total, 15);
//!
//! // Comparisons don't care where the boundaries fall.
//! assert!(algo::elements_equal(&deque, &[1, 2, 3, 4, 5]));
//! assert!(algo::elements_equal(&deque, &Stride::new(1, 6, 1)));
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Feature |
//! |--------|-------|---------|
//! | (root), [`algo`] | `spanwalk-core` | always |
//! | [`ring`] | `spanwalk-ring` | `ring` (default) |
//! | [`chunk_list`] | `spanwalk-chunk-list` | `chunk-list` (default) |

#![cfg_attr(not(feature = "std"), no_std)]

pub use spanwalk_core::{
    ContiguousCursor, Cursor, IterCursor, IterSequence, IteratorExt, RunsCursor, SegmentedCursor,
    Sequence, Stride, StrideCursor, StrideElement, TraversalOptions, TraversalOptionsOverride,
    UNBOUNDED, View, algo, from_iter_fn, skip_by_views,
};

#[cfg(feature = "chunk-list")]
pub use spanwalk_chunk_list as chunk_list;
#[cfg(feature = "ring")]
pub use spanwalk_ring as ring;
