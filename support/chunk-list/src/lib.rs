//! Append-only lists stored as fixed-size chunks in a bump arena.
//!
//! A `ChunkList<'arena, T>` never moves an element once it has been written:
//! elements are buffered until a chunk is full, then the chunk is copied into
//! the arena in one allocation. The list keeps only the chunk references, so traversal
//! produces one view per chunk:
//!
//! ```text
//! chunks: [ &arena[0..3] | &arena[3..6] | &arena[6..8] ]
//!            full           full           last (partial)
//! ```
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use spanwalk_chunk_list::ChunkListBuilder;
//! use spanwalk_core::{Cursor, Sequence, UNBOUNDED};
//!
//! let arena = Bump::new();
//! let mut builder = ChunkListBuilder::new(&arena, 3);
//! builder.extend(0..8);
//! let list = builder.finish();
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.next_view(UNBOUNDED), [0, 1, 2]);
//! assert_eq!(cursor.next_view(UNBOUNDED), [3, 4, 5]);
//! assert_eq!(cursor.next_view(UNBOUNDED), [6, 7]);
//! assert!(cursor.next_view(UNBOUNDED).is_empty());
//! ```
//!
//! # Gotchas
//!
//! - **No drop**: `Drop` is not called on elements that reached the arena.
//!   Bumpalo arenas don't run destructors. Don't store types that require cleanup.
//! - **Append-only**: a finished list is read-only; build a new one to change it.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use bumpalo::Bump;
use spanwalk_core::{RunsCursor, Sequence};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    #[error("chunk length must be positive")]
    ZeroChunkLen,
}

/// Collects elements and seals them into arena chunks of `chunk_len` elements.
pub struct ChunkListBuilder<'arena, T> {
    arena: &'arena Bump,
    chunk_len: usize,
    chunks: Vec<&'arena [T]>,
    pending: Vec<T>,
    len: usize,
}

impl<'arena, T> ChunkListBuilder<'arena, T> {
    /// Creates a builder writing chunks of `chunk_len` elements into `arena`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_len` is zero. See [`ChunkListBuilder::try_new`].
    #[track_caller]
    pub fn new(arena: &'arena Bump, chunk_len: usize) -> Self {
        match Self::try_new(arena, chunk_len) {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(arena: &'arena Bump, chunk_len: usize) -> Result<Self, ChunkError> {
        if chunk_len == 0 {
            return Err(ChunkError::ZeroChunkLen);
        }
        Ok(ChunkListBuilder {
            arena,
            chunk_len,
            chunks: Vec::new(),
            pending: Vec::with_capacity(chunk_len),
            len: 0,
        })
    }

    /// Number of elements pushed so far, sealed or not.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, value: T) {
        self.pending.push(value);
        self.len += 1;
        if self.pending.len() == self.chunk_len {
            self.seal();
        }
    }

    /// Moves the pending elements into a single arena allocation.
    fn seal(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let chunk: &'arena [T] = self.arena.alloc_slice_fill_iter(self.pending.drain(..));
        tracing::trace!(index = self.chunks.len(), len = chunk.len(), "sealed chunk");
        self.chunks.push(chunk);
    }

    /// Seals the last, possibly partial, chunk and returns the list.
    pub fn finish(mut self) -> ChunkList<'arena, T> {
        self.seal();
        ChunkList {
            chunks: self.chunks,
            chunk_len: self.chunk_len,
            len: self.len,
        }
    }
}

impl<T> Extend<T> for ChunkListBuilder<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// A finished, read-only chunk list.
///
/// Every chunk holds exactly `chunk_len` elements except the last, which holds
/// between one and `chunk_len`. An empty list has no chunks.
pub struct ChunkList<'arena, T> {
    chunks: Vec<&'arena [T]>,
    chunk_len: usize,
    len: usize,
}

impl<'arena, T> ChunkList<'arena, T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// The sealed chunks, in order.
    pub fn chunks(&self) -> &[&'arena [T]] {
        &self.chunks
    }

    pub fn get(&self, index: usize) -> Option<&'arena T> {
        let chunk = self.chunks.get(index / self.chunk_len)?;
        chunk.get(index % self.chunk_len)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'arena T> {
        self.chunks.iter().flat_map(|chunk| chunk.iter())
    }
}

impl<T> Clone for ChunkList<'_, T> {
    fn clone(&self) -> Self {
        ChunkList {
            chunks: self.chunks.clone(),
            chunk_len: self.chunk_len,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunkList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Sequence for ChunkList<'_, T> {
    type Element = T;
    type Cursor<'s>
        = RunsCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> RunsCursor<'_, T> {
        RunsCursor::new(self.chunks.as_slice())
    }

    fn underestimated_count(&self) -> usize {
        self.len
    }
}
