//! Traversal configuration.
//!
//! Options follow the usual split: [`TraversalOptions`] holds complete settings
//! with sensible defaults, and [`TraversalOptionsOverride`] carries only the
//! fields a caller wants to change.
//!
//! ```
//! use spanwalk_core::{TraversalOptions, TraversalOptionsOverride, algo};
//!
//! let options = TraversalOptions::default().override_with(&TraversalOptionsOverride {
//!     max_view_len: Some(2),
//! });
//!
//! let mut lens = Vec::new();
//! algo::traverse(&[1, 2, 3], options, |view| lens.push(view.len()));
//! assert_eq!(lens, [2, 1]);
//! ```

use crate::cursor::UNBOUNDED;

/// Settings for a view-level traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Largest view requested from the cursor. Must be positive.
    pub max_view_len: usize,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        TraversalOptions {
            max_view_len: UNBOUNDED,
        }
    }
}

impl TraversalOptions {
    /// Returns these options with every field set in `options_override` replaced.
    pub fn override_with(&self, options_override: &TraversalOptionsOverride) -> Self {
        TraversalOptions {
            max_view_len: options_override.max_view_len.unwrap_or(self.max_view_len),
        }
    }
}

/// Partial [`TraversalOptions`]; `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptionsOverride {
    pub max_view_len: Option<usize>,
}
