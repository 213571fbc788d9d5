//! # Generic Lazy Segment Tree
//!
//! Range update and range query in O(log n) over any associative aggregate,
//! with the aggregate and the update semantics supplied by the caller.
//!
//! ## Core Algorithm
//!
//! 1. **Implicit tree**: slot `i` covers `[l, r]`; its children live at
//!    `2i+1` / `2i+2` and cover `[l, m]` / `[m+1, r]` with `m = ⌊(l+r)/2⌋`
//! 2. **Build**: leaves from elements, internal slots by merging children
//! 3. **Lazy propagation**: an update covering a whole slot is applied to
//!    that slot's summary and recorded as pending; it is pushed one level
//!    down only when the children are next visited
//! 4. **Decomposition**: any range splits into O(log n) whole slots
//!
//! ## Usage Example
//!
//! ```
//! use lazy_segment_tree::LazySegmentTree;
//! use lazy_segment_tree::contract::{Assign, SumNode};
//!
//! let mut tree = LazySegmentTree::<SumNode, Assign>::new(vec![1, 2, 3, 4, 5])?;
//! assert_eq!(tree.query(0..=4)?.sum, 15);
//!
//! tree.update(1..=3, 10)?;
//! assert_eq!(tree.query(1..=3)?.sum, 30);
//! assert_eq!(tree.query(..)?.sum, 36);
//! # Ok::<(), lazy_segment_tree::SegmentTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod contract; // Node / Update capability contracts
pub mod engine;   // Lazy segment tree engine
pub mod stats;    // Operation accounting
pub mod tree;     // Implicit tree addressing

// Re-exports for convenience
pub use contract::{Node, Update};
pub use engine::LazySegmentTree;
pub use stats::OperationStats;
pub use tree::{Span, StorageLayout};

use thiserror::Error;

/// Configuration parameters for a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Node storage sizing strategy
    pub layout: StorageLayout,

    /// Largest accepted sequence length
    pub max_len: usize,

    /// Enable operation statistics
    pub profile: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            layout: StorageLayout::default(),
            max_len: usize::MAX / 4,
            profile: false,
        }
    }
}

impl TreeConfig {
    /// Set storage layout.
    pub fn with_layout(mut self, layout: StorageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Cap the accepted sequence length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Enable operation statistics.
    pub fn with_profiling(mut self, enabled: bool) -> Self {
        self.profile = enabled;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), SegmentTreeError> {
        if self.max_len == 0 {
            return Err(SegmentTreeError::InvalidConfiguration(
                "max_len must be > 0".to_string(),
            ));
        }
        if self.layout.slot_count(self.max_len).is_none() {
            return Err(SegmentTreeError::InvalidConfiguration(format!(
                "max_len {} overflows {:?} slot count",
                self.max_len, self.layout
            )));
        }
        Ok(())
    }
}

/// Broad classification of [`SegmentTreeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tree could not be built from the supplied sequence
    InvalidConstruction,

    /// A range does not satisfy `0 ≤ l ≤ r ≤ n − 1`
    OutOfRange,

    /// The supplied [`TreeConfig`] was rejected
    InvalidConfiguration,
}

/// Errors reported by tree construction and range operations
///
/// Every check runs before any mutation, so a failed call leaves the tree
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentTreeError {
    /// Sequence cannot back a tree (empty, or longer than `max_len`)
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    /// Range resolves to no indices (`l > r`)
    #[error("range {start}..{end} is empty")]
    EmptyRange {
        /// First index (inclusive)
        start: usize,
        /// End index (exclusive)
        end: usize,
    },

    /// Range reaches past the end of the sequence
    #[error("range {start}..{end} out of bounds for length {len}")]
    OutOfRange {
        /// First index (inclusive)
        start: usize,
        /// End index (exclusive)
        end: usize,
        /// Sequence length
        len: usize,
    },

    /// Configuration rejected
    #[error("invalid tree configuration: {0}")]
    InvalidConfiguration(String),
}

impl SegmentTreeError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SegmentTreeError::InvalidConstruction(_) => ErrorKind::InvalidConstruction,
            SegmentTreeError::EmptyRange { .. } | SegmentTreeError::OutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            SegmentTreeError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
        }
    }
}
