//! Inclusive index intervals
//!
//! Span = interval [left, right] ⊆ [0, n - 1]
//! Children computed via midpoint: m = ⌊(left + right) / 2⌋
//!   Left child: [left, m]
//!   Right child: [m+1, right]

use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::SegmentTreeError;

/// Inclusive interval of sequence indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Left index (inclusive)
    pub left: usize,

    /// Right index (inclusive)
    pub right: usize,
}

impl Span {
    /// Create span `[left, right]`
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "span [{left}, {right}] is inverted");
        Self { left, right }
    }

    /// Span covering a whole sequence of `len` elements
    pub fn full(len: usize) -> Self {
        debug_assert!(len > 0, "empty sequence has no span");
        Self::new(0, len - 1)
    }

    /// Resolve caller-supplied range bounds against a sequence of `len`
    /// elements.
    ///
    /// Bounds are first normalised to a half-open `start..end` pair, so the
    /// error variants report the range in that form.
    pub fn resolve<R>(range: &R, len: usize) -> Result<Self, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => Some(len),
        };

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            (start, end) => {
                return Err(SegmentTreeError::OutOfRange {
                    start: start.unwrap_or(usize::MAX),
                    end: end.unwrap_or(usize::MAX),
                    len,
                })
            }
        };

        if start >= end {
            return Err(SegmentTreeError::EmptyRange { start, end });
        }
        if end > len {
            return Err(SegmentTreeError::OutOfRange { start, end, len });
        }

        Ok(Self::new(start, end - 1))
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right
    }

    /// Interval length
    #[inline]
    pub fn length(&self) -> usize {
        self.right - self.left + 1
    }

    /// Midpoint for the split
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    /// Children via midpoint split: `([left, mid], [mid+1, right])`
    pub fn children(&self) -> (Span, Span) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        (
            Span {
                left: self.left,
                right: mid,
            },
            Span {
                left: mid + 1,
                right: self.right,
            },
        )
    }

    /// Whether `other` lies entirely inside this span
    #[inline]
    pub fn contains(&self, other: &Span) -> bool {
        self.left <= other.left && other.right <= self.right
    }

    /// Whether the two spans share no index
    #[inline]
    pub fn is_disjoint(&self, other: &Span) -> bool {
        self.right < other.left || other.right < self.left
    }

    /// Number of splits from this span down to its deepest leaf
    pub fn depth_to_leaf(&self) -> usize {
        // The left child is never shorter than the right one, so following
        // it finds the deepest path.
        let mut span = *self;
        let mut depth = 0;

        while !span.is_leaf() {
            let (left_child, _) = span.children();
            span = left_child;
            depth += 1;
        }

        depth
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "[{}]", self.left)
        } else {
            write!(f, "[{}, {}]", self.left, self.right)
        }
    }
}
