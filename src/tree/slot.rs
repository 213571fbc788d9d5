//! Implicit slot addressing
//!
//! A slot is a position in the flat node array together with the span it
//! covers. Nothing about the tree shape is stored: children are found by
//! index arithmetic (2i+1, 2i+2) and span midpoint splits.

use super::Span;

/// Position of a tree node in flat storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Index into the node array
    pub index: usize,

    /// Sequence indices covered by this slot
    pub span: Span,

    /// Distance from the root (root = 0)
    pub depth: usize,
}

/// Relation between a slot's span and an operation's target span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Slot span lies inside the target
    Complete,

    /// Slot span shares some indices with the target
    Partial,

    /// No shared index
    Disjoint,
}

impl Slot {
    /// Root slot covering the whole sequence
    pub fn root(len: usize) -> Self {
        Self {
            index: 0,
            span: Span::full(len),
            depth: 0,
        }
    }

    /// Check if this slot holds a single element
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.span.is_leaf()
    }

    /// Left and right child slots
    pub fn children(&self) -> (Slot, Slot) {
        let (left_span, right_span) = self.span.children();
        (
            Slot {
                index: 2 * self.index + 1,
                span: left_span,
                depth: self.depth + 1,
            },
            Slot {
                index: 2 * self.index + 2,
                span: right_span,
                depth: self.depth + 1,
            },
        )
    }

    /// Classify this slot against a target span
    pub fn overlap(&self, target: &Span) -> Overlap {
        if target.contains(&self.span) {
            Overlap::Complete
        } else if target.is_disjoint(&self.span) {
            Overlap::Disjoint
        } else {
            Overlap::Partial
        }
    }
}
