//! Pending-update bookkeeping
//!
//! One flag bit per slot plus one pending update per slot. A set flag means
//! the slot's node already reflects its pending update but the children do
//! not.

use std::marker::PhantomData;
use std::mem;

use bitvec::prelude::*;

use crate::contract::{Node, Update};
use crate::tree::Span;

/// Per-slot lazy state
#[derive(Debug)]
pub struct LazyState<N, U> {
    /// 1 bit per slot: update pending
    flags: BitVec,

    /// Composed pending update per slot (identity when not flagged)
    pending: Vec<U>,

    _node: PhantomData<fn() -> N>,
}

impl<N: Node, U: Update<N>> LazyState<N, U> {
    /// Fresh state with nothing pending
    pub fn new(slots: usize) -> Self {
        Self {
            flags: bitvec![0; slots],
            pending: (0..slots).map(|_| U::identity()).collect(),
            _node: PhantomData,
        }
    }

    /// Check if `slot` has an outstanding update
    #[inline]
    pub fn is_pending(&self, slot: usize) -> bool {
        self.flags[slot]
    }

    /// Fold `update` into the pending update at `slot` and flag it
    pub fn defer(&mut self, slot: usize, span: Span, update: &U) {
        self.flags.set(slot, true);
        self.pending[slot].combine(span, update);
    }

    /// Clear `slot` and hand back its pending update, if any
    pub fn take(&mut self, slot: usize) -> Option<U> {
        if !self.is_pending(slot) {
            return None;
        }
        self.flags.set(slot, false);
        Some(mem::replace(&mut self.pending[slot], U::identity()))
    }

    /// Number of flagged slots
    pub fn pending_count(&self) -> usize {
        self.flags.count_ones()
    }
}
