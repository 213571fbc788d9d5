//! Implicit binary tree over a sequence
//!
//! No pointers are stored. A slot's children and covered interval are
//! computed on demand from its index and its parent's span, so storage is
//! a single flat array sized up front.

mod slot;
mod span;

pub use slot::{Overlap, Slot};
pub use span::Span;

/// How many node slots to allocate for `n` leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageLayout {
    /// Classic `4n` upper bound
    #[default]
    Quadruple,

    /// Exact bound `2 * next_power_of_two(n)`
    PowerOfTwo,
}

impl StorageLayout {
    /// Number of slots needed for `len` leaves, or `None` on overflow
    pub fn slot_count(&self, len: usize) -> Option<usize> {
        match self {
            StorageLayout::Quadruple => len.checked_mul(4),
            StorageLayout::PowerOfTwo => len.checked_next_power_of_two()?.checked_mul(2),
        }
    }
}

/// Shape of the tree for a fixed sequence length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLayout {
    /// Number of leaves
    len: usize,

    /// Allocated slots
    slots: usize,

    /// Sizing strategy used
    storage: StorageLayout,
}

impl TreeLayout {
    /// Compute layout for `len` leaves; `None` if the slot count overflows
    pub fn new(len: usize, storage: StorageLayout) -> Option<Self> {
        debug_assert!(len > 0, "layout needs at least one leaf");
        let slots = storage.slot_count(len)?;
        Some(Self {
            len,
            slots,
            storage,
        })
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a layout has at least one leaf
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slot count
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// Sizing strategy
    pub fn storage(&self) -> StorageLayout {
        self.storage
    }

    /// Root slot
    pub fn root(&self) -> Slot {
        Slot::root(self.len)
    }

    /// Tree height: ⌈log2 n⌉
    pub fn height(&self) -> usize {
        self.root().span.depth_to_leaf()
    }
}
