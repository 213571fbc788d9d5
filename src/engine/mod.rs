//! Lazy segment tree engine
//!
//! Owns the node array, the backing sequence and the lazy state, and runs
//! the recursive algorithms over them:
//! - build: children first, leaves from elements, parents by merge
//! - pushdown: move one level of pending update to the children
//! - apply: the only primitive that changes a node value
//! - update / query: three-way overlap recursion from the root
//!
//! Recursion depth is ⌈log2 n⌉ + 1.

mod lazy;

use std::fmt;
use std::ops::RangeBounds;

use tracing::{debug, trace_span};

use crate::{
    contract::{Node, Update},
    stats::{OperationStats, StatsTracker},
    tree::{Overlap, Slot, Span, TreeLayout},
    SegmentTreeError, TreeConfig,
};
use lazy::LazyState;

/// Range-update / range-query engine over a fixed-length sequence.
///
/// `N` describes range summaries and `U` pending modifications; see
/// [`Node`] and [`Update`] for the laws they must obey.
pub struct LazySegmentTree<N: Node, U: Update<N>> {
    config: TreeConfig,
    layout: TreeLayout,
    /// Backing sequence; leaves are kept in sync through `leaf_update`
    sequence: Vec<N::Element>,
    nodes: Vec<N>,
    lazy: LazyState<N, U>,
    tracker: StatsTracker,
}

impl<N: Node, U: Update<N>> LazySegmentTree<N, U> {
    /// Build a tree over `sequence` with the default configuration.
    ///
    /// Fails with [`SegmentTreeError::InvalidConstruction`] if the sequence
    /// is empty.
    pub fn new(sequence: Vec<N::Element>) -> Result<Self, SegmentTreeError> {
        Self::with_config(sequence, TreeConfig::default())
    }

    /// Build a tree over a copy of `elements`.
    pub fn from_slice(elements: &[N::Element]) -> Result<Self, SegmentTreeError>
    where
        N::Element: Clone,
    {
        Self::new(elements.to_vec())
    }

    /// Build a tree over `sequence` with an explicit configuration.
    pub fn with_config(
        sequence: Vec<N::Element>,
        config: TreeConfig,
    ) -> Result<Self, SegmentTreeError> {
        config.validate()?;

        let len = sequence.len();
        let rejected = |reason: String| {
            let err = SegmentTreeError::InvalidConstruction(reason);
            debug!(%err, "rejected construction");
            err
        };

        if len == 0 {
            return Err(rejected(
                "sequence must contain at least one element".to_string(),
            ));
        }
        if len > config.max_len {
            return Err(rejected(format!(
                "sequence length {} exceeds max_len {}",
                len, config.max_len
            )));
        }

        let layout = TreeLayout::new(len, config.layout).ok_or_else(|| {
            rejected(format!("slot count for length {} overflows", len))
        })?;
        let slots = layout.slot_count();

        let mut tree = Self {
            nodes: (0..slots).map(|_| N::identity()).collect(),
            lazy: LazyState::new(slots),
            tracker: StatsTracker::new(config.profile),
            sequence,
            layout,
            config,
        };
        tree.build(layout.root());

        debug!(
            len,
            slots,
            layout = ?tree.config.layout,
            height = layout.height(),
            "built lazy segment tree"
        );
        Ok(tree)
    }

    /// Number of elements in the sequence
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Configuration the tree was built with
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Shape of the node storage
    pub fn layout(&self) -> TreeLayout {
        self.layout
    }

    /// Number of slots holding an update not yet pushed to their children
    pub fn pending_updates(&self) -> usize {
        self.lazy.pending_count()
    }

    /// Operation counters, if profiling was enabled
    pub fn stats(&self) -> Option<&OperationStats> {
        self.tracker.stats()
    }

    /// Zero the operation counters
    pub fn reset_stats(&mut self) {
        self.tracker.reset();
    }

    /// Apply `U::from_value(value)` to every index in `range`.
    ///
    /// The range is validated before anything is touched; on error the tree
    /// is unchanged.
    pub fn update<R>(&mut self, range: R, value: U::Value) -> Result<(), SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        self.apply_update(range, U::from_value(value))
    }

    /// Apply a prebuilt update to every index in `range`.
    pub fn apply_update<R>(&mut self, range: R, update: U) -> Result<(), SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        let target = self.resolve(&range)?;
        let _span = trace_span!("update", %target).entered();

        self.tracker.record_update();
        self.update_slot(self.layout.root(), &target, &update);
        Ok(())
    }

    /// Aggregate over every index in `range`.
    ///
    /// Only lazy bookkeeping changes; every later query sees the same
    /// values.
    pub fn query<R>(&mut self, range: R) -> Result<N, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        let target = self.resolve(&range)?;
        let _span = trace_span!("query", %target).entered();

        self.tracker.record_query();
        Ok(self.query_slot(self.layout.root(), &target))
    }

    /// Aggregate over the whole sequence
    pub fn query_all(&mut self) -> N {
        let root = self.layout.root();
        self.tracker.record_query();
        self.query_slot(root, &root.span)
    }

    /// Summary of the single element at `index`
    pub fn get(&mut self, index: usize) -> Result<N, SegmentTreeError> {
        self.query(index..=index)
    }

    /// Push every pending update down to the leaves and borrow the
    /// now up-to-date backing sequence.
    pub fn materialize(&mut self) -> &[N::Element] {
        if self.lazy.pending_count() > 0 {
            self.flush(self.layout.root());
        }
        &self.sequence
    }

    /// Materialize and return the backing sequence
    pub fn into_sequence(mut self) -> Vec<N::Element> {
        self.materialize();
        self.sequence
    }

    fn resolve<R>(&self, range: &R) -> Result<Span, SegmentTreeError>
    where
        R: RangeBounds<usize>,
    {
        Span::resolve(range, self.len()).map_err(|err| {
            debug!(%err, "rejected range");
            err
        })
    }

    fn build(&mut self, slot: Slot) {
        if slot.is_leaf() {
            self.nodes[slot.index] = N::from_element(&self.sequence[slot.span.left]);
            return;
        }

        let (left, right) = slot.children();
        self.build(left);
        self.build(right);
        self.pull(slot);
    }

    /// Recompute a parent from its children
    fn pull(&mut self, slot: Slot) {
        let (left, right) = slot.children();
        self.nodes[slot.index] = N::merge(&self.nodes[left.index], &self.nodes[right.index]);
    }

    fn pushdown(&mut self, slot: Slot) {
        // Leaves are never flagged, so `take` returning Some implies children.
        if let Some(pending) = self.lazy.take(slot.index) {
            self.tracker.record_pushdown();
            let (left, right) = slot.children();
            self.apply(left, &pending);
            self.apply(right, &pending);
        }
    }

    fn apply(&mut self, slot: Slot, update: &U) {
        self.tracker.record_apply();

        if !slot.is_leaf() {
            self.lazy.defer(slot.index, slot.span, update);
        }
        update.apply(slot.span, &mut self.nodes[slot.index]);
        if slot.is_leaf() {
            update.leaf_update(&mut self.sequence[slot.span.left]);
        }
    }

    fn update_slot(&mut self, slot: Slot, target: &Span, update: &U) {
        self.tracker.record_visit(slot.depth);

        match slot.overlap(target) {
            Overlap::Complete => self.apply(slot, update),
            Overlap::Disjoint => {}
            Overlap::Partial => {
                self.pushdown(slot);
                let (left, right) = slot.children();
                self.update_slot(left, target, update);
                self.update_slot(right, target, update);
                self.pull(slot);
            }
        }
    }

    fn query_slot(&mut self, slot: Slot, target: &Span) -> N {
        self.tracker.record_visit(slot.depth);

        match slot.overlap(target) {
            Overlap::Complete => {
                self.pushdown(slot);
                self.nodes[slot.index].clone()
            }
            Overlap::Disjoint => N::identity(),
            Overlap::Partial => {
                self.pushdown(slot);
                let (left, right) = slot.children();
                let left_summary = self.query_slot(left, target);
                let right_summary = self.query_slot(right, target);
                N::merge(&left_summary, &right_summary)
            }
        }
    }

    fn flush(&mut self, slot: Slot) {
        if slot.is_leaf() {
            return;
        }
        self.pushdown(slot);
        let (left, right) = slot.children();
        self.flush(left);
        self.flush(right);
    }
}

impl<N: Node, U: Update<N>> fmt::Debug for LazySegmentTree<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySegmentTree")
            .field("len", &self.len())
            .field("layout", &self.layout)
            .field("pending_updates", &self.pending_updates())
            .field("stats", &self.tracker.stats())
            .finish_non_exhaustive()
    }
}
