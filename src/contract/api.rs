use crate::tree::Span;

/// Aggregate summary over a contiguous range of the sequence.
///
/// Implementations must make [`Node::merge`] associative with
/// [`Node::identity`] as its neutral element. The engine relies on this for
/// arbitrary split points and for answering disjoint sub-queries with the
/// identity; violations are not detected at runtime.
pub trait Node: Clone {
    /// Element type of the backing sequence.
    type Element;

    /// Neutral element for `merge` (0 for sums, `+∞` for minimums, ...).
    fn identity() -> Self;

    /// Summary of a single-element range.
    fn from_element(element: &Self::Element) -> Self;

    /// Combine the summaries of two adjacent ranges, left then right.
    fn merge(left: &Self, right: &Self) -> Self;
}

/// Pending modification of a range, applicable to summaries of type `N`.
///
/// Obligations on implementations (unchecked):
///
/// * `apply` distributes over merge: applying to a span and merging its
///   halves equals applying to each half and merging.
/// * `combine(incoming)` leaves `self` equivalent to "apply `self`, then
///   `incoming`".
/// * `identity` is a no-op for `apply`, `combine` and `leaf_update`.
pub trait Update<N: Node>: Clone {
    /// Raw value accepted by [`crate::LazySegmentTree::update`].
    type Value;

    /// The no-op update.
    fn identity() -> Self;

    /// Update carrying `value`.
    fn from_value(value: Self::Value) -> Self;

    /// Reflect this update, spread over every index of `span`, in `node`.
    fn apply(&self, span: Span, node: &mut N);

    /// Fold `incoming` into this pending update (this one first).
    fn combine(&mut self, span: Span, incoming: &Self);

    /// Apply this update to one element of the backing sequence.
    fn leaf_update(&self, element: &mut N::Element);
}
