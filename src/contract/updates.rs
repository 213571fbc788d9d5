use super::{MaxNode, MinNode, SumNode, Update};
use crate::tree::Span;

/// Range assignment: every covered element becomes the carried value.
///
/// Composition is "latest wins". The identity carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Assign {
    value: Option<i64>,
}

impl Assign {
    /// Assignment of `value`
    pub fn new(value: i64) -> Self {
        Self { value: Some(value) }
    }

    /// Assigned value, `None` for the identity
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    fn overwrite(&mut self, incoming: &Self) {
        if incoming.value.is_some() {
            self.value = incoming.value;
        }
    }

    fn write(&self, element: &mut i64) {
        if let Some(value) = self.value {
            *element = value;
        }
    }
}

impl Update<SumNode> for Assign {
    type Value = i64;

    fn identity() -> Self {
        Self::default()
    }

    fn from_value(value: i64) -> Self {
        Self::new(value)
    }

    fn apply(&self, span: Span, node: &mut SumNode) {
        if let Some(value) = self.value {
            node.sum = value.wrapping_mul(span.length() as i64);
        }
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        self.overwrite(incoming);
    }

    fn leaf_update(&self, element: &mut i64) {
        self.write(element);
    }
}

impl Update<MinNode> for Assign {
    type Value = i64;

    fn identity() -> Self {
        Self::default()
    }

    fn from_value(value: i64) -> Self {
        Self::new(value)
    }

    fn apply(&self, _span: Span, node: &mut MinNode) {
        if let Some(value) = self.value {
            node.min = value;
        }
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        self.overwrite(incoming);
    }

    fn leaf_update(&self, element: &mut i64) {
        self.write(element);
    }
}

impl Update<MaxNode> for Assign {
    type Value = i64;

    fn identity() -> Self {
        Self::default()
    }

    fn from_value(value: i64) -> Self {
        Self::new(value)
    }

    fn apply(&self, _span: Span, node: &mut MaxNode) {
        if let Some(value) = self.value {
            node.max = value;
        }
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        self.overwrite(incoming);
    }

    fn leaf_update(&self, element: &mut i64) {
        self.write(element);
    }
}

/// Range addition of a constant.
///
/// Sums wrap on overflow; minimum and maximum summaries saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Add {
    /// Amount added to every covered element
    pub delta: i64,
}

impl Add {
    /// Addition of `delta`
    pub fn new(delta: i64) -> Self {
        Self { delta }
    }
}

impl Update<SumNode> for Add {
    type Value = i64;

    fn identity() -> Self {
        Self::default()
    }

    fn from_value(delta: i64) -> Self {
        Self::new(delta)
    }

    fn apply(&self, span: Span, node: &mut SumNode) {
        let spread = self.delta.wrapping_mul(span.length() as i64);
        node.sum = node.sum.wrapping_add(spread);
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        self.delta = self.delta.wrapping_add(incoming.delta);
    }

    fn leaf_update(&self, element: &mut i64) {
        *element = element.wrapping_add(self.delta);
    }
}

impl Update<MinNode> for Add {
    type Value = i64;

    fn identity() -> Self {
        Self::default()
    }

    fn from_value(delta: i64) -> Self {
        Self::new(delta)
    }

    fn apply(&self, _span: Span, node: &mut MinNode) {
        node.min = node.min.saturating_add(self.delta);
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        self.delta = self.delta.saturating_add(incoming.delta);
    }

    fn leaf_update(&self, element: &mut i64) {
        *element = element.saturating_add(self.delta);
    }
}

impl Update<MaxNode> for Add {
    type Value = i64;

    fn identity() -> Self {
        Self::default()
    }

    fn from_value(delta: i64) -> Self {
        Self::new(delta)
    }

    fn apply(&self, _span: Span, node: &mut MaxNode) {
        node.max = node.max.saturating_add(self.delta);
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        self.delta = self.delta.saturating_add(incoming.delta);
    }

    fn leaf_update(&self, element: &mut i64) {
        *element = element.saturating_add(self.delta);
    }
}

/// Range affine map `x ↦ mul·x + add`, wrapping on overflow.
///
/// Composition applies the incoming map after the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    /// Multiplier
    pub mul: i64,
    /// Offset
    pub add: i64,
}

impl Affine {
    /// Map `x ↦ mul·x + add`
    pub fn new(mul: i64, add: i64) -> Self {
        Self { mul, add }
    }

    /// Map `x ↦ factor·x`
    pub fn scale(factor: i64) -> Self {
        Self::new(factor, 0)
    }

    /// Map `x ↦ x + offset`
    pub fn shift(offset: i64) -> Self {
        Self::new(1, offset)
    }

    /// Evaluate the map at `x`
    pub fn eval(&self, x: i64) -> i64 {
        self.mul.wrapping_mul(x).wrapping_add(self.add)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl Update<SumNode> for Affine {
    type Value = (i64, i64);

    fn identity() -> Self {
        Self::default()
    }

    fn from_value((mul, add): (i64, i64)) -> Self {
        Self::new(mul, add)
    }

    fn apply(&self, span: Span, node: &mut SumNode) {
        let offset = self.add.wrapping_mul(span.length() as i64);
        node.sum = self.mul.wrapping_mul(node.sum).wrapping_add(offset);
    }

    fn combine(&mut self, _span: Span, incoming: &Self) {
        // incoming ∘ self
        *self = Self {
            mul: incoming.mul.wrapping_mul(self.mul),
            add: incoming.eval(self.add),
        };
    }

    fn leaf_update(&self, element: &mut i64) {
        *element = self.eval(*element);
    }
}
