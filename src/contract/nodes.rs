use super::Node;

/// Range sum over `i64`, wrapping on overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SumNode {
    /// Sum of the covered elements
    pub sum: i64,
}

impl Node for SumNode {
    type Element = i64;

    fn identity() -> Self {
        Self { sum: 0 }
    }

    fn from_element(element: &i64) -> Self {
        Self { sum: *element }
    }

    fn merge(left: &Self, right: &Self) -> Self {
        Self {
            sum: left.sum.wrapping_add(right.sum),
        }
    }
}

/// Range minimum over `i64`; identity is `i64::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinNode {
    /// Smallest covered element
    pub min: i64,
}

impl Node for MinNode {
    type Element = i64;

    fn identity() -> Self {
        Self { min: i64::MAX }
    }

    fn from_element(element: &i64) -> Self {
        Self { min: *element }
    }

    fn merge(left: &Self, right: &Self) -> Self {
        Self {
            min: left.min.min(right.min),
        }
    }
}

/// Range maximum over `i64`; identity is `i64::MIN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxNode {
    /// Largest covered element
    pub max: i64,
}

impl Node for MaxNode {
    type Element = i64;

    fn identity() -> Self {
        Self { max: i64::MIN }
    }

    fn from_element(element: &i64) -> Self {
        Self { max: *element }
    }

    fn merge(left: &Self, right: &Self) -> Self {
        Self {
            max: left.max.max(right.max),
        }
    }
}
