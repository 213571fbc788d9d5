//! Naive O(n)-per-operation reference used to cross-check the tree

#![allow(dead_code)]

use std::marker::PhantomData;
use std::ops::RangeInclusive;

use lazy_segment_tree::{Node, Update};

/// Plain vector that applies updates element by element and folds queries
pub struct NaiveSequence<N: Node, U> {
    elements: Vec<N::Element>,
    _update: PhantomData<U>,
}

impl<N: Node, U: Update<N>> NaiveSequence<N, U> {
    pub fn new(elements: Vec<N::Element>) -> Self {
        Self {
            elements,
            _update: PhantomData,
        }
    }

    pub fn update(&mut self, range: RangeInclusive<usize>, update: &U) {
        for element in &mut self.elements[range] {
            update.leaf_update(element);
        }
    }

    pub fn query(&self, range: RangeInclusive<usize>) -> N {
        fold::<N>(&self.elements[range])
    }

    pub fn elements(&self) -> &[N::Element] {
        &self.elements
    }
}

/// Left-to-right merge of every element's summary
pub fn fold<N: Node>(elements: &[N::Element]) -> N {
    elements
        .iter()
        .fold(N::identity(), |acc, element| N::merge(&acc, &N::from_element(element)))
}

/// Small deterministic generator for scripted workloads
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Uniform-ish value in `0..bound`
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Ordered pair of indices in `0..len`
    pub fn range(&mut self, len: usize) -> RangeInclusive<usize> {
        let a = self.below(len);
        let b = self.below(len);
        a.min(b)..=a.max(b)
    }
}
