//! Property tests: the tree agrees with a naive reference for every sample
//! contract pair

use std::fmt::Debug;
use std::ops::RangeInclusive;

use lazy_segment_tree::contract::{Add, Affine, Assign, MaxNode, MinNode, SumNode};
use lazy_segment_tree::{LazySegmentTree, Node, Span, Update};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

mod common;
use common::{fold, NaiveSequence};

#[derive(Debug, Clone)]
enum Op<V> {
    Update(usize, usize, V),
    Query(usize, usize),
}

fn op_strategy<V, S>(len: usize, value: S) -> impl Strategy<Value = Op<V>>
where
    V: Clone + Debug + 'static,
    S: Strategy<Value = V> + 'static,
{
    let update = (0..len, 0..len, value).prop_map(|(a, b, v)| Op::Update(a.min(b), a.max(b), v));
    let query = (0..len, 0..len).prop_map(|(a, b)| Op::Query(a.min(b), a.max(b)));
    prop_oneof![update, query]
}

fn workload<V, S>(value: S) -> impl Strategy<Value = (Vec<i64>, Vec<Op<V>>)>
where
    V: Clone + Debug + 'static,
    S: Strategy<Value = V> + Clone + 'static,
{
    (1usize..48).prop_flat_map(move |len| {
        (
            vec(-20i64..20, len),
            vec(op_strategy(len, value.clone()), 0..40),
        )
    })
}

fn check_against_naive<N, U>(
    elements: Vec<i64>,
    ops: Vec<Op<U::Value>>,
) -> Result<(), TestCaseError>
where
    N: Node<Element = i64> + PartialEq + Debug,
    U: Update<N>,
{
    let len = elements.len();
    let mut tree = LazySegmentTree::<N, U>::new(elements.clone()).expect("non-empty sequence");
    let mut naive = NaiveSequence::<N, U>::new(elements);

    for op in ops {
        match op {
            Op::Update(l, r, value) => {
                let update = U::from_value(value);
                naive.update(l..=r, &update);
                tree.apply_update(l..=r, update).expect("range in bounds");
            }
            Op::Query(l, r) => {
                prop_assert_eq!(tree.query(l..=r).expect("range in bounds"), naive.query(l..=r));
            }
        }
    }

    prop_assert_eq!(tree.query_all(), naive.query(0..=len - 1));
    prop_assert_eq!(tree.materialize(), naive.elements());
    Ok(())
}

fn composition_case() -> impl Strategy<Value = (Vec<i64>, RangeInclusive<usize>)> {
    (1usize..64).prop_flat_map(|len| {
        (vec(-20i64..20, len), 0..len, 0..len)
            .prop_map(|(elements, a, b)| (elements, a.min(b)..=a.max(b)))
    })
}

/// Applying `first` then `second` over `range` must leave the same tree as
/// applying their `combine` once.
fn check_composition<N, U>(
    elements: Vec<i64>,
    range: RangeInclusive<usize>,
    first: U::Value,
    second: U::Value,
) -> Result<(), TestCaseError>
where
    N: Node<Element = i64> + PartialEq + Debug,
    U: Update<N>,
{
    let len = elements.len();
    let (first, second) = (U::from_value(first), U::from_value(second));

    let mut stepwise = LazySegmentTree::<N, U>::new(elements.clone()).expect("non-empty sequence");
    stepwise.apply_update(range.clone(), first.clone()).expect("range in bounds");
    stepwise.apply_update(range.clone(), second.clone()).expect("range in bounds");

    let mut composed = first;
    composed.combine(Span::full(len), &second);
    let mut once = LazySegmentTree::<N, U>::new(elements).expect("non-empty sequence");
    once.apply_update(range, composed).expect("range in bounds");

    prop_assert_eq!(stepwise.query_all(), once.query_all());
    prop_assert_eq!(stepwise.into_sequence(), once.into_sequence());
    Ok(())
}

proptest! {
    #[test]
    fn sum_assign_matches_naive((elements, ops) in workload(-50i64..50)) {
        check_against_naive::<SumNode, Assign>(elements, ops)?;
    }

    #[test]
    fn sum_add_matches_naive((elements, ops) in workload(-50i64..50)) {
        check_against_naive::<SumNode, Add>(elements, ops)?;
    }

    #[test]
    fn sum_affine_matches_naive((elements, ops) in workload((-2i64..=2, -5i64..=5))) {
        check_against_naive::<SumNode, Affine>(elements, ops)?;
    }

    #[test]
    fn min_add_matches_naive((elements, ops) in workload(-50i64..50)) {
        check_against_naive::<MinNode, Add>(elements, ops)?;
    }

    #[test]
    fn min_assign_matches_naive((elements, ops) in workload(-50i64..50)) {
        check_against_naive::<MinNode, Assign>(elements, ops)?;
    }

    #[test]
    fn max_add_matches_naive((elements, ops) in workload(-50i64..50)) {
        check_against_naive::<MaxNode, Add>(elements, ops)?;
    }

    #[test]
    fn max_assign_matches_naive((elements, ops) in workload(-50i64..50)) {
        check_against_naive::<MaxNode, Assign>(elements, ops)?;
    }

    #[test]
    fn build_matches_fold(elements in vec(-1000i64..1000, 1..128)) {
        let expected_sum = fold::<SumNode>(&elements);
        let expected_min = fold::<MinNode>(&elements);

        let mut sums = LazySegmentTree::<SumNode, Add>::from_slice(&elements).unwrap();
        let mut mins = LazySegmentTree::<MinNode, Add>::from_slice(&elements).unwrap();

        prop_assert_eq!(sums.query(..).unwrap(), expected_sum);
        prop_assert_eq!(mins.query(..).unwrap(), expected_min);
    }

    #[test]
    fn repeated_query_is_idempotent(
        (elements, ops) in workload(-50i64..50),
        picks in vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..10),
    ) {
        let len = elements.len();
        let mut tree = LazySegmentTree::<SumNode, Add>::new(elements).unwrap();
        for op in ops {
            if let Op::Update(l, r, v) = op {
                tree.update(l..=r, v).unwrap();
            }
        }

        for (a, b) in picks {
            let (a, b) = (a.index(len), b.index(len));
            let range = a.min(b)..=a.max(b);
            let first = tree.query(range.clone()).unwrap();
            let second = tree.query(range).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn update_does_not_leak_outside_its_range(
        elements in vec(-20i64..20, 2..64),
        split in any::<prop::sample::Index>(),
        value in -50i64..50,
    ) {
        let len = elements.len();
        // update [cut, len - 1], observe [0, cut - 1]
        let cut = 1 + split.index(len - 1);
        let mut tree = LazySegmentTree::<SumNode, Assign>::new(elements).unwrap();

        let before: Vec<SumNode> = (0..cut)
            .map(|end| tree.query(0..=end).unwrap())
            .collect();
        tree.update(cut.., value).unwrap();
        let after: Vec<SumNode> = (0..cut)
            .map(|end| tree.query(0..=end).unwrap())
            .collect();

        prop_assert_eq!(before, after);
        prop_assert_eq!(
            tree.query(cut..).unwrap().sum,
            value * (len - cut) as i64
        );
    }

    #[test]
    fn successive_sum_additions_match_their_composition(
        (elements, range) in composition_case(),
        values in (-50i64..50, -50i64..50),
    ) {
        check_composition::<SumNode, Add>(elements, range, values.0, values.1)?;
    }

    #[test]
    fn successive_sum_assignments_match_their_composition(
        (elements, range) in composition_case(),
        values in (-50i64..50, -50i64..50),
    ) {
        check_composition::<SumNode, Assign>(elements, range, values.0, values.1)?;
    }

    #[test]
    fn successive_min_assignments_match_their_composition(
        (elements, range) in composition_case(),
        values in (-50i64..50, -50i64..50),
    ) {
        check_composition::<MinNode, Assign>(elements, range, values.0, values.1)?;
    }

    #[test]
    fn successive_affine_maps_match_their_composition(
        (elements, range) in composition_case(),
        first in (-3i64..=3, -9i64..=9),
        second in (-3i64..=3, -9i64..=9),
    ) {
        check_composition::<SumNode, Affine>(elements, range, first, second)?;
    }

    #[test]
    fn overlapping_additions_commute(
        elements in vec(-20i64..20, 1..64),
        ends in vec(any::<prop::sample::Index>(), 4),
        deltas in (-50i64..50, -50i64..50),
    ) {
        let len = elements.len();
        let idx: Vec<usize> = ends.iter().map(|i| i.index(len)).collect();
        let first = idx[0].min(idx[1])..=idx[0].max(idx[1]);
        let second = idx[2].min(idx[3])..=idx[2].max(idx[3]);

        let mut forward = LazySegmentTree::<SumNode, Add>::new(elements.clone()).unwrap();
        forward.update(first.clone(), deltas.0).unwrap();
        forward.update(second.clone(), deltas.1).unwrap();

        let mut backward = LazySegmentTree::<SumNode, Add>::new(elements).unwrap();
        backward.update(second, deltas.1).unwrap();
        backward.update(first, deltas.0).unwrap();

        for start in 0..len {
            prop_assert_eq!(forward.query(start..).unwrap(), backward.query(start..).unwrap());
        }
    }
}
