use proptest::prelude::*;
use pullseq::prelude::*;

fn values() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(any::<i32>(), 0..64)
}

proptest! {
    #[test]
    fn count_matches_collect_len(items in values()) {
        let count = Iter::from_vec(items.clone()).count();
        prop_assert_eq!(count, Iter::from_vec(items).collect().len());
    }

    #[test]
    fn reverse_matches_reversed_collect(items in values()) {
        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(Iter::from_vec(items.clone()).reverse().collect(), expected);
        prop_assert_eq!(Iter::from_vec(items.clone()).reverse().reverse().collect(), items);
    }

    #[test]
    fn partition_splits_every_element_once(items in values(), modulus in 1i32..8) {
        let (hits, misses) = Iter::from_vec(items.clone()).partition(|i| i % modulus == 0);
        let hits = hits.collect();
        let misses = misses.collect();

        prop_assert!(hits.iter().all(|i| i % modulus == 0));
        prop_assert!(misses.iter().all(|i| i % modulus != 0));

        let mut rejoined = hits.into_iter().chain(misses).collect::<Vec<_>>();
        let mut expected = items;
        rejoined.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(rejoined, expected);
    }

    #[test]
    fn partition_preserves_relative_order(items in values()) {
        let (hits, misses) = Iter::from_vec(items.clone()).partition(|i| *i >= 0);
        prop_assert_eq!(hits.collect(), items.iter().copied().filter(|i| *i >= 0).collect::<Vec<_>>());
        prop_assert_eq!(misses.collect(), items.iter().copied().filter(|i| *i < 0).collect::<Vec<_>>());
    }

    #[test]
    fn chain_concatenates(first in values(), second in values()) {
        let expected = [first.clone(), second.clone()].concat();
        prop_assert_eq!(Iter::from_vec(first).chain(Iter::from_vec(second)).collect(), expected);
    }

    #[test]
    fn take_len_is_bounded(items in values(), n in 0usize..80) {
        let taken = Iter::from_vec(items.clone()).take(n).collect();
        prop_assert_eq!(taken.len(), n.min(items.len()));
        prop_assert_eq!(&taken[..], &items[..taken.len()]);
    }

    #[test]
    fn map_is_elementwise(items in values()) {
        let expected = items.iter().map(|i| i64::from(*i) - 1).collect::<Vec<_>>();
        prop_assert_eq!(Iter::from_vec(items).map(|i| i64::from(i) - 1).collect(), expected);
    }

    #[test]
    fn step_by_keeps_ceil_len(items in values(), step in 1usize..10) {
        let stepped = Iter::from_vec(items.clone()).step_by(step).collect();
        prop_assert_eq!(stepped.len(), (items.len() + step - 1) / step);
        prop_assert_eq!(stepped, items.iter().copied().step_by(step).collect::<Vec<_>>());
    }
}
