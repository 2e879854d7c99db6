/// Property-based tests for trump mapping and ranking
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::{
    compare, hierarchy, is_trump, make_full_set, suits_of, test_gens, test_prelude, trump_rank,
};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: no two dominoes share a trump rank under a fixed trump.
    #[test]
    fn prop_trump_ranks_are_unique(trump in test_gens::trump()) {
        let set = make_full_set();
        let ranks: Vec<u8> = set.dominoes.iter().filter_map(|d| trump_rank(d, trump)).collect();
        let distinct: HashSet<u8> = ranks.iter().copied().collect();
        prop_assert_eq!(ranks.len(), distinct.len(), "duplicate rank under {:?}", trump);
        prop_assert_eq!(ranks.len(), 7);
    }

    /// Property: rank is defined exactly for trump dominoes.
    #[test]
    fn prop_rank_defined_iff_trump(d in test_gens::domino(), trump in test_gens::trump()) {
        prop_assert_eq!(trump_rank(&d, trump).is_some(), is_trump(&d, trump));
    }

    /// Property: every domino occupies one suit, or two when it is a
    /// non-double under doubles trump.
    #[test]
    fn prop_suit_count(d in test_gens::domino(), trump in test_gens::trump()) {
        let suits = suits_of(&d, trump);
        let expected = if trump == crate::domain::DominoSuit::Doubles && !d.is_double() { 2 } else { 1 };
        prop_assert_eq!(suits.len(), expected);
        if is_trump(&d, trump) {
            prop_assert_eq!(suits, vec![trump]);
        }
    }

    /// Property: compare is antisymmetric.
    #[test]
    fn prop_compare_antisymmetric(
        pair in test_gens::unique_dominoes(2),
        trump in test_gens::trump(),
    ) {
        let (a, b) = (pair[0], pair[1]);
        prop_assert_eq!(compare(&a, &b, trump), compare(&b, &a, trump).reverse());
    }

    /// Property: hierarchy is idempotent and strictly descending.
    #[test]
    fn prop_hierarchy_idempotent(trump in test_gens::trump(), dominoes in test_gens::unique_dominoes(28)) {
        let first = hierarchy(trump, &dominoes);
        let second = hierarchy(trump, &dominoes);
        prop_assert_eq!(&first, &second);
        for w in first.ranked_dominoes.windows(2) {
            prop_assert_eq!(compare(&w[0], &w[1], trump), std::cmp::Ordering::Greater);
        }
        prop_assert_eq!(first.trump_count, first.ranked_dominoes.len());
    }

    /// Property: under a pip trump, the trump double tops the hierarchy.
    #[test]
    fn prop_trump_double_is_strongest(trump in test_gens::pip_trump()) {
        let h = hierarchy(trump, &make_full_set().dominoes);
        let top = h.strongest().copied().unwrap();
        prop_assert!(top.is_double());
        prop_assert_eq!(Some(top.high()), trump.pip());
    }
}
