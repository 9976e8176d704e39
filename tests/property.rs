//! Property-based tests using proptest.
//!
//! These tests verify that the search contract holds for randomly generated
//! sorted (and unsorted) inputs, and that the neighbor-probing loop never
//! does more iterations than classic binary search.

mod common;

use common::{assert_match, bit_length, classic_stats, neighbor_stats};
use flank::{classic, search, search_by, Sorted};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted vectors with plenty of duplicates (small value range).
fn sorted_with_dups() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..128).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Strictly increasing vectors of at least two elements.
fn sorted_distinct() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(any::<i32>(), 2..256).prop_map(|s| s.into_iter().collect())
}

/// Sorted word lists.
fn sorted_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z]{1,6}").unwrap(), 0..64).prop_map(
        |mut v| {
            v.sort();
            v
        },
    )
}

// ============================================================================
// CORRECTNESS
// ============================================================================

proptest! {
    /// Property: every present value is found at an index holding it.
    #[test]
    fn prop_present_values_found(xs in sorted_with_dups()) {
        for x in &xs {
            assert_match(&xs, x, search(&xs, x));
        }
    }

    /// Property: absent values yield None.
    #[test]
    fn prop_absent_values_not_found(xs in sorted_with_dups(), target in -60i32..60) {
        prop_assume!(!xs.contains(&target));
        prop_assert_eq!(search(&xs, &target), None);
    }

    /// Property: found-ness agrees with the standard library.
    #[test]
    fn prop_agrees_with_std(xs in sorted_with_dups(), target in -60i32..60) {
        prop_assert_eq!(search(&xs, &target).is_some(), xs.binary_search(&target).is_ok());
        prop_assert_eq!(classic::search(&xs, &target).is_some(), xs.binary_search(&target).is_ok());
    }

    /// Property: with distinct values both loops return the same index.
    #[test]
    fn prop_distinct_matches_classic(xs in sorted_distinct(), pick in any::<prop::sample::Index>()) {
        let target = xs[pick.index(xs.len())];
        prop_assert_eq!(search(&xs, &target), classic::search(&xs, &target));
        prop_assert_eq!(search(&xs, &target), xs.binary_search(&target).ok());
    }

    /// Property: the boundary elements are reported at the boundaries.
    #[test]
    fn prop_boundaries(xs in sorted_distinct()) {
        let last = xs.len() - 1;
        prop_assert_eq!(search(&xs, &xs[0]), Some(0));
        prop_assert_eq!(search(&xs, &xs[last]), Some(last));
    }

    /// Property: targets outside [first, last] are rejected with two probes.
    #[test]
    fn prop_out_of_range_rejected(xs in sorted_distinct(), delta in 1i64..1_000) {
        let xs: Vec<i64> = xs.into_iter().map(i64::from).collect();
        let below = xs[0] - delta;
        let above = xs[xs.len() - 1] + delta;

        for target in [below, above] {
            let (found, stats) = neighbor_stats(&xs, &target);
            prop_assert_eq!(found, None);
            prop_assert_eq!(stats.probes, 2);
            prop_assert_eq!(stats.iterations, 0);
        }
    }

    /// Property: strings work the same as integers.
    #[test]
    fn prop_words(words in sorted_words(), probe in "[a-z]{1,6}") {
        for w in &words {
            assert_match(&words, w, search(&words, w));
        }
        prop_assert_eq!(search(&words, &probe).is_some(), words.contains(&probe));
    }

    /// Property: floats via total_cmp.
    #[test]
    fn prop_floats(mut xs in prop::collection::vec(-1e6f64..1e6, 1..64), pick in any::<prop::sample::Index>()) {
        xs.sort_by(f64::total_cmp);
        let target = xs[pick.index(xs.len())];
        let i = search_by(&xs, |x| x.total_cmp(&target));
        prop_assert!(i.is_some());
        prop_assert_eq!(xs[i.unwrap()], target);
    }
}

// ============================================================================
// TERMINATION AND COST
// ============================================================================

proptest! {
    /// Property: the loop runs at most bit_length(n) times.
    #[test]
    fn prop_iterations_bounded(xs in sorted_with_dups(), target in -60i32..60) {
        let (_, stats) = neighbor_stats(&xs, &target);
        prop_assert!(
            stats.iterations <= bit_length(xs.len()),
            "{} iterations for n={}", stats.iterations, xs.len()
        );
        prop_assert!(stats.probes <= 2 + 3 * stats.iterations);
    }

    /// Property: neighbor probing never needs more iterations than classic.
    #[test]
    fn prop_no_more_iterations_than_classic(xs in sorted_distinct(), target in any::<i32>()) {
        let (_, n) = neighbor_stats(&xs, &target);
        let (_, c) = classic_stats(&xs, &target);
        prop_assert!(n.iterations <= c.iterations, "neighbor {:?} vs classic {:?}", n, c);
    }

    /// Property: unsorted input never panics, and a reported index is a real match.
    #[test]
    fn prop_unsorted_never_lies(xs in prop::collection::vec(-20i32..20, 0..64), target in -25i32..25) {
        if let Some(i) = search(&xs, &target) {
            prop_assert_eq!(xs[i], target);
        }
        if let Some(i) = classic::search(&xs, &target) {
            prop_assert_eq!(xs[i], target);
        }
    }

    /// Property: `Sorted` accepts exactly the sorted vectors.
    #[test]
    fn prop_sorted_wrapper(xs in prop::collection::vec(-20i32..20, 0..32)) {
        let is_sorted = xs.windows(2).all(|w| w[0] <= w[1]);
        prop_assert_eq!(Sorted::new(&xs).is_ok(), is_sorted);
    }
}
