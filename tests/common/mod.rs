//! Shared test utilities and fixtures.

#![allow(dead_code)]

use flank::ProbeStats;

/// `0, 1, 2, ..., n - 1` as `i64`.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Odd numbers `1, 3, 5, ..., 15`.
pub fn odds() -> Vec<i32> {
    vec![1, 3, 5, 7, 9, 11, 13, 15]
}

/// Assert that `result` is a valid match for `target` in `slice`.
pub fn assert_match<T: PartialEq + std::fmt::Debug>(slice: &[T], target: &T, result: Option<usize>) {
    let index = result.unwrap_or_else(|| panic!("{:?} should be found", target));
    assert!(index < slice.len(), "index {} out of bounds for len {}", index, slice.len());
    assert_eq!(&slice[index], target, "index {} does not hold the target", index);
}

/// Number of bits needed to write `n`: the iteration bound for both loops.
pub fn bit_length(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Probe counts for a neighbor-probing search.
pub fn neighbor_stats<T: Ord>(slice: &[T], target: &T) -> (Option<usize>, ProbeStats) {
    let mut stats = ProbeStats::default();
    let found = flank::search_observed(slice, target, &mut stats);
    (found, stats)
}

/// Probe counts for a classic search.
pub fn classic_stats<T: Ord>(slice: &[T], target: &T) -> (Option<usize>, ProbeStats) {
    let mut stats = ProbeStats::default();
    let found = flank::classic::search_by_observed(slice, |x| x.cmp(target), &mut stats);
    (found, stats)
}
