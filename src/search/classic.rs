// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Textbook binary search, kept as the baseline for `flank compare`.
//!
//! One probe per iteration, window `[0, n-1]`, `mid = (left + right) / 2`.
//! Same observer hooks as the neighbor variant so probe counts line up.

use std::cmp::Ordering;

use super::observe::Observer;
use crate::verify::contracts;

/// Find `target` in a sorted slice with one probe per iteration.
pub fn search<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    search_by(slice, |probe| probe.cmp(target))
}

/// Comparator form of [`search`].
#[inline]
pub fn search_by<T, F>(slice: &[T], compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    search_by_observed(slice, compare, ())
}

/// [`search_by`] that reports every probe and window to `observer`.
pub fn search_by_observed<T, F, O>(slice: &[T], mut compare: F, mut observer: O) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
    O: Observer,
{
    if slice.is_empty() {
        return None;
    }

    let mut left = 0;
    let mut right = slice.len() - 1;

    while left <= right {
        contracts::check_window_in_bounds(left, right, slice.len());

        let mid = left + ((right - left) >> 1);
        observer.window(left, right, mid);
        observer.probe(mid);

        match compare(&slice[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => right = next,
                None => break,
            },
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::observe::ProbeStats;

    #[test]
    fn test_finds_every_element() {
        let xs: Vec<i64> = (0..33).map(|i| i * 2).collect();
        for (i, x) in xs.iter().enumerate() {
            assert_eq!(search(&xs, x), Some(i));
            assert_eq!(search(&xs, &(x + 1)), None);
        }
        assert_eq!(search(&xs, &-1), None);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(search::<u8>(&[], &0), None);
        assert_eq!(search(&[5], &5), Some(0));
        assert_eq!(search(&[5], &4), None);
    }

    #[test]
    fn test_one_probe_per_iteration() {
        let xs: Vec<u32> = (0..100).collect();
        let mut stats = ProbeStats::default();
        assert_eq!(search_by_observed(&xs, |x| x.cmp(&0), &mut stats), Some(0));
        assert_eq!(stats.probes, stats.iterations);
        assert!(stats.iterations <= 7);
    }
}
