// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Neighbor-probing binary search.
//!
//! Classic binary search compares one element per iteration. This variant
//! compares three: the midpoint and both of its neighbors. A hit on either
//! neighbor ends the search one iteration early, and a miss lets the window
//! skip past the neighbor that was already ruled out, so the next window
//! starts at `mid + 2` or ends at `mid - 2`.
//!
//! ```text
//!   left          mid-1  mid  mid+1          right
//!    │              │     │     │              │
//!    ▼              ▼     ▼     ▼              ▼
//!  ┌───┬───┬───┬───┬───┬─────┬───┬───┬───┬───┬───┐
//!  │   │   │   │   │ ? │  ?  │ ? │   │   │   │   │
//!  └───┴───┴───┴───┴───┴─────┴───┴───┴───┴───┴───┘
//!  ◀── right = mid-2 ──┘           └── left = mid+2 ──▶
//! ```
//!
//! Before the loop the two boundary elements are checked once. They reject
//! out-of-range targets in O(1) and let the window start at `[1, n-2]`.
//!
//! # Preconditions
//!
//! The slice must be sorted in non-descending order with respect to the
//! comparator. Unsorted input never panics, but the answer is unreliable:
//! a present element may be reported missing. A returned index always
//! compares equal.
//!
//! # Duplicates
//!
//! Any matching index may be returned. Which one depends on probe order and
//! is neither the first nor the last occurrence in general.

use std::cmp::Ordering;

use super::observe::Observer;
use crate::verify::contracts;

/// Find `target` in a sorted slice.
///
/// Returns `Some(i)` with `slice[i] == *target`, or `None` if absent.
///
/// # Example
///
/// ```
/// let primes = [2, 3, 5, 7, 11, 13, 17];
/// assert_eq!(flank::search(&primes, &11), Some(4));
/// assert_eq!(flank::search(&primes, &4), None);
/// ```
pub fn search<T: Ord>(slice: &[T], target: &T) -> Option<usize> {
    let found = search_by(slice, |probe| probe.cmp(target));

    #[cfg(debug_assertions)]
    if let Some(index) = found {
        contracts::check_match(index, slice[index].cmp(target));
    }

    found
}

/// Find the element for which `compare` returns `Ordering::Equal`.
///
/// `compare` receives a probed element and returns its ordering relative to
/// the target, the same convention as [`slice::binary_search_by`]. This is
/// the entry point for types that are only partially ordered:
///
/// ```
/// let xs = [1.1, 2.2, 3.3, 4.4, 5.5];
/// assert_eq!(flank::search_by(&xs, |x: &f64| x.total_cmp(&3.3)), Some(2));
/// ```
#[inline]
pub fn search_by<T, F>(slice: &[T], compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    search_by_observed(slice, compare, ())
}

/// Find the element whose key, extracted by `key_fn`, equals `key`.
///
/// The slice must be sorted by that key.
#[inline]
pub fn search_by_key<T, B, F>(slice: &[T], key: &B, mut key_fn: F) -> Option<usize>
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    search_by(slice, |probe| key_fn(probe).cmp(key))
}

/// [`search`] that reports every probe and window to `observer`.
pub fn search_observed<T, O>(slice: &[T], target: &T, observer: O) -> Option<usize>
where
    T: Ord,
    O: Observer,
{
    search_by_observed(slice, |probe| probe.cmp(target), observer)
}

/// [`search_by`] that reports every probe and window to `observer`.
pub fn search_by_observed<T, F, O>(slice: &[T], mut compare: F, mut observer: O) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
    O: Observer,
{
    let len = slice.len();
    if len == 0 {
        return None;
    }
    let last = len - 1;

    observer.probe(0);
    let first_ord = compare(&slice[0]);
    // A single element is both boundaries.
    let last_ord = if last == 0 {
        first_ord
    } else {
        observer.probe(last);
        compare(&slice[last])
    };

    // Out of range: target < slice[0] or target > slice[last]
    if first_ord == Ordering::Greater || last_ord == Ordering::Less {
        return None;
    }
    if first_ord == Ordering::Equal {
        return Some(0);
    }
    if last_ord == Ordering::Equal {
        return Some(last);
    }

    // len >= 2 here, so `last - 1` cannot underflow
    let mut left = 1;
    let mut right = last - 1;

    while left <= right {
        contracts::check_window_in_bounds(left, right, len);

        let mid = left + ((right - left) >> 1);
        observer.window(left, right, mid);

        observer.probe(mid);
        let mid_ord = compare(&slice[mid]);
        if mid_ord == Ordering::Equal {
            return Some(mid);
        }

        if mid > left {
            observer.probe(mid - 1);
            if compare(&slice[mid - 1]) == Ordering::Equal {
                return Some(mid - 1);
            }
        }

        if mid < right {
            observer.probe(mid + 1);
            if compare(&slice[mid + 1]) == Ordering::Equal {
                return Some(mid + 1);
            }
        }

        let width = right - left + 1;
        if mid_ord == Ordering::Less {
            left = mid + 2;
        } else {
            match mid.checked_sub(2) {
                Some(next) => right = next,
                // mid == 1: nothing left of the checked neighbor
                None => break,
            }
        }
        contracts::check_window_shrinks(width, (right + 1).saturating_sub(left));
    }

    None
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================
//
// Run with: cargo kani
//
// Verified properties (all slices up to MAX_LEN elements):
// 1. search never panics, sorted or not
// 2. A returned index is in bounds and holds the target
// 3. A sorted slice that contains the target always yields Some

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const MAX_LEN: usize = 6;

    fn any_slice(buf: &mut [u8; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for i in 0..MAX_LEN {
            buf[i] = kani::any();
        }
        len
    }

    /// Verify search never panics and only reports real matches.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_search_no_panic() {
        let mut buf = [0u8; MAX_LEN];
        let len = any_slice(&mut buf);
        let target: u8 = kani::any();

        if let Some(i) = search_by(&buf[..len], |x| x.cmp(&target)) {
            kani::assert(i < len, "returned index must be in bounds");
            kani::assert(buf[i] == target, "returned index must hold the target");
        }
    }

    /// Verify completeness on sorted input.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_sorted_present_is_found() {
        let mut buf = [0u8; MAX_LEN];
        let len = any_slice(&mut buf);
        for i in 1..len {
            kani::assume(buf[i - 1] <= buf[i]);
        }
        let pos: usize = kani::any_where(|&p| p < len);
        let target = buf[pos];

        kani::assert(
            search_by(&buf[..len], |x| x.cmp(&target)).is_some(),
            "sorted slice containing the target must find it",
        );
    }
}
