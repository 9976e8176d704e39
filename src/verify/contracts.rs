// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search loops.
//!
//! Debug-mode assertions that mirror the properties the search relies on:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure detection** while tests run
//! 3. **Local**: each check is O(1) except `check_sorted`, which callers opt into
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_window_in_bounds`   | `left <= right < len` on every iteration         |
//! | `check_window_shrinks`     | next window is at most half the current one      |
//! | `check_match`              | a returned index holds the target                |
//! | `check_sorted`             | generated datasets are non-descending (O(n))     |

use std::cmp::Ordering;

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check that an iteration window lies inside the slice.
///
/// # Panics (debug builds only)
/// Panics if `left > right` or `right >= len`.
#[inline]
pub fn check_window_in_bounds(left: usize, right: usize, len: usize) {
    debug_assert!(
        left <= right,
        "Contract violation: window inverted - left {} > right {}",
        left,
        right
    );
    debug_assert!(
        right < len,
        "Contract violation: window escapes slice - right {} >= len {}",
        right,
        len
    );
}

/// Check that the window at least halved between two iterations.
///
/// Widths are element counts of the inclusive windows. This is what bounds
/// the loop to `bit_length(n)` iterations.
///
/// # Panics (debug builds only)
/// Panics if `next_width * 2 > prev_width`.
#[inline]
pub fn check_window_shrinks(prev_width: usize, next_width: usize) {
    debug_assert!(
        next_width.saturating_mul(2) <= prev_width,
        "Contract violation: window did not halve - {} -> {}",
        prev_width,
        next_width
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a reported match really compares equal.
///
/// `ordering` is the comparator's verdict for the element at the returned
/// index, re-evaluated by the caller.
///
/// # Panics (debug builds only)
/// Panics if `ordering != Ordering::Equal`.
#[inline]
pub fn check_match(index: usize, ordering: Ordering) {
    debug_assert!(
        ordering == Ordering::Equal,
        "Contract violation: index {} reported as a match but compares {:?}",
        index,
        ordering
    );
}

/// Check that a slice is sorted in non-descending order.
///
/// Not called by the search loops: sortedness is a caller precondition.
/// `Dataset::generate` runs it on every input it builds.
///
/// # Panics (debug builds only)
/// Panics at the first descending adjacent pair.
#[inline]
pub fn check_sorted<T: Ord>(slice: &[T]) {
    for i in 1..slice.len() {
        debug_assert!(
            slice[i - 1] <= slice[i],
            "Contract violation: slice descends at position {}",
            i
        );
    }
}
