// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for neighbor-probing search.
//!
//! Arbitrary slices, sorted or not, with arbitrary targets. The search must
//! never panic or index out of bounds. On sorted input it must agree with a
//! linear scan about whether the target is present, and any index it
//! reports must hold the target.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<i16>,
    target: i16,
    sort: bool,
}

fuzz_target!(|input: Input| {
    let Input {
        mut values,
        target,
        sort,
    } = input;
    if sort {
        values.sort_unstable();
    }

    // Property 1: never panics, reported index always holds the target
    let found = flank::search(&values, &target);
    let classic = flank::classic::search(&values, &target);
    if let Some(i) = found {
        assert!(i < values.len(), "index {} out of bounds for {}", i, values.len());
        assert_eq!(values[i], target, "index {} does not hold the target", i);
    }

    if !sort {
        return;
    }

    // Property 2: on sorted input, presence matches a linear scan
    let present = values.contains(&target);
    assert_eq!(found.is_some(), present, "neighbor disagrees with scan");
    assert_eq!(classic.is_some(), present, "classic disagrees with scan");

    // Property 3: iteration count stays within bit_length(n)
    let mut stats = flank::ProbeStats::default();
    flank::search_observed(&values, &target, &mut stats);
    let bound = (usize::BITS - values.len().leading_zeros()) as usize;
    assert!(
        stats.iterations <= bound,
        "{} iterations for n={}",
        stats.iterations,
        values.len()
    );
});
