// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over sorted slices.
//!
//! - `neighbor`: the midpoint-plus-neighbors search this crate is about
//! - `classic`: one-probe-per-iteration baseline
//! - `observe`: probe counting and tracing hooks shared by both

pub mod classic;
pub mod neighbor;
pub mod observe;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use observe::Observer;

/// Integer rendering of "not found" at outer surfaces (CLI, reports).
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Render a search result as an index or [`NOT_FOUND_SENTINEL`].
pub fn to_sentinel(result: Option<usize>) -> i64 {
    result.map_or(NOT_FOUND_SENTINEL, |i| i as i64)
}

/// Which search loop to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Midpoint plus both neighbors per iteration
    Neighbor,
    /// One probe per iteration
    Classic,
}

impl Algorithm {
    /// Every algorithm, baseline last.
    pub const ALL: [Algorithm; 2] = [Algorithm::Neighbor, Algorithm::Classic];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Neighbor => "neighbor",
            Algorithm::Classic => "classic",
        }
    }

    /// Run this algorithm with a comparator and observer.
    pub fn run_by_observed<T, F, O>(self, slice: &[T], compare: F, observer: O) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
        O: Observer,
    {
        match self {
            Algorithm::Neighbor => neighbor::search_by_observed(slice, compare, observer),
            Algorithm::Classic => classic::search_by_observed(slice, compare, observer),
        }
    }

    /// Run this algorithm on a totally ordered slice.
    pub fn run<T: Ord>(self, slice: &[T], target: &T) -> Option<usize> {
        self.run_by_observed(slice, |probe| probe.cmp(target), ())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
