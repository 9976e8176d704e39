// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Seeded datasets and the target scenarios run against them.
//!
//! Every dataset is sorted. Duplicates are introduced as runs that overwrite
//! a contiguous stretch with one of its own endpoint values, which keeps the
//! order intact.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use serde::Serialize;

use crate::verify::contracts;

/// The sorted inputs for one size.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub size: usize,
    /// `size` distinct values drawn from `1..10 * size`, sorted.
    pub base: Vec<i64>,
    /// `base` with duplicate runs at the head, middle, and tail.
    pub duplicated: Vec<i64>,
    /// `base` with `base[size / 3]` overwritten by its right neighbor.
    pub adjacent: Vec<i64>,
    /// `0, 10, 20, ...`
    pub uniform: Vec<i64>,
}

impl Dataset {
    /// Smallest size every scenario is defined for.
    pub const MIN_SIZE: usize = 10;

    /// Build all inputs for `size` elements. Same `(size, seed)`, same data.
    pub fn generate(size: usize, seed: u64) -> Self {
        let size = size.max(Self::MIN_SIZE);
        let mut rng = StdRng::seed_from_u64(seed ^ size as u64);

        let mut base: Vec<i64> = index::sample(&mut rng, 10 * size - 1, size)
            .into_iter()
            .map(|i| i as i64 + 1)
            .collect();
        base.sort_unstable();

        let run = duplicate_run(size);
        let middle = size / 2;
        let mut duplicated = base.clone();
        duplicated[..=run].fill(base[0]);
        duplicated[middle - run..=middle + run].fill(base[middle]);
        duplicated[size - 1 - run..].fill(base[size - 1]);

        let mut adjacent = base.clone();
        let third = size / 3;
        adjacent[third] = adjacent[third + 1];

        let uniform: Vec<i64> = (0..size as i64).map(|i| i * 10).collect();

        for input in [&base, &duplicated, &adjacent, &uniform] {
            contracts::check_sorted(input);
        }

        Self {
            size,
            base,
            duplicated,
            adjacent,
            uniform,
        }
    }
}

/// Copies on each side of a duplicate run's anchor.
fn duplicate_run(size: usize) -> usize {
    (size / 100).max(1)
}

/// Where the target sits, and which input it is searched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    Start,
    FirstQuartile,
    Middle,
    ThirdQuartile,
    End,
    Absent,
    DuplicateHead,
    DuplicateMiddle,
    DuplicateTail,
    Tenth,
    ThreeTenths,
    SevenTenths,
    NineTenths,
    AdjacentEqual,
    Uniform,
}

impl Scenario {
    pub const ALL: [Scenario; 15] = [
        Scenario::Start,
        Scenario::FirstQuartile,
        Scenario::Middle,
        Scenario::ThirdQuartile,
        Scenario::End,
        Scenario::Absent,
        Scenario::DuplicateHead,
        Scenario::DuplicateMiddle,
        Scenario::DuplicateTail,
        Scenario::Tenth,
        Scenario::ThreeTenths,
        Scenario::SevenTenths,
        Scenario::NineTenths,
        Scenario::AdjacentEqual,
        Scenario::Uniform,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Start => "Target at start",
            Scenario::FirstQuartile => "Target at first quartile",
            Scenario::Middle => "Target in the middle",
            Scenario::ThirdQuartile => "Target at third quartile",
            Scenario::End => "Target at end",
            Scenario::Absent => "Target absent",
            Scenario::DuplicateHead => "Duplicate run at head",
            Scenario::DuplicateMiddle => "Duplicate run in middle",
            Scenario::DuplicateTail => "Duplicate run at tail",
            Scenario::Tenth => "10% into the list",
            Scenario::ThreeTenths => "30% into the list",
            Scenario::SevenTenths => "70% into the list",
            Scenario::NineTenths => "90% into the list",
            Scenario::AdjacentEqual => "Equal adjacent elements",
            Scenario::Uniform => "Uniform sequence",
        }
    }

    /// Whether the target is expected to be present.
    pub fn expects_match(self) -> bool {
        self != Scenario::Absent
    }

    /// The input slice and target for this scenario.
    pub fn case(self, data: &Dataset) -> (&[i64], i64) {
        let n = data.size;
        let base = data.base.as_slice();
        match self {
            Scenario::Start => (base, base[0]),
            Scenario::FirstQuartile => (base, base[n / 4]),
            Scenario::Middle => (base, base[n / 2]),
            Scenario::ThirdQuartile => (base, base[3 * n / 4]),
            Scenario::End => (base, base[n - 1]),
            Scenario::Absent => (base, base[n - 1] + 1),
            Scenario::DuplicateHead => (&data.duplicated, data.duplicated[0]),
            Scenario::DuplicateMiddle => (&data.duplicated, data.duplicated[n / 2]),
            Scenario::DuplicateTail => (&data.duplicated, data.duplicated[n - 1]),
            Scenario::Tenth => (base, base[n / 10]),
            Scenario::ThreeTenths => (base, base[3 * n / 10]),
            Scenario::SevenTenths => (base, base[7 * n / 10]),
            Scenario::NineTenths => (base, base[9 * n / 10]),
            Scenario::AdjacentEqual => (&data.adjacent, data.adjacent[n / 3]),
            Scenario::Uniform => (&data.uniform, data.uniform[n / 2]),
        }
    }
}
