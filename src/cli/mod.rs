// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the flank command-line interface.
//!
//! Two subcommands: `search` to look a value up in a sorted list (optionally
//! printing every window and probe), and `compare` to run neighbor-probing
//! and classic binary search side by side over generated datasets.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flank::Algorithm;

#[derive(Parser)]
#[command(
    name = "flank",
    about = "Binary search that probes the midpoint and both of its neighbors",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a value in a sorted list and print its index, or -1
    #[command(allow_negative_numbers = true)]
    Search {
        /// Value to find
        target: String,

        /// Sorted values to search
        values: Vec<String>,

        /// Read whitespace-separated values from a file (appended after VALUES)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// How values are parsed and ordered
        #[arg(short, long, value_enum, default_value_t = ValueKind::Int)]
        kind: ValueKind,

        /// Search loop to run
        #[arg(short, long, value_enum, default_value_t = Algorithm::Neighbor)]
        algorithm: Algorithm,

        /// Print every window and probe
        #[arg(long)]
        trace: bool,

        /// Skip the sortedness check (results on unsorted input are unreliable)
        #[arg(long)]
        unchecked: bool,
    },

    /// Compare neighbor-probing against classic binary search
    Compare {
        /// JSON config file (maxExponent, repetitions, samples, seed)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Largest size exponent: sizes run 10^1 ..= 10^N
        #[arg(long)]
        max_exponent: Option<u32>,

        /// Calls per timing sample
        #[arg(long)]
        repetitions: Option<usize>,

        /// Timing samples per case
        #[arg(long)]
        samples: Option<usize>,

        /// Seed for dataset generation
        #[arg(long)]
        seed: Option<u64>,

        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

/// How `search` interprets its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// Signed 64-bit integers, numeric order
    Int,
    /// Strings, byte-wise lexicographic order
    Text,
}
