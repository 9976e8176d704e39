//! Neighbor-probing binary search over sorted slices.
//!
//! Each iteration compares the midpoint *and* both of its neighbors against
//! the target. A hit on a neighbor ends the search early; a miss lets the
//! window jump past the neighbor that was already checked, so it shrinks by
//! at least three elements per step and still halves every iteration.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │ search::neighbor │     │ search::classic  │
//! │ (search,         │     │ (baseline)       │
//! │  search_by, ...) │     │                  │
//! └────────┬─────────┘     └────────┬─────────┘
//!          │   probes, windows      │
//!          ▼                        ▼
//! ┌───────────────────────────────────────────┐
//! │ search::observe (ProbeStats, ProbeTrace)  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! | Module     | Role                                                    |
//! |------------|---------------------------------------------------------|
//! | `search`   | The two search loops and the `Algorithm` selector       |
//! | `verify`   | `Sorted` wrapper, debug contracts on loop invariants    |
//! | `compare`  | Seeded datasets, side-by-side runs, JSON report         |
//!
//! # Usage
//!
//! ```
//! let xs = [1, 2, 3, 4, 5];
//! assert_eq!(flank::search(&xs, &3), Some(2));
//! assert_eq!(flank::search(&xs, &6), None);
//!
//! // Any `Ord` element type
//! let letters = ['a', 'b', 'c', 'd', 'e'];
//! assert_eq!(flank::search(&letters, &'c'), Some(2));
//! ```
//!
//! The slice must be sorted. Unsorted input never panics, but the result is
//! unreliable; wrap untrusted input in [`verify::Sorted`] to check once.

pub mod compare;
pub mod search;
pub mod verify;

// Re-exports for public API
pub use search::classic;
pub use search::neighbor::{
    search, search_by, search_by_key, search_by_observed, search_observed,
};
pub use search::observe::{Observer, ProbeStats, ProbeTrace, Step};
pub use search::{to_sentinel, Algorithm, NOT_FOUND_SENTINEL};
pub use verify::{InvariantError, Sorted};
