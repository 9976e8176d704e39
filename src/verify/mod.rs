// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`Sorted`) that make unsorted input
//!    unrepresentable. Construction validates, searches trust it.
//!
//! 2. **Runtime contracts** that panic in debug builds when a loop invariant
//!    breaks. Zero-cost in release, but catch bugs during development.
//!
//! The search functions themselves do not validate sortedness: that would
//! turn an O(log n) call into O(n). Use `Sorted` at trust boundaries.

mod types;
pub mod contracts;

pub use types::*;
