// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Probe observers: count or record what a search does.
//!
//! Both search loops report every element comparison (`probe`) and every
//! window they enter (`window`) to an [`Observer`]. The unit type is the
//! no-op observer, so the plain `search` entry points monomorphize down to
//! the bare loop. [`ProbeStats`] counts, [`ProbeTrace`] records.

use serde::Serialize;

/// Receives events from a running search.
pub trait Observer {
    /// An element at `index` was compared against the target.
    #[inline(always)]
    fn probe(&mut self, _index: usize) {}

    /// The loop entered an iteration over the inclusive window
    /// `[left, right]` and picked `mid`.
    #[inline(always)]
    fn window(&mut self, _left: usize, _right: usize, _mid: usize) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline(always)]
    fn probe(&mut self, index: usize) {
        (**self).probe(index);
    }

    #[inline(always)]
    fn window(&mut self, left: usize, right: usize, mid: usize) {
        (**self).window(left, right, mid);
    }
}

/// Probe and iteration counters for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProbeStats {
    /// Element comparisons, boundary checks included.
    pub probes: usize,
    /// Loop iterations.
    pub iterations: usize,
}

impl Observer for ProbeStats {
    #[inline]
    fn probe(&mut self, _index: usize) {
        self.probes += 1;
    }

    #[inline]
    fn window(&mut self, _left: usize, _right: usize, _mid: usize) {
        self.iterations += 1;
    }
}

/// One loop iteration: the window and the midpoint chosen inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub left: usize,
    pub right: usize,
    pub mid: usize,
}

impl Step {
    /// Number of indices in the inclusive window.
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }
}

/// Full record of a search: every window in order and every probed index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProbeTrace {
    pub steps: Vec<Step>,
    pub probes: Vec<usize>,
}

impl ProbeTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse the trace into counters.
    pub fn stats(&self) -> ProbeStats {
        ProbeStats {
            probes: self.probes.len(),
            iterations: self.steps.len(),
        }
    }
}

impl Observer for ProbeTrace {
    fn probe(&mut self, index: usize) {
        self.probes.push(index);
    }

    fn window(&mut self, left: usize, right: usize, mid: usize) {
        self.steps.push(Step { left, right, mid });
    }
}
