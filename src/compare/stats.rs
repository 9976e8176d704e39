// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small summary statistics for timing samples.

use serde::Serialize;

/// Per-call timing summary, in nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub mean_ns: f64,
    pub min_ns: f64,
    pub std_dev_ns: f64,
    pub samples: usize,
}

impl Timing {
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let mean = mean(samples);
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            mean_ns: mean,
            min_ns: min,
            std_dev_ns: std_dev(samples, mean),
            samples: samples.len(),
        }
    }
}

/// Arithmetic mean; `0.0` for no values.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation (n - 1); `0.0` below two values.
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// How much smaller `candidate` is than `baseline`, in percent.
///
/// Positive means the candidate improved on the baseline. A zero baseline
/// yields `0.0`; a zero candidate against a nonzero baseline is `100.0`.
pub fn reduction_percent(baseline: f64, candidate: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (baseline - candidate) / baseline * 100.0
}
