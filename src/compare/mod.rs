// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Side-by-side comparison of neighbor-probing and classic binary search.
//!
//! For every size `10^1 ..= 10^max_exponent` and every [`Scenario`], both
//! algorithms search the same input for the same target. Each run records:
//!
//! - the result (index or `-1`)
//! - probe and iteration counts (deterministic, from [`ProbeStats`])
//! - per-call wall time over `samples × repetitions` calls
//!
//! Results are validated (both agree on found/not-found, every reported
//! index holds the target) and summarized per scenario.
//!
//! Cases are independent, so with the `parallel` feature sizes fan out over
//! rayon. Timings taken in parallel share the machine; use them for relative
//! comparison only. Probe counts are exact either way.

mod config;
mod dataset;
mod stats;

pub use config::{CompareConfig, ConfigError, MAX_EXPONENT_LIMIT};
pub use dataset::{Dataset, Scenario};
pub use stats::{mean, reduction_percent, std_dev, Timing};

use std::fs;
use std::hint::black_box;
use std::io;
use std::path::Path;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::search::observe::ProbeStats;
use crate::search::{to_sentinel, Algorithm};

/// One algorithm's outcome on one case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    /// Index found, or `-1`.
    pub result: i64,
    pub probes: usize,
    pub iterations: usize,
    pub timing: Timing,
}

/// Cross-checks between the two runs of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Both found the target, or both did not.
    pub agree: bool,
    /// Every reported index holds the target.
    pub indices_hold_target: bool,
    /// Found-ness matches what the scenario expects.
    pub matches_expectation: bool,
}

impl Validation {
    pub fn passed(&self) -> bool {
        self.agree && self.indices_hold_target && self.matches_expectation
    }
}

/// Both algorithms on one (size, scenario) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    pub size: usize,
    pub scenario: Scenario,
    pub target: i64,
    pub neighbor: AlgorithmRun,
    pub classic: AlgorithmRun,
    pub validation: Validation,
}

/// Aggregate of one scenario across all sizes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    pub label: &'static str,
    pub cases: usize,
    pub passed: usize,
    pub pass_rate: f64,
    pub mean_ns_classic: f64,
    pub mean_ns_neighbor: f64,
    pub time_reduction_percent: f64,
    pub mean_probes_classic: f64,
    pub mean_probes_neighbor: f64,
    pub probe_reduction_percent: f64,
    pub mean_iterations_classic: f64,
    pub mean_iterations_neighbor: f64,
    pub iteration_reduction_percent: f64,
}

/// Everything a comparison run produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub config: CompareConfig,
    pub cases: Vec<CaseResult>,
    pub summaries: Vec<ScenarioSummary>,
}

impl Report {
    /// Whether every case passed validation.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.validation.passed())
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

/// Run the full comparison.
pub fn run(config: &CompareConfig) -> Result<Report, ConfigError> {
    run_with_progress(config, &|_: &CaseResult| {})
}

/// Number of cases [`run`] will produce for `config`.
pub fn case_count(config: &CompareConfig) -> usize {
    config.sizes().len() * Scenario::ALL.len()
}

/// Run the full comparison, calling `progress` after each finished case.
pub fn run_with_progress<P>(config: &CompareConfig, progress: &P) -> Result<Report, ConfigError>
where
    P: Fn(&CaseResult) + Sync,
{
    config.validate()?;
    log::info!(
        "comparing {} sizes x {} scenarios ({} samples x {} calls each)",
        config.sizes().len(),
        Scenario::ALL.len(),
        config.samples,
        config.repetitions
    );

    let sizes = config.sizes();
    let run_size = |&size: &usize| -> Vec<CaseResult> {
        let data = Dataset::generate(size, config.seed);
        log::debug!("generated datasets for n={}", size);
        Scenario::ALL
            .iter()
            .map(|&scenario| {
                let case = measure_case(&data, scenario, config);
                progress(&case);
                case
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let per_size: Vec<Vec<CaseResult>> = sizes.par_iter().map(run_size).collect();
    #[cfg(not(feature = "parallel"))]
    let per_size: Vec<Vec<CaseResult>> = sizes.iter().map(run_size).collect();

    let cases: Vec<CaseResult> = per_size.into_iter().flatten().collect();
    let summaries = summarize(&cases);

    Ok(Report {
        config: config.clone(),
        cases,
        summaries,
    })
}

/// Run both algorithms on one scenario of one dataset.
pub fn measure_case(data: &Dataset, scenario: Scenario, config: &CompareConfig) -> CaseResult {
    let (slice, target) = scenario.case(data);

    let (neighbor, neighbor_index) = measure(Algorithm::Neighbor, slice, target, config);
    let (classic, classic_index) = measure(Algorithm::Classic, slice, target, config);

    let holds = |found: Option<usize>| found.map_or(true, |i| slice[i] == target);
    let validation = Validation {
        agree: neighbor_index.is_some() == classic_index.is_some(),
        indices_hold_target: holds(neighbor_index) && holds(classic_index),
        matches_expectation: neighbor_index.is_some() == scenario.expects_match(),
    };

    if !validation.passed() {
        log::warn!(
            "validation failed: n={} scenario={:?} target={} neighbor={:?} classic={:?}",
            data.size,
            scenario,
            target,
            neighbor_index,
            classic_index
        );
    }

    CaseResult {
        size: data.size,
        scenario,
        target,
        neighbor,
        classic,
        validation,
    }
}

fn measure(
    algorithm: Algorithm,
    slice: &[i64],
    target: i64,
    config: &CompareConfig,
) -> (AlgorithmRun, Option<usize>) {
    let mut probes = ProbeStats::default();
    let found = algorithm.run_by_observed(slice, |x| x.cmp(&target), &mut probes);

    let mut samples = Vec::with_capacity(config.samples);
    for _ in 0..config.samples {
        let start = Instant::now();
        for _ in 0..config.repetitions {
            black_box(algorithm.run(black_box(slice), black_box(&target)));
        }
        samples.push(start.elapsed().as_nanos() as f64 / config.repetitions as f64);
    }

    let run = AlgorithmRun {
        algorithm,
        result: to_sentinel(found),
        probes: probes.probes,
        iterations: probes.iterations,
        timing: Timing::from_samples(&samples),
    };
    (run, found)
}

/// Aggregate cases per scenario, in [`Scenario::ALL`] order.
pub fn summarize(cases: &[CaseResult]) -> Vec<ScenarioSummary> {
    Scenario::ALL
        .iter()
        .filter_map(|&scenario| {
            let group: Vec<&CaseResult> = cases.iter().filter(|c| c.scenario == scenario).collect();
            if group.is_empty() {
                return None;
            }

            let mean_ns_classic = mean_of(&group, |c| c.classic.timing.mean_ns);
            let mean_ns_neighbor = mean_of(&group, |c| c.neighbor.timing.mean_ns);
            let mean_probes_classic = mean_of(&group, |c| c.classic.probes as f64);
            let mean_probes_neighbor = mean_of(&group, |c| c.neighbor.probes as f64);
            let mean_iterations_classic = mean_of(&group, |c| c.classic.iterations as f64);
            let mean_iterations_neighbor = mean_of(&group, |c| c.neighbor.iterations as f64);

            let passed = group.iter().filter(|c| c.validation.passed()).count();

            Some(ScenarioSummary {
                scenario,
                label: scenario.label(),
                cases: group.len(),
                passed,
                pass_rate: passed as f64 / group.len() as f64 * 100.0,
                mean_ns_classic,
                mean_ns_neighbor,
                time_reduction_percent: reduction_percent(mean_ns_classic, mean_ns_neighbor),
                mean_probes_classic,
                mean_probes_neighbor,
                probe_reduction_percent: reduction_percent(mean_probes_classic, mean_probes_neighbor),
                mean_iterations_classic,
                mean_iterations_neighbor,
                iteration_reduction_percent: reduction_percent(
                    mean_iterations_classic,
                    mean_iterations_neighbor,
                ),
            })
        })
        .collect()
}

fn mean_of(group: &[&CaseResult], field: impl Fn(&CaseResult) -> f64) -> f64 {
    let values: Vec<f64> = group.iter().map(|c| field(c)).collect();
    mean(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> CompareConfig {
        CompareConfig {
            max_exponent: 3,
            repetitions: 2,
            samples: 2,
            seed: 11,
        }
    }

    #[test]
    fn test_run_covers_every_case() {
        let config = quick_config();
        let report = run(&config).unwrap();
        assert_eq!(report.cases.len(), case_count(&config));
        assert_eq!(report.summaries.len(), Scenario::ALL.len());
        assert!(report.all_passed());
        for summary in &report.summaries {
            assert_eq!(summary.cases, 3);
            assert_eq!(summary.pass_rate, 100.0);
        }
    }

    #[test]
    fn test_cases_ordered_by_size_then_scenario() {
        let report = run(&quick_config()).unwrap();
        let sizes: Vec<usize> = report.cases.iter().map(|c| c.size).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(report.cases[0].scenario, Scenario::Start);
        assert_eq!(report.cases[1].scenario, Scenario::FirstQuartile);
    }

    #[test]
    fn test_boundary_scenarios_need_no_iterations() {
        let report = run(&quick_config()).unwrap();
        for case in &report.cases {
            if matches!(case.scenario, Scenario::Start | Scenario::End | Scenario::Absent) {
                assert_eq!(case.neighbor.iterations, 0, "{:?} n={}", case.scenario, case.size);
                assert!(case.neighbor.probes <= 2);
            }
        }
    }

    #[test]
    fn test_absent_reports_sentinel() {
        let data = Dataset::generate(100, 1);
        let case = measure_case(&data, Scenario::Absent, &quick_config());
        assert_eq!(case.neighbor.result, -1);
        assert_eq!(case.classic.result, -1);
        assert!(case.validation.passed());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CompareConfig {
            repetitions: 0,
            ..quick_config()
        };
        assert_eq!(run(&config).unwrap_err(), ConfigError::ZeroRepetitions);
    }

    #[test]
    fn test_progress_called_per_case() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let config = quick_config();
        let seen = AtomicUsize::new(0);
        run_with_progress(&config, &|_: &CaseResult| {
            seen.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), case_count(&config));
    }
}
