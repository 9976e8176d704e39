// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use flank::compare::{self, CompareConfig};
use flank::verify::Sorted;
use flank::{to_sentinel, Algorithm, ProbeTrace};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::display;
use cli::{Cli, Commands, ValueKind};

fn main() {
    init_logging();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            target,
            values,
            file,
            kind,
            algorithm,
            trace,
            unchecked,
        } => run_search(&target, values, file.as_deref(), kind, algorithm, trace, unchecked),
        Commands::Compare {
            config,
            max_exponent,
            repetitions,
            samples,
            seed,
            json,
        } => load_compare_config(config.as_deref(), max_exponent, repetitions, samples, seed)
            .and_then(|config| run_compare(&config, json)),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let env = env_logger::Env::new()
        .filter_or("FLANK_LOG", "warn")
        .write_style("FLANK_LOG_STYLE");
    env_logger::init_from_env(env);
}

// ============================================================================
// SEARCH
// ============================================================================

fn run_search(
    target: &str,
    mut raw_values: Vec<String>,
    file: Option<&Path>,
    kind: ValueKind,
    algorithm: Algorithm,
    trace: bool,
    unchecked: bool,
) -> Result<()> {
    if let Some(path) = file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read values from {}", path.display()))?;
        raw_values.extend(text.split_whitespace().map(str::to_string));
    }
    log::debug!("searching {} values with {}", raw_values.len(), algorithm);

    let index = match kind {
        ValueKind::Int => {
            let target: i64 = parse_value(target)?;
            let values: Vec<i64> = raw_values.iter().map(|v| parse_value(v)).collect::<Result<_>>()?;
            search_values(&values, &target, algorithm, trace, unchecked)?
        }
        ValueKind::Text => {
            let target = target.to_string();
            search_values(&raw_values, &target, algorithm, trace, unchecked)?
        }
    };

    println!("{}", index);
    Ok(())
}

fn parse_value<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("invalid value {:?}", raw))
}

fn search_values<T: Ord + Display>(
    values: &[T],
    target: &T,
    algorithm: Algorithm,
    trace: bool,
    unchecked: bool,
) -> Result<i64> {
    if !unchecked {
        Sorted::new(values).context("refusing to search unsorted input (pass --unchecked to override)")?;
    }

    let mut recorder = ProbeTrace::new();
    let found = algorithm.run_by_observed(values, |probe| probe.cmp(target), &mut recorder);
    log::debug!("{} probes over {} iterations", recorder.probes.len(), recorder.steps.len());

    if trace {
        display::print_trace(values, &recorder, found);
    }
    Ok(to_sentinel(found))
}

// ============================================================================
// COMPARE
// ============================================================================

fn load_compare_config(
    path: Option<&Path>,
    max_exponent: Option<u32>,
    repetitions: Option<usize>,
    samples: Option<usize>,
    seed: Option<u64>,
) -> Result<CompareConfig> {
    let mut config = match path {
        Some(path) => CompareConfig::from_file(path)?,
        None => CompareConfig::default(),
    };

    if let Some(max_exponent) = max_exponent {
        config.max_exponent = max_exponent;
    }
    if let Some(repetitions) = repetitions {
        config.repetitions = repetitions;
    }
    if let Some(samples) = samples {
        config.samples = samples;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }

    config.validate()?;
    log::debug!("compare config: {:?}", config);
    Ok(config)
}

fn run_compare(config: &CompareConfig, json: Option<PathBuf>) -> Result<()> {
    #[cfg(feature = "parallel")]
    let report = {
        let pb = ProgressBar::new(compare::case_count(config) as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Comparing");
        let report = compare::run_with_progress(config, &|_: &compare::CaseResult| pb.inc(1))?;
        pb.finish_and_clear();
        report
    };
    #[cfg(not(feature = "parallel"))]
    let report = compare::run(config)?;

    display::print_report(&report);

    if let Some(path) = json {
        report
            .write_json(&path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        log::info!("report written to {}", path.display());
    }

    if !report.all_passed() {
        bail!("neighbor-probing and classic search disagreed; see report");
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}
