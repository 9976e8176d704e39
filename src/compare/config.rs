// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comparison run configuration.
//!
//! Loaded from JSON (camelCase keys, unknown keys rejected), then overridden
//! field by field from the command line, then validated.
//!
//! ```json
//! { "maxExponent": 5, "repetitions": 500, "samples": 10, "seed": 42 }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Largest supported size exponent. 10^7 elements is ~80 MB per dataset.
pub const MAX_EXPONENT_LIMIT: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CompareConfig {
    /// Sizes run from 10^1 up to 10^max_exponent.
    pub max_exponent: u32,
    /// Calls per timing sample.
    pub repetitions: usize,
    /// Timing samples per (size, scenario, algorithm).
    pub samples: usize,
    /// Seed for dataset generation.
    pub seed: u64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_exponent: 6,
            repetitions: 200,
            samples: 10,
            seed: 0x5EED,
        }
    }
}

impl CompareConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_exponent == 0 || self.max_exponent > MAX_EXPONENT_LIMIT {
            return Err(ConfigError::ExponentOutOfRange {
                value: self.max_exponent,
                max: MAX_EXPONENT_LIMIT,
            });
        }
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }

    /// Dataset sizes: 10, 100, ..., 10^max_exponent.
    pub fn sizes(&self) -> Vec<usize> {
        (1..=self.max_exponent).map(|e| 10usize.pow(e)).collect()
    }
}

/// Why a configuration could not be loaded or used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_exponent` outside `1..=max`.
    ExponentOutOfRange { value: u32, max: u32 },
    /// `repetitions` is zero.
    ZeroRepetitions,
    /// `samples` is zero.
    ZeroSamples,
    /// Config file could not be read.
    Read { path: PathBuf, message: String },
    /// Config text is not valid JSON for this schema.
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ExponentOutOfRange { value, max } => {
                write!(f, "maxExponent {} outside 1..={}", value, max)
            }
            ConfigError::ZeroRepetitions => write!(f, "repetitions must be at least 1"),
            ConfigError::ZeroSamples => write!(f, "samples must be at least 1"),
            ConfigError::Read { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            ConfigError::Parse { message } => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
