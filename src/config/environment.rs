// ABOUTME: Environment configuration for input path, output directory, and analysis thresholds
// ABOUTME: Reads PR_TRACKER_* variables over typed defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use crate::intelligence::config::{AnalysisConfig, ConfigError};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Settings for one tracker run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Workout log CSV to read
    pub data_path: PathBuf,
    /// Directory receiving reports and chart series
    pub output_dir: PathBuf,
    /// Format of exported report tables
    pub report_format: ReportFormat,
    /// Thresholds and bucketing for the analysis
    pub analysis: AnalysisConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(defaults::DATA_PATH),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            report_format: ReportFormat::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from `PR_TRACKER_*` environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is not valid unicode, fails to
    /// parse, or the resulting analysis thresholds are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = env_string(env_config::DATA_PATH)? {
            config.data_path = PathBuf::from(path);
        }
        if let Some(dir) = env_string(env_config::OUTPUT_DIR)? {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(format) = env_parse::<ReportFormat>(env_config::REPORT_FORMAT)? {
            config.report_format = format;
        }
        if let Some(day) = env_string(env_config::WEEK_START)? {
            config.analysis.week_starts_on = AnalysisConfig::parse_weekday(&day)?;
        }
        if let Some(days) = env_parse(env_config::RECENT_DAYS)? {
            config.analysis.recent_pr_days = days;
        }
        if let Some(days) = env_parse(env_config::STALE_DAYS)? {
            config.analysis.stale_pr_days = days;
        }
        if let Some(hits) = env_parse(env_config::CONSISTENT_HITS)? {
            config.analysis.consistent_pr_hits = hits;
        }

        config.analysis.validate()?;
        debug!(
            data_path = %config.data_path.display(),
            output_dir = %config.output_dir.display(),
            format = ?config.report_format,
            "Loaded tracker configuration"
        );
        Ok(config)
    }
}

/// Read a variable, treating an unset or blank value as absent
fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::EnvVar(err)),
    }
}

/// Read and parse a variable
fn env_parse<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_string(key)?
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|e| ConfigError::Parse(format!("{key}='{value}': {e}")))
        })
        .transpose()
}
