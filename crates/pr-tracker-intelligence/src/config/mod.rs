// ABOUTME: Analysis configuration for PR filters, rankings, and week bucketing
// ABOUTME: Typed defaults with validation and a thiserror-based ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration
//!
//! Thresholds used when filtering and ranking PR records, the day a week
//! bucket starts on, and the exercises that get progression charts.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use chrono::Weekday;
use pr_tracker_core::constants::records::{
    CONSISTENT_PR_HITS, RECENT_PR_DAYS, STALE_PR_DAYS, TOP_PR_COUNT, TOP_VOLUME_EXERCISE_COUNT,
};
use serde::{Deserialize, Serialize};

/// Exercises charted individually by default
const DEFAULT_TRACKED_EXERCISES: [&str; 3] = [
    "Bench Press (Barbell)",
    "Leg Extension",
    "Lat Pulldown (Cable)",
];

/// Pressing variations compared on one chart by default
const DEFAULT_COMPARISON_EXERCISES: [&str; 5] = [
    "Bench Press (Barbell)",
    "Bench Press (Dumbbell)",
    "Bench Press (Smith Machine)",
    "Incline Bench Press (Smith Machine)",
    "Incline Bench Press (Dumbbell)",
];

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Day each week bucket starts on
    pub week_starts_on: Weekday,
    /// A PR hit within this many days is recent
    pub recent_pr_days: i64,
    /// A PR not hit for more than this many days is stale
    pub stale_pr_days: i64,
    /// A PR hit at least this many times is consistent
    pub consistent_pr_hits: usize,
    /// Rows in the heaviest-lifts table
    pub top_pr_count: usize,
    /// Rows in the volume-by-exercise ranking
    pub top_volume_exercise_count: usize,
    /// Exercises that get their own progression chart
    pub tracked_exercises: Vec<String>,
    /// Exercises compared on a shared progression chart
    pub comparison_exercises: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            week_starts_on: Weekday::Mon,
            recent_pr_days: RECENT_PR_DAYS,
            stale_pr_days: STALE_PR_DAYS,
            consistent_pr_hits: CONSISTENT_PR_HITS,
            top_pr_count: TOP_PR_COUNT,
            top_volume_exercise_count: TOP_VOLUME_EXERCISE_COUNT,
            tracked_exercises: DEFAULT_TRACKED_EXERCISES.map(str::to_owned).to_vec(),
            comparison_exercises: DEFAULT_COMPARISON_EXERCISES.map(str::to_owned).to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Check thresholds for internal consistency
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a threshold is negative, zero where a
    /// positive count is needed, or the stale threshold is below the recent one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_pr_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_pr_days must not be negative",
            ));
        }
        if self.stale_pr_days < self.recent_pr_days {
            return Err(ConfigError::InvalidRange(
                "stale_pr_days must be at least recent_pr_days",
            ));
        }
        if self.consistent_pr_hits == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "consistent_pr_hits must be at least 1",
            ));
        }
        if self.top_pr_count == 0 || self.top_volume_exercise_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "ranking sizes must be at least 1",
            ));
        }
        Ok(())
    }

    /// Parse a week-start day name (`mon`, `Monday`, `sun`, ...)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for an unknown day name.
    pub fn parse_weekday(value: &str) -> Result<Weekday, ConfigError> {
        value
            .trim()
            .parse::<Weekday>()
            .map_err(|_| ConfigError::Parse(format!("unknown week start day '{value}'")))
    }
}
