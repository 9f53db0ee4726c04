// ABOUTME: Derived records computed from workout sets on every run
// ABOUTME: PrEvent, PrRecord, and WeeklySummary with serde support for report export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A point where an exercise's running maximum weight strictly increases
///
/// Within one exercise, events are ordered by timestamp and strictly
/// increasing in `new_max_weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrEvent {
    /// Exercise the PR belongs to
    pub exercise_title: String,
    /// When the new maximum was lifted
    pub timestamp: NaiveDateTime,
    /// The new running maximum
    pub new_max_weight: f64,
}

/// Personal record details for one exercise
///
/// Not authoritative state: recomputed on each run and exported as a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrRecord {
    /// Exercise identifier
    pub exercise_title: String,
    /// Heaviest weight among the exercise's sets with weight > 0
    pub max_weight: f64,
    /// Earliest set at `max_weight`
    pub first_achieved_at: NaiveDateTime,
    /// Latest set at `max_weight`
    pub last_achieved_at: NaiveDateTime,
    /// Number of sets at `max_weight`
    pub times_hit: usize,
    /// Whole days between the evaluation time and `last_achieved_at`
    pub days_since_last: i64,
}

/// Training summary for one calendar week bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// First day of the week bucket
    pub week_start: NaiveDate,
    /// Sum of `reps * weight` over the week's sets
    pub total_volume: f64,
    /// Number of sets performed in the week
    pub set_count: usize,
    /// Number of PR events falling in the week
    pub pr_count: usize,
    /// Mean weekly volume over the trailing 4 weeks, absent until 4 weeks of history exist
    pub volume_4wk_avg: Option<f64>,
    /// Mean weekly volume over the trailing 8 weeks, absent until 8 weeks of history exist
    pub volume_8wk_avg: Option<f64>,
}

impl WeeklySummary {
    /// A week with no recorded sets
    #[must_use]
    pub const fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            total_volume: 0.0,
            set_count: 0,
            pr_count: 0,
            volume_4wk_avg: None,
            volume_8wk_avg: None,
        }
    }

    /// Whether any set was recorded in this week
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.set_count > 0
    }
}
