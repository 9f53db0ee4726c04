// ABOUTME: Data-set level overview of a workout log
// ABOUTME: Set counts, exercise counts, date range, all-time volume, and weekly averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: set and week counts

use chrono::NaiveDateTime;
use pr_tracker_core::models::{WeeklySummary, WorkoutSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Headline numbers for a workout log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOverview {
    /// All sets in the log
    pub total_sets: usize,
    /// Sets eligible for PR detection (weight > 0)
    pub weighted_sets: usize,
    /// Distinct exercise titles
    pub unique_exercises: usize,
    /// Earliest set
    pub first_set_at: Option<NaiveDateTime>,
    /// Latest set
    pub last_set_at: Option<NaiveDateTime>,
    /// Sum of `reps * weight` over every set
    pub total_volume: f64,
    /// Weeks on the weekly timeline, including empty ones
    pub weeks_analyzed: usize,
    /// Mean weekly volume
    pub average_weekly_volume: Option<f64>,
    /// Mean sets per week
    pub average_weekly_sets: Option<f64>,
    /// Mean PRs per week
    pub average_weekly_prs: Option<f64>,
}

impl TrainingOverview {
    /// Build the overview from the raw sets and their weekly buckets
    #[must_use]
    pub fn from_sets(sets: &[WorkoutSet], weekly: &[WeeklySummary]) -> Self {
        let unique_exercises = sets
            .iter()
            .map(WorkoutSet::exercise_title)
            .collect::<HashSet<_>>()
            .len();

        let weeks = weekly.len() as f64;
        let weekly_mean = |value: fn(&WeeklySummary) -> f64| {
            (!weekly.is_empty()).then(|| weekly.iter().map(value).sum::<f64>() / weeks)
        };

        Self {
            total_sets: sets.len(),
            weighted_sets: sets.iter().filter(|s| s.pr_weight().is_some()).count(),
            unique_exercises,
            first_set_at: sets.iter().map(WorkoutSet::timestamp).min(),
            last_set_at: sets.iter().map(WorkoutSet::timestamp).max(),
            total_volume: sets.iter().map(WorkoutSet::volume).sum(),
            weeks_analyzed: weekly.len(),
            average_weekly_volume: weekly_mean(|w| w.total_volume),
            average_weekly_sets: weekly_mean(|w| w.set_count as f64),
            average_weekly_prs: weekly_mean(|w| w.pr_count as f64),
        }
    }
}
