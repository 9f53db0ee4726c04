// ABOUTME: WorkoutSet model and builder for a single recorded exercise set
// ABOUTME: Provides PR-eligible weight and volume accessors shared by all aggregations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded exercise set
///
/// Fields are private so a set cannot change after ingestion. Use
/// `WorkoutSet::new` for the common case and `WorkoutSetBuilder` when the
/// weight is optional.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use pr_tracker_core::models::WorkoutSet;
///
/// let performed_at = NaiveDate::from_ymd_opt(2024, 3, 14)
///     .and_then(|d| d.and_hms_opt(18, 5, 0))
///     .unwrap_or_default();
/// let set = WorkoutSet::new("Bench Press (Barbell)", performed_at, Some(185.0), 5);
///
/// assert_eq!(set.pr_weight(), Some(185.0));
/// assert!((set.volume() - 925.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    exercise_title: String,
    timestamp: NaiveDateTime,
    weight: Option<f64>,
    reps: u32,
}

impl WorkoutSet {
    /// Create a set with all fields
    #[must_use]
    pub fn new(
        exercise_title: impl Into<String>,
        timestamp: NaiveDateTime,
        weight: Option<f64>,
        reps: u32,
    ) -> Self {
        Self {
            exercise_title: exercise_title.into(),
            timestamp,
            weight,
            reps,
        }
    }

    /// Exercise identifier
    #[must_use]
    pub fn exercise_title(&self) -> &str {
        &self.exercise_title
    }

    /// When the set was performed
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Recorded load, absent for bodyweight sets
    #[must_use]
    pub const fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Repetition count
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Weight usable for PR detection: present, finite and strictly positive
    #[must_use]
    pub fn pr_weight(&self) -> Option<f64> {
        self.weight.filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Work performed in this set (`reps * weight`); bodyweight sets contribute 0
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.pr_weight()
            .map_or(0.0, |weight| f64::from(self.reps) * weight)
    }
}

/// Builder for `WorkoutSet`
#[must_use]
pub struct WorkoutSetBuilder {
    set: WorkoutSet,
}

impl WorkoutSetBuilder {
    /// Start a bodyweight set with one rep
    pub fn new(exercise_title: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            set: WorkoutSet::new(exercise_title, timestamp, None, 1),
        }
    }

    /// Set the load
    pub fn weight(mut self, weight: f64) -> Self {
        self.set.weight = Some(weight);
        self
    }

    /// Set the load from an optional value
    pub fn maybe_weight(mut self, weight: Option<f64>) -> Self {
        self.set.weight = weight;
        self
    }

    /// Set the repetition count
    pub fn reps(mut self, reps: u32) -> Self {
        self.set.reps = reps;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> WorkoutSet {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap_or_default()
    }

    #[test]
    fn test_non_positive_weight_is_not_pr_eligible() {
        let zero = WorkoutSetBuilder::new("Pull Up", at(1)).weight(0.0).reps(8).build();
        let negative = WorkoutSetBuilder::new("Pull Up", at(1)).weight(-20.0).reps(8).build();
        let missing = WorkoutSetBuilder::new("Pull Up", at(1)).reps(8).build();

        assert_eq!(zero.pr_weight(), None);
        assert_eq!(negative.pr_weight(), None);
        assert_eq!(missing.pr_weight(), None);
        assert!(zero.volume().abs() < f64::EPSILON);
        assert!(negative.volume().abs() < f64::EPSILON);
        assert!(missing.volume().abs() < f64::EPSILON);
    }

    #[test]
    fn test_volume_is_reps_times_weight() {
        let set = WorkoutSet::new("Leg Extension", at(2), Some(120.5), 10);
        assert!((set.volume() - 1205.0).abs() < 1e-9);
    }
}
