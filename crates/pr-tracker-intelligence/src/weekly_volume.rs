// ABOUTME: Weekly training volume aggregation on a gap-free calendar timeline
// ABOUTME: Buckets sets by configurable week start, counts PR events, and computes rolling averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::pr_detection::PrDetector;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use pr_tracker_core::constants::volume::{
    DAYS_PER_WEEK, LONG_ROLLING_WINDOW_WEEKS, SHORT_ROLLING_WINDOW_WEEKS,
};
use pr_tracker_core::models::{WeeklySummary, WorkoutSet};
use tracing::debug;

/// Weekly volume aggregation engine
pub struct VolumeAggregator;

impl VolumeAggregator {
    /// First day of the week containing `date`
    #[must_use]
    pub fn week_start_for(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
        let offset = (i64::from(date.weekday().num_days_from_monday())
            - i64::from(week_starts_on.num_days_from_monday()))
        .rem_euclid(DAYS_PER_WEEK);
        date - Duration::days(offset)
    }

    /// Bucket every set into the week containing its timestamp.
    ///
    /// The output covers every week from the one holding the earliest set to
    /// the one holding the latest, inclusive; weeks without sets are present
    /// with zero volume, sets and PRs so the rolling averages run over a
    /// uniform timeline. Bodyweight sets are counted but add no volume.
    /// `pr_count` counts the PR events detected over the same input.
    #[must_use]
    pub fn bucket_weekly(sets: &[WorkoutSet], week_starts_on: Weekday) -> Vec<WeeklySummary> {
        let (Some(first_set), Some(last_set)) = (
            sets.iter().map(WorkoutSet::timestamp).min(),
            sets.iter().map(WorkoutSet::timestamp).max(),
        ) else {
            return Vec::new();
        };

        let first_week = Self::week_start_for(first_set.date(), week_starts_on);
        let last_week = Self::week_start_for(last_set.date(), week_starts_on);
        let week_count = Self::week_index(first_week, last_week) + 1;

        let mut summaries: Vec<WeeklySummary> = (0..week_count)
            .map(|index| {
                let offset = i64::try_from(index).unwrap_or(i64::MAX / DAYS_PER_WEEK);
                WeeklySummary::empty(first_week + Duration::days(offset * DAYS_PER_WEEK))
            })
            .collect();

        for set in sets {
            let week = Self::week_start_for(set.timestamp().date(), week_starts_on);
            if let Some(summary) = summaries.get_mut(Self::week_index(first_week, week)) {
                summary.total_volume += set.volume();
                summary.set_count += 1;
            }
        }

        for event in PrDetector::extract_pr_events(sets) {
            let week = Self::week_start_for(event.timestamp.date(), week_starts_on);
            if let Some(summary) = summaries.get_mut(Self::week_index(first_week, week)) {
                summary.pr_count += 1;
            }
        }

        let volumes: Vec<f64> = summaries.iter().map(|s| s.total_volume).collect();
        let short = rolling_average(&volumes, SHORT_ROLLING_WINDOW_WEEKS);
        let long = rolling_average(&volumes, LONG_ROLLING_WINDOW_WEEKS);
        for ((summary, short_avg), long_avg) in summaries.iter_mut().zip(short).zip(long) {
            summary.volume_4wk_avg = short_avg;
            summary.volume_8wk_avg = long_avg;
        }

        debug!(
            weeks = summaries.len(),
            sets = sets.len(),
            week_start = %week_starts_on,
            "Bucketed weekly volume"
        );
        summaries
    }

    /// Index of `week` on the timeline starting at `first_week`
    fn week_index(first_week: NaiveDate, week: NaiveDate) -> usize {
        usize::try_from((week - first_week).num_days() / DAYS_PER_WEEK).unwrap_or(0)
    }
}

/// Trailing mean over `window` values.
///
/// Position `i` holds the mean of `values[i + 1 - window..=i]`. The first
/// `window - 1` positions have insufficient history and are `None` rather
/// than zero. A zero window yields no defined values.
#[must_use]
pub fn rolling_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = window as f64;
    (0..values.len())
        .map(|index| {
            (index + 1 >= window)
                .then(|| values[index + 1 - window..=index].iter().sum::<f64>() / divisor)
        })
        .collect()
}
