// ABOUTME: Running-max personal record detection over per-exercise time series
// ABOUTME: Extracts PR events, builds PR records with an injected clock, and filters/ranks them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::grouping::partition_by_exercise;
use chrono::NaiveDateTime;
use pr_tracker_core::constants::records::SECONDS_PER_DAY;
use pr_tracker_core::models::{PrEvent, PrRecord, WorkoutSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Personal record detection engine
pub struct PrDetector;

impl PrDetector {
    /// Extract the points where each exercise's running maximum weight strictly increases.
    ///
    /// Sets with a missing or non-positive weight are dropped first. The
    /// remaining sets are partitioned by exercise and scanned in timestamp
    /// order; the first set of every exercise always establishes a PR. Events
    /// are grouped by exercise (ascending title), chronological within each.
    #[must_use]
    pub fn extract_pr_events<'a, I>(sets: I) -> Vec<PrEvent>
    where
        I: IntoIterator<Item = &'a WorkoutSet>,
    {
        let partitions = partition_by_exercise(
            sets.into_iter()
                .filter(|set| set.pr_weight().is_some()),
        );

        let mut events = Vec::new();
        for (title, group) in &partitions {
            let mut running_max: Option<f64> = None;
            for set in group {
                let Some(weight) = set.pr_weight() else {
                    continue;
                };
                if running_max.is_none_or(|max| weight > max) {
                    running_max = Some(weight);
                    events.push(PrEvent {
                        exercise_title: (*title).to_owned(),
                        timestamp: set.timestamp(),
                        new_max_weight: weight,
                    });
                }
            }
        }

        debug!(
            exercises = partitions.len(),
            events = events.len(),
            "Extracted PR events"
        );
        events
    }

    /// Compute one `PrRecord` per exercise with at least one weighted set.
    ///
    /// `now` is the evaluation time used for `days_since_last`. Every set at
    /// the maximum weight counts toward `times_hit`; the earliest and latest of
    /// them fill the first/last achieved timestamps.
    #[must_use]
    pub fn compute_pr_records<'a, I>(sets: I, now: NaiveDateTime) -> Vec<PrRecord>
    where
        I: IntoIterator<Item = &'a WorkoutSet>,
    {
        let partitions = partition_by_exercise(
            sets.into_iter()
                .filter(|set| set.pr_weight().is_some()),
        );

        let records: Vec<PrRecord> = partitions
            .iter()
            .filter_map(|(title, group)| Self::record_for_exercise(title, group, now))
            .collect();

        debug!(records = records.len(), %now, "Computed PR records");
        records
    }

    /// Build the record for one time-ordered exercise partition
    fn record_for_exercise(
        title: &str,
        ordered_sets: &[&WorkoutSet],
        now: NaiveDateTime,
    ) -> Option<PrRecord> {
        let max_weight = ordered_sets
            .iter()
            .filter_map(|set| set.pr_weight())
            .max_by(f64::total_cmp)?;

        let mut at_max = ordered_sets.iter().filter(|set| {
            set.pr_weight()
                .is_some_and(|weight| weight.total_cmp(&max_weight) == Ordering::Equal)
        });

        let first = at_max.next()?;
        let mut last = first;
        let mut times_hit = 1;
        for set in at_max {
            last = set;
            times_hit += 1;
        }

        Some(PrRecord {
            exercise_title: title.to_owned(),
            max_weight,
            first_achieved_at: first.timestamp(),
            last_achieved_at: last.timestamp(),
            times_hit,
            days_since_last: whole_days_between(last.timestamp(), now),
        })
    }

    /// PRs last hit within `days` days of the evaluation time
    #[must_use]
    pub fn recent_prs(records: &[PrRecord], days: i64) -> Vec<&PrRecord> {
        records
            .iter()
            .filter(|record| record.days_since_last <= days)
            .collect()
    }

    /// PRs not hit for more than `days` days
    #[must_use]
    pub fn stale_prs(records: &[PrRecord], days: i64) -> Vec<&PrRecord> {
        records
            .iter()
            .filter(|record| record.days_since_last > days)
            .collect()
    }

    /// PRs matched at least `min_hits` times
    #[must_use]
    pub fn consistent_prs(records: &[PrRecord], min_hits: usize) -> Vec<&PrRecord> {
        records
            .iter()
            .filter(|record| record.times_hit >= min_hits)
            .collect()
    }

    /// Records ordered heaviest first, ties broken by exercise title
    #[must_use]
    pub fn rank_by_weight(records: &[PrRecord]) -> Vec<PrRecord> {
        let mut ranked = records.to_vec();
        ranked.sort_by(|a, b| {
            b.max_weight
                .total_cmp(&a.max_weight)
                .then_with(|| a.exercise_title.cmp(&b.exercise_title))
        });
        ranked
    }
}

/// Whole days from `earlier` to `later`, floored
fn whole_days_between(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    (later - earlier).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Headline numbers across all PR records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrSummary {
    /// Number of exercises with a PR
    pub exercise_count: usize,
    /// Heaviest PR across all exercises
    pub heaviest: Option<PrRecord>,
    /// Mean PR weight across exercises
    pub average_pr_weight: Option<f64>,
}

impl PrSummary {
    /// Summarize a set of PR records
    #[must_use]
    pub fn from_records(records: &[PrRecord]) -> Self {
        let heaviest = PrDetector::rank_by_weight(records).into_iter().next();
        #[allow(clippy::cast_precision_loss)]
        let average_pr_weight = if records.is_empty() {
            None
        } else {
            Some(records.iter().map(|r| r.max_weight).sum::<f64>() / records.len() as f64)
        };

        Self {
            exercise_count: records.len(),
            heaviest,
            average_pr_weight,
        }
    }
}
