// ABOUTME: PR progression series for individual exercises and side-by-side comparisons
// ABOUTME: Turns PR events into step series a charting collaborator can plot directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::pr_detection::PrDetector;
use chrono::NaiveDateTime;
use pr_tracker_core::models::{PrEvent, WorkoutSet};
use serde::{Deserialize, Serialize};

/// One step of a PR progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// When the PR was set
    pub timestamp: NaiveDateTime,
    /// Running maximum after this PR
    pub weight: f64,
}

/// PR history of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrProgression {
    /// Exercise identifier
    pub exercise_title: String,
    /// PR steps in chronological order
    pub points: Vec<ProgressionPoint>,
}

impl PrProgression {
    /// Current PR (last step)
    #[must_use]
    pub fn current_max(&self) -> Option<f64> {
        self.points.last().map(|point| point.weight)
    }

    /// Weight gained from the first PR to the current one
    #[must_use]
    pub fn total_gain(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some(last.weight - first.weight),
            _ => None,
        }
    }

    /// PR progression of one exercise, `None` when it has no weighted sets
    #[must_use]
    pub fn for_exercise(sets: &[WorkoutSet], exercise_title: &str) -> Option<Self> {
        let events = PrDetector::extract_pr_events(
            sets.iter()
                .filter(|set| set.exercise_title() == exercise_title),
        );
        Self::from_events(&events).into_iter().next()
    }

    /// Progressions for the requested exercises, in request order, skipping ones without data
    #[must_use]
    pub fn compare(sets: &[WorkoutSet], exercise_titles: &[String]) -> Vec<Self> {
        exercise_titles
            .iter()
            .filter_map(|title| Self::for_exercise(sets, title))
            .collect()
    }

    /// Group PR events into one progression per exercise
    ///
    /// Expects events grouped by exercise, as `PrDetector::extract_pr_events` emits them.
    #[must_use]
    pub fn from_events(events: &[PrEvent]) -> Vec<Self> {
        let mut progressions: Vec<Self> = Vec::new();
        for event in events {
            let point = ProgressionPoint {
                timestamp: event.timestamp,
                weight: event.new_max_weight,
            };
            match progressions.last_mut() {
                Some(current) if current.exercise_title == event.exercise_title => {
                    current.points.push(point);
                }
                _ => progressions.push(Self {
                    exercise_title: event.exercise_title.clone(),
                    points: vec![point],
                }),
            }
        }
        progressions
    }
}
