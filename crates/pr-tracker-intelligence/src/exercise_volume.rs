// ABOUTME: All-time training volume per exercise
// ABOUTME: Ranks exercises by total reps x weight for the volume leaderboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::grouping::partition_by_exercise;
use pr_tracker_core::models::WorkoutSet;
use serde::{Deserialize, Serialize};

/// Total work logged for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseVolume {
    /// Exercise identifier
    pub exercise_title: String,
    /// Sum of `reps * weight` over all sets
    pub total_volume: f64,
    /// Number of sets logged
    pub set_count: usize,
}

/// Per-exercise volume ranking
pub struct ExerciseVolumeRanker;

impl ExerciseVolumeRanker {
    /// Every exercise with its total volume, highest first (ties by title)
    #[must_use]
    pub fn rank(sets: &[WorkoutSet]) -> Vec<ExerciseVolume> {
        let mut ranking: Vec<ExerciseVolume> = partition_by_exercise(sets)
            .into_iter()
            .map(|(title, group)| ExerciseVolume {
                exercise_title: title.to_owned(),
                total_volume: group.iter().map(|set| set.volume()).sum(),
                set_count: group.len(),
            })
            .collect();

        ranking.sort_by(|a, b| {
            b.total_volume
                .total_cmp(&a.total_volume)
                .then_with(|| a.exercise_title.cmp(&b.exercise_title))
        });
        ranking
    }
}
