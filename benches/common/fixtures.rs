// ABOUTME: Benchmark fixtures generating realistic workout logs
// ABOUTME: Deterministic sets across rotating exercises so runs are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating workout sets.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pr_tracker::models::WorkoutSet;

/// Exercises rotated through the generated log
const EXERCISES: [(&str, f64); 6] = [
    ("Bench Press (Barbell)", 135.0),
    ("Squat (Barbell)", 185.0),
    ("Deadlift (Barbell)", 225.0),
    ("Lat Pulldown (Cable)", 100.0),
    ("Leg Extension", 80.0),
    ("Pull Up", 0.0),
];

/// Predefined log sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LogSize {
    /// A month of training
    Small,
    /// About a year of training
    Medium,
    /// Several years of training
    Large,
}

impl LogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 200,
            Self::Medium => 2_000,
            Self::Large => 20_000,
        }
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 1, 3)
        .and_then(|date| date.and_hms_opt(18, 0, 0))
        .unwrap_or_default()
}

/// Generate one set; loads drift upward with occasional deload weeks
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_set(index: usize) -> WorkoutSet {
    let (title, base_weight) = EXERCISES[index % EXERCISES.len()];
    let session = (index / 12) as i64;
    let timestamp = base_time()
        + Duration::days(session * 2)
        + Duration::minutes((index % 12) as i64 * 4);

    let progression = (index / 60) as f64 * 2.5;
    let deload = if session % 9 == 8 { 0.8 } else { 1.0 };
    let weight = (base_weight > 0.0).then(|| (base_weight + progression) * deload);
    let reps = 5 + (index * 7 % 8) as u32;

    WorkoutSet::new(title, timestamp, weight, reps)
}

/// Generate a deterministic log of the given size
#[must_use]
pub fn generate_sets(size: LogSize) -> Vec<WorkoutSet> {
    (0..size.count()).map(generate_set).collect()
}
