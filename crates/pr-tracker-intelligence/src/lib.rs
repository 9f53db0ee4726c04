// ABOUTME: PR detection, weekly volume aggregation, and training statistics engine
// ABOUTME: Pure single-pass analytics over in-memory workout sets with an injected clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PR Tracker Intelligence
//!
//! The aggregator half of the workspace. Every entry point is a deterministic
//! function of the workout sets it receives plus, where relevant, an explicit
//! evaluation time. Nothing here reads the system clock or touches the
//! filesystem.
//!
//! ## Pipeline
//!
//! 1. `grouping` hash-partitions sets by exercise and stable-sorts each partition by time
//! 2. `pr_detection` scans partitions with a running maximum to emit `PrEvent`s and `PrRecord`s
//! 3. `weekly_volume` buckets sets into a gap-free weekly timeline with rolling averages
//! 4. `statistical_analysis` correlates weekly volume with weekly PR counts

/// Analysis thresholds and week configuration
pub mod config;

/// Per-exercise total volume ranking
pub mod exercise_volume;

/// Partitioning of sets by exercise in timestamp order
pub mod grouping;

/// Data-set level training overview
pub mod overview;

/// Running-max PR event extraction and PR records
pub mod pr_detection;

/// PR step series for progression charts
pub mod progression;

/// Pearson correlation and least-squares trend line
pub mod statistical_analysis;

/// Weekly volume buckets and rolling averages
pub mod weekly_volume;

pub use config::{AnalysisConfig, ConfigError};
pub use exercise_volume::{ExerciseVolume, ExerciseVolumeRanker};
pub use grouping::partition_by_exercise;
pub use overview::TrainingOverview;
pub use pr_detection::{PrDetector, PrSummary};
pub use progression::{PrProgression, ProgressionPoint};
pub use statistical_analysis::{
    CorrelationDirection, CorrelationStrength, StatisticalAnalyzer, TrendLine, VolumeCorrelation,
};
pub use weekly_volume::{rolling_average, VolumeAggregator};
