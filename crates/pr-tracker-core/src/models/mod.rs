// ABOUTME: Core data models for workout logs and the statistics derived from them
// ABOUTME: Re-exports WorkoutSet, PrRecord, PrEvent, and WeeklySummary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutSet`: one recorded exercise set, read once and immutable afterwards
//! - `PrEvent`: a point where an exercise's running maximum weight strictly increases
//! - `PrRecord`: per-exercise personal record details
//! - `WeeklySummary`: volume, set and PR counts for one calendar week bucket
//!
//! Timestamps are naive wall-clock times, matching the workout log which records
//! local time without an offset.

mod records;
mod workout_set;

pub use records::{PrEvent, PrRecord, WeeklySummary};
pub use workout_set::{WorkoutSet, WorkoutSetBuilder};
