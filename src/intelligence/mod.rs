// ABOUTME: Intelligence module re-exports from the pr-tracker-intelligence crate
// ABOUTME: Keeps crate::intelligence paths stable for the pipeline, CLI, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! PR detection and training volume analytics, re-exported from the
//! `pr-tracker-intelligence` crate.

// Re-export all public items from pr-tracker-intelligence
pub use pr_tracker_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::weekly_volume::rolling_average)
pub use pr_tracker_intelligence::{
    config, exercise_volume, grouping, overview, pr_detection, progression, statistical_analysis,
    weekly_volume,
};
