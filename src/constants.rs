// ABOUTME: Application constants and environment variable names for the PR tracker
// ABOUTME: Re-exports core constants and adds environment configuration keys and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Core analysis constants plus the environment variables this crate reads.

pub use pr_tracker_core::constants::*;

/// Environment variable names
pub mod env_config {
    /// Path of the workout log CSV
    pub const DATA_PATH: &str = "PR_TRACKER_DATA_PATH";
    /// Directory receiving exported reports and chart series
    pub const OUTPUT_DIR: &str = "PR_TRACKER_OUTPUT_DIR";
    /// Day week buckets start on
    pub const WEEK_START: &str = "PR_TRACKER_WEEK_START";
    /// Report format (`csv` or `json`)
    pub const REPORT_FORMAT: &str = "PR_TRACKER_REPORT_FORMAT";
    /// Recent PR threshold in days
    pub const RECENT_DAYS: &str = "PR_TRACKER_RECENT_DAYS";
    /// Stale PR threshold in days
    pub const STALE_DAYS: &str = "PR_TRACKER_STALE_DAYS";
    /// Consistent PR threshold in hits
    pub const CONSISTENT_HITS: &str = "PR_TRACKER_CONSISTENT_HITS";
}

/// Defaults used when the environment is silent
pub mod defaults {
    /// Workout log exported by the tracking app
    pub const DATA_PATH: &str = "workout_data.csv";
    /// Output directory for reports and charts
    pub const OUTPUT_DIR: &str = "visualizations";
}
