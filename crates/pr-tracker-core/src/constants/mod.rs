// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Input formats, analysis windows, and report thresholds for the PR tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the concern that reads them rather than kept in a
//! single flat list.

/// Workout log input format
pub mod input {
    /// `chrono` format of the `start_time` column (e.g. `14 Mar 2024, 18:05`)
    pub const START_TIME_FORMAT: &str = "%d %b %Y, %H:%M";

    /// Column holding the exercise name
    pub const COLUMN_EXERCISE_TITLE: &str = "exercise_title";
    /// Column holding the set start time
    pub const COLUMN_START_TIME: &str = "start_time";
    /// Column holding the load in pounds (nullable)
    pub const COLUMN_WEIGHT_LBS: &str = "weight_lbs";
    /// Column holding the repetition count
    pub const COLUMN_REPS: &str = "reps";

    /// Columns every input row must provide
    pub const REQUIRED_COLUMNS: [&str; 4] = [
        COLUMN_EXERCISE_TITLE,
        COLUMN_START_TIME,
        COLUMN_WEIGHT_LBS,
        COLUMN_REPS,
    ];
}

/// Report output format
pub mod report {
    /// Date format used for first/last achieved columns
    pub const DATE_FORMAT: &str = "%d %b %Y";

    /// File stem of the exported PR table
    pub const PR_REPORT_STEM: &str = "my_prs";
    /// File stem of the exported weekly summary table
    pub const WEEKLY_REPORT_STEM: &str = "weekly_summary";
}

/// Weekly volume aggregation
pub mod volume {
    /// Short trailing window for rolling volume averages (weeks)
    pub const SHORT_ROLLING_WINDOW_WEEKS: usize = 4;
    /// Long trailing window for rolling volume averages (weeks)
    pub const LONG_ROLLING_WINDOW_WEEKS: usize = 8;
    /// Days in a week bucket
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// PR record filters and rankings
pub mod records {
    /// PRs hit within this many days count as recent
    pub const RECENT_PR_DAYS: i64 = 30;
    /// PRs not hit for more than this many days count as stale
    pub const STALE_PR_DAYS: i64 = 180;
    /// PRs hit at least this many times count as consistent
    pub const CONSISTENT_PR_HITS: usize = 10;
    /// Size of the heaviest-lifts table
    pub const TOP_PR_COUNT: usize = 10;
    /// Size of the volume-by-exercise ranking
    pub const TOP_VOLUME_EXERCISE_COUNT: usize = 15;
    /// Seconds in a day, for whole-day differences
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Correlation strength thresholds on |r|
pub mod correlation {
    /// Below this |r| the correlation is weak
    pub const WEAK_UPPER_BOUND: f64 = 0.3;
    /// Below this |r| (and at or above the weak bound) the correlation is moderate
    pub const MODERATE_UPPER_BOUND: f64 = 0.7;
    /// Minimum number of weeks for correlation and trend fitting
    pub const MIN_WEEKS: usize = 2;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at logging startup
    pub const PR_TRACKER: &str = "pr-tracker";
}
