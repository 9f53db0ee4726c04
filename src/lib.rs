// ABOUTME: Main library entry point for the PR tracker workout analytics tool
// ABOUTME: Wires ingestion, analysis, report export, and chart series around the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PR Tracker
//!
//! Personal-record statistics and training-volume trends from a workout log.
//!
//! ## Features
//!
//! - **PR events**: running-max detection of every new personal record per exercise
//! - **PR records**: current PR, first/last time it was hit, how often, how long ago
//! - **Weekly volume**: gap-free weekly buckets with 4 and 8 week rolling averages
//! - **Correlation**: whether heavier training weeks line up with more PRs
//! - **Exports**: CSV/JSON report tables and chart-ready JSON series
//!
//! ## Architecture
//!
//! - **`pr-tracker-core`**: models, errors, constants
//! - **`pr-tracker-intelligence`**: pure aggregation over in-memory sets
//! - **this crate**: CSV ingestion, environment config, logging, exports, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pr_tracker::analysis::analyze;
//! use pr_tracker::errors::AppResult;
//! use pr_tracker::ingest::WorkoutLogReader;
//! use pr_tracker::intelligence::AnalysisConfig;
//!
//! fn main() -> AppResult<()> {
//!     let sets = WorkoutLogReader::from_path("workout_data.csv")?;
//!     let now = chrono::Local::now().naive_local();
//!     let report = analyze(&sets, now, &AnalysisConfig::default());
//!
//!     println!("PRs tracked for {} exercises", report.pr_records.len());
//!     Ok(())
//! }
//! ```

/// End-to-end analysis pipeline producing an `AnalysisReport`
pub mod analysis;

/// Chart-ready series and sinks that persist them
pub mod charts;

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Workout log ingestion from CSV
pub mod ingest;

/// Aggregation engine re-exported from the intelligence crate
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models re-exported from the core crate
pub mod models;

/// Report tables and their CSV/JSON export
pub mod reports;
