// ABOUTME: Configuration module for the PR tracker command line and library
// ABOUTME: Combines analysis thresholds with input, output, and report format settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: paths, report format, and analysis overrides from `PR_TRACKER_*` variables
//! - **Analysis**: thresholds and bucketing re-exported from the intelligence crate

/// Environment-driven tracker configuration
pub mod environment;

pub use crate::intelligence::config::{AnalysisConfig, ConfigError};
pub use environment::TrackerConfig;
