// ABOUTME: Core data models re-exported from the core crate
// ABOUTME: WorkoutSet, PrRecord, PrEvent, and WeeklySummary under crate::models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pr_tracker_core::models::*;
