// ABOUTME: Shared test utilities for PR tracker integration tests
// ABOUTME: Provides timestamp helpers, set constructors, sample logs, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pr_tracker`

use chrono::{NaiveDate, NaiveDateTime};
use pr_tracker::models::WorkoutSet;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Calendar day
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Timestamp at `hour:00` on a calendar day
pub fn at(year: i32, month: u32, dom: u32, hour: u32) -> NaiveDateTime {
    day(year, month, dom).and_hms_opt(hour, 0, 0).unwrap()
}

/// Weighted set
pub fn set(title: &str, timestamp: NaiveDateTime, weight: f64, reps: u32) -> WorkoutSet {
    WorkoutSet::new(title, timestamp, Some(weight), reps)
}

/// Set without a recorded load
pub fn bodyweight_set(title: &str, timestamp: NaiveDateTime, reps: u32) -> WorkoutSet {
    WorkoutSet::new(title, timestamp, None, reps)
}

/// Two exercises over three weeks starting Monday 2024-01-01, with an empty middle week
pub fn sample_sets() -> Vec<WorkoutSet> {
    vec![
        set("Bench Press (Barbell)", at(2024, 1, 1, 18), 135.0, 8),
        set("Bench Press (Barbell)", at(2024, 1, 3, 18), 145.0, 5),
        set("Leg Extension", at(2024, 1, 2, 18), 90.0, 12),
        bodyweight_set("Pull Up", at(2024, 1, 2, 19), 10),
        set("Bench Press (Barbell)", at(2024, 1, 15, 18), 155.0, 3),
        set("Leg Extension", at(2024, 1, 16, 18), 90.0, 12),
        set("Leg Extension", at(2024, 1, 17, 18), 100.0, 10),
    ]
}

/// CSV text matching the tracking app export layout
pub const SAMPLE_CSV: &str = "\
title,start_time,end_time,exercise_title,set_index,weight_lbs,reps
Push,\"01 Jan 2024, 18:00\",\"01 Jan 2024, 19:00\",Bench Press (Barbell),0,135,8
Push,\"03 Jan 2024, 18:00\",\"03 Jan 2024, 19:00\",Bench Press (Barbell),0,145,5
Legs,\"02 Jan 2024, 18:00\",\"02 Jan 2024, 19:00\",Leg Extension,0,90,12
Pull,\"02 Jan 2024, 19:00\",\"02 Jan 2024, 20:00\",Pull Up,0,,10
Push,\"15 Jan 2024, 18:00\",\"15 Jan 2024, 19:00\",Bench Press (Barbell),0,155,3
Legs,\"16 Jan 2024, 18:00\",\"16 Jan 2024, 19:00\",Leg Extension,0,90,12
Legs,\"17 Jan 2024, 18:00\",\"17 Jan 2024, 19:00\",Leg Extension,0,100,10
";
