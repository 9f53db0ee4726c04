// ABOUTME: Unit tests for weekly volume bucketing and rolling averages
// ABOUTME: Covers gap weeks, week-start alignment, volume and PR count preservation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Weekday;
use common::{at, bodyweight_set, day, sample_sets, set};
use pr_tracker::intelligence::{rolling_average, PrDetector, VolumeAggregator};
use pr_tracker::models::WorkoutSet;

#[test]
fn test_gap_week_is_zero_filled() {
    let weeks = VolumeAggregator::bucket_weekly(&sample_sets(), Weekday::Mon);

    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0].week_start, day(2024, 1, 1));
    assert_eq!(weeks[1].week_start, day(2024, 1, 8));
    assert_eq!(weeks[2].week_start, day(2024, 1, 15));

    let gap = &weeks[1];
    assert!(gap.total_volume.abs() < f64::EPSILON);
    assert_eq!(gap.set_count, 0);
    assert_eq!(gap.pr_count, 0);
    assert!(!gap.is_active());
}

#[test]
fn test_bodyweight_sets_count_without_volume() {
    let weeks = VolumeAggregator::bucket_weekly(&sample_sets(), Weekday::Mon);
    let first = &weeks[0];

    assert_eq!(first.set_count, 4);
    let expected = 135.0 * 8.0 + 145.0 * 5.0 + 90.0 * 12.0;
    assert!((first.total_volume - expected).abs() < 1e-9);
}

#[test]
fn test_volume_sum_is_preserved() {
    let sets = sample_sets();
    let weeks = VolumeAggregator::bucket_weekly(&sets, Weekday::Mon);

    let bucketed: f64 = weeks.iter().map(|w| w.total_volume).sum();
    let direct: f64 = sets.iter().map(WorkoutSet::volume).sum();
    assert!((bucketed - direct).abs() < 1e-9);

    let counted: usize = weeks.iter().map(|w| w.set_count).sum();
    assert_eq!(counted, sets.len());
}

#[test]
fn test_pr_count_sum_matches_events() {
    let sets = sample_sets();
    let weeks = VolumeAggregator::bucket_weekly(&sets, Weekday::Mon);

    let pr_total: usize = weeks.iter().map(|w| w.pr_count).sum();
    assert_eq!(pr_total, PrDetector::extract_pr_events(&sets).len());
    assert_eq!(weeks[0].pr_count, 3);
    assert_eq!(weeks[2].pr_count, 2);
}

#[test]
fn test_rolling_four_week_mean() {
    let sets: Vec<WorkoutSet> = (0..10)
        .map(|week| {
            let date = day(2024, 1, 1) + chrono::Duration::weeks(week);
            set(
                "Squat",
                date.and_hms_opt(10, 0, 0).unwrap(),
                100.0 + (week as f64) * 10.0,
                5,
            )
        })
        .collect();
    let weeks = VolumeAggregator::bucket_weekly(&sets, Weekday::Mon);
    assert_eq!(weeks.len(), 10);

    for (i, week) in weeks.iter().enumerate() {
        if i < 3 {
            assert!(week.volume_4wk_avg.is_none());
        } else {
            let mean = weeks[i - 3..=i].iter().map(|w| w.total_volume).sum::<f64>() / 4.0;
            assert!((week.volume_4wk_avg.unwrap() - mean).abs() < 1e-9);
        }
        assert_eq!(week.volume_8wk_avg.is_some(), i >= 7);
    }
}

#[test]
fn test_week_start_alignment() {
    // 2024-01-03 is a Wednesday
    let wednesday = day(2024, 1, 3);
    assert_eq!(
        VolumeAggregator::week_start_for(wednesday, Weekday::Mon),
        day(2024, 1, 1)
    );
    assert_eq!(
        VolumeAggregator::week_start_for(wednesday, Weekday::Sun),
        day(2023, 12, 31)
    );
    assert_eq!(
        VolumeAggregator::week_start_for(wednesday, Weekday::Wed),
        wednesday
    );
}

#[test]
fn test_sunday_weeks_regroup_sets() {
    let sets = vec![
        set("Row", at(2024, 1, 6, 10), 100.0, 10),
        set("Row", at(2024, 1, 7, 10), 100.0, 10),
    ];

    let monday = VolumeAggregator::bucket_weekly(&sets, Weekday::Mon);
    assert_eq!(monday.len(), 1);

    let sunday = VolumeAggregator::bucket_weekly(&sets, Weekday::Sun);
    assert_eq!(sunday.len(), 2);
    assert_eq!(sunday[1].week_start, day(2024, 1, 7));
}

#[test]
fn test_empty_input_has_no_weeks() {
    assert!(VolumeAggregator::bucket_weekly(&[], Weekday::Mon).is_empty());
}

#[test]
fn test_bodyweight_only_log_has_zero_volume_weeks() {
    let sets = vec![bodyweight_set("Push Up", at(2024, 1, 1, 8), 20)];
    let weeks = VolumeAggregator::bucket_weekly(&sets, Weekday::Mon);

    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].set_count, 1);
    assert_eq!(weeks[0].pr_count, 0);
}

#[test]
fn test_rolling_average_helper() {
    let averages = rolling_average(&[1.0, 2.0, 3.0, 4.0], 2);
    assert_eq!(averages, vec![None, Some(1.5), Some(2.5), Some(3.5)]);

    assert_eq!(rolling_average(&[1.0, 2.0], 3), vec![None, None]);
    assert_eq!(rolling_average(&[1.0], 0), vec![None]);
}
