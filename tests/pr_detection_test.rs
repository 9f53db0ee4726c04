// ABOUTME: Unit tests for PR event extraction, PR records, and record filters
// ABOUTME: Covers running-max semantics, tie handling, exclusions, and day counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, bodyweight_set, sample_sets, set};
use pr_tracker::intelligence::{PrDetector, PrSummary};
use pr_tracker::models::{PrEvent, WorkoutSet};

fn scenario_sets() -> Vec<WorkoutSet> {
    vec![
        set("A", at(2024, 3, 1, 10), 100.0, 5),
        set("A", at(2024, 3, 2, 10), 110.0, 3),
        set("A", at(2024, 3, 3, 10), 100.0, 5),
        set("A", at(2024, 3, 4, 10), 110.0, 2),
    ]
}

#[test]
fn test_events_follow_running_max() {
    let events = PrDetector::extract_pr_events(&scenario_sets());

    assert_eq!(
        events,
        vec![
            PrEvent {
                exercise_title: "A".into(),
                timestamp: at(2024, 3, 1, 10),
                new_max_weight: 100.0,
            },
            PrEvent {
                exercise_title: "A".into(),
                timestamp: at(2024, 3, 2, 10),
                new_max_weight: 110.0,
            },
        ]
    );
}

#[test]
fn test_record_counts_every_hit_at_max() {
    let records = PrDetector::compute_pr_records(&scenario_sets(), at(2024, 3, 10, 10));

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!((record.max_weight - 110.0).abs() < f64::EPSILON);
    assert_eq!(record.times_hit, 2);
    assert_eq!(record.first_achieved_at, at(2024, 3, 2, 10));
    assert_eq!(record.last_achieved_at, at(2024, 3, 4, 10));
    assert_eq!(record.days_since_last, 6);
}

#[test]
fn test_unsorted_input_is_ordered_by_time() {
    let mut sets = scenario_sets();
    sets.reverse();
    let events = PrDetector::extract_pr_events(&sets);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].timestamp, at(2024, 3, 1, 10));
    assert!((events[1].new_max_weight - 110.0).abs() < f64::EPSILON);
}

#[test]
fn test_last_event_equals_max_and_events_strictly_increase() {
    let sets = sample_sets();
    let events = PrDetector::extract_pr_events(&sets);

    for title in ["Bench Press (Barbell)", "Leg Extension"] {
        let exercise_events: Vec<&PrEvent> =
            events.iter().filter(|e| e.exercise_title == title).collect();
        let max = sets
            .iter()
            .filter(|s| s.exercise_title() == title)
            .filter_map(WorkoutSet::pr_weight)
            .fold(f64::MIN, f64::max);

        let last = exercise_events.last().unwrap();
        assert!((last.new_max_weight - max).abs() < f64::EPSILON);
        for pair in exercise_events.windows(2) {
            assert!(pair[1].new_max_weight > pair[0].new_max_weight);
            assert!(pair[1].timestamp >= pair[0].timestamp);
        }
    }
}

#[test]
fn test_invalid_weights_are_excluded() {
    let sets = vec![
        bodyweight_set("Pull Up", at(2024, 1, 1, 10), 10),
        set("Pull Up", at(2024, 1, 2, 10), 0.0, 10),
        set("Pull Up", at(2024, 1, 3, 10), -20.0, 10),
        set("Dip", at(2024, 1, 3, 10), f64::NAN, 10),
    ];

    assert!(PrDetector::extract_pr_events(&sets).is_empty());
    assert!(PrDetector::compute_pr_records(&sets, at(2024, 2, 1, 0)).is_empty());
}

#[test]
fn test_events_grouped_by_title() {
    let events = PrDetector::extract_pr_events(&sample_sets());
    let titles: Vec<&str> = events.iter().map(|e| e.exercise_title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "Bench Press (Barbell)",
            "Bench Press (Barbell)",
            "Bench Press (Barbell)",
            "Leg Extension",
            "Leg Extension",
        ]
    );
}

#[test]
fn test_days_since_last_is_floored() {
    let sets = vec![set("Squat", at(2024, 1, 1, 18), 225.0, 5)];

    let same_evening = PrDetector::compute_pr_records(&sets, at(2024, 1, 2, 17));
    assert_eq!(same_evening[0].days_since_last, 0);

    let next_day = PrDetector::compute_pr_records(&sets, at(2024, 1, 2, 18));
    assert_eq!(next_day[0].days_since_last, 1);
}

#[test]
fn test_record_filters() {
    let sets = vec![
        set("Recent", at(2024, 6, 25, 10), 100.0, 5),
        set("Old", at(2023, 6, 1, 10), 100.0, 5),
        set("Middle", at(2024, 3, 1, 10), 100.0, 5),
    ];
    let records = PrDetector::compute_pr_records(&sets, at(2024, 7, 1, 10));

    let recent: Vec<&str> = PrDetector::recent_prs(&records, 30)
        .iter()
        .map(|r| r.exercise_title.as_str())
        .collect();
    assert_eq!(recent, vec!["Recent"]);

    let stale: Vec<&str> = PrDetector::stale_prs(&records, 180)
        .iter()
        .map(|r| r.exercise_title.as_str())
        .collect();
    assert_eq!(stale, vec!["Old"]);
}

#[test]
fn test_consistent_prs_threshold_is_inclusive() {
    let mut sets: Vec<WorkoutSet> = (1..=10)
        .map(|d| set("Row", at(2024, 1, d, 10), 150.0, 8))
        .collect();
    sets.push(set("Curl", at(2024, 1, 1, 10), 40.0, 10));
    let records = PrDetector::compute_pr_records(&sets, at(2024, 2, 1, 10));

    let consistent = PrDetector::consistent_prs(&records, 10);
    assert_eq!(consistent.len(), 1);
    assert_eq!(consistent[0].exercise_title, "Row");
}

#[test]
fn test_rank_by_weight_and_summary() {
    let records = PrDetector::compute_pr_records(&sample_sets(), at(2024, 2, 1, 0));
    let ranked = PrDetector::rank_by_weight(&records);

    assert_eq!(ranked[0].exercise_title, "Bench Press (Barbell)");
    assert_eq!(ranked[1].exercise_title, "Leg Extension");

    let summary = PrSummary::from_records(&records);
    assert_eq!(summary.exercise_count, 2);
    assert_eq!(
        summary.heaviest.unwrap().exercise_title,
        "Bench Press (Barbell)"
    );
    assert!((summary.average_pr_weight.unwrap() - 127.5).abs() < 1e-9);
}

#[test]
fn test_empty_summary() {
    let summary = PrSummary::from_records(&[]);
    assert_eq!(summary.exercise_count, 0);
    assert!(summary.heaviest.is_none());
    assert!(summary.average_pr_weight.is_none());
}
