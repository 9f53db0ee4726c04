// ABOUTME: Integration tests for workout log ingestion from CSV
// ABOUTME: Validates column checks, record parsing, and row-level error reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, SAMPLE_CSV};
use pr_tracker::errors::{ErrorCode, IngestError};
use pr_tracker::ingest::WorkoutLogReader;
use std::error::Error;
use std::io::Write;

#[test]
fn test_reads_sample_log() {
    let sets = WorkoutLogReader::from_reader(SAMPLE_CSV.as_bytes()).unwrap();

    assert_eq!(sets.len(), 7);
    assert_eq!(sets[0].exercise_title(), "Bench Press (Barbell)");
    assert_eq!(sets[0].timestamp(), at(2024, 1, 1, 18));
    assert_eq!(sets[0].weight(), Some(135.0));
    assert_eq!(sets[0].reps(), 8);

    let pull_up = &sets[3];
    assert_eq!(pull_up.exercise_title(), "Pull Up");
    assert_eq!(pull_up.weight(), None);
    assert_eq!(pull_up.reps(), 10);
}

#[test]
fn test_missing_column_is_rejected() {
    let csv = "exercise_title,start_time,reps\nSquat,\"01 Jan 2024, 10:00\",5\n";
    let err = WorkoutLogReader::from_reader(csv.as_bytes()).unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("weight_lbs"));
}

#[test]
fn test_bad_timestamp_carries_record_identity() {
    let csv = "exercise_title,start_time,weight_lbs,reps\n\
               Squat,\"01 Jan 2024, 10:00\",225,5\n\
               Deadlift,2024-01-02T10:00,315,3\n";
    let err = WorkoutLogReader::from_reader(csv.as_bytes()).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
    let source = err
        .source()
        .and_then(|s| s.downcast_ref::<IngestError>())
        .unwrap();
    assert_eq!(
        source,
        &IngestError::InvalidTimestamp {
            row: 2,
            exercise_title: "Deadlift".into(),
            value: "2024-01-02T10:00".into(),
        }
    );
}

#[test]
fn test_missing_title_aborts() {
    let csv = "exercise_title,start_time,weight_lbs,reps\n,\"01 Jan 2024, 10:00\",225,5\n";
    let err = WorkoutLogReader::from_reader(csv.as_bytes()).unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("exercise_title"));
}

#[test]
fn test_non_numeric_weight_is_invalid_value() {
    let csv = "exercise_title,start_time,weight_lbs,reps\nSquat,\"01 Jan 2024, 10:00\",heavy,5\n";
    let err = WorkoutLogReader::from_reader(csv.as_bytes()).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.message.contains("heavy"));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

    let sets = WorkoutLogReader::from_path(file.path()).unwrap();
    assert_eq!(sets.len(), 7);
}

#[test]
fn test_from_path_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WorkoutLogReader::from_path(dir.path().join("absent.csv")).unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_header_only_log_is_empty() {
    let csv = "exercise_title,start_time,weight_lbs,reps\n";
    assert!(WorkoutLogReader::from_reader(csv.as_bytes()).unwrap().is_empty());
}
