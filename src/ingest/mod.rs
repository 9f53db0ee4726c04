// ABOUTME: Workout log ingestion turning CSV rows into validated WorkoutSet values
// ABOUTME: Checks required columns, parses timestamps and numbers, and aborts on the first bad row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Log Ingestion
//!
//! The input is a CSV export with at least `exercise_title`, `start_time`,
//! `weight_lbs` and `reps`. Other columns are ignored. An empty `weight_lbs`
//! is a set without load; every other field is required.

use crate::constants::input::{
    COLUMN_EXERCISE_TITLE, COLUMN_REPS, COLUMN_START_TIME, COLUMN_WEIGHT_LBS, REQUIRED_COLUMNS,
    START_TIME_FORMAT,
};
use crate::errors::{csv_error, AppError, AppResult, IngestError};
use crate::models::{WorkoutSet, WorkoutSetBuilder};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One CSV record before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawWorkoutRow {
    /// Exercise name
    pub exercise_title: Option<String>,
    /// Set start time, `%d %b %Y, %H:%M`
    pub start_time: Option<String>,
    /// Load in pounds
    pub weight_lbs: Option<String>,
    /// Repetitions
    pub reps: Option<String>,
}

/// Parse a `start_time` value such as `14 Mar 2024, 18:05`
///
/// # Errors
///
/// Returns a `chrono` parse error if the text does not match the format
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), START_TIME_FORMAT)
}

/// Validate one raw record. `row` is the 1-based data row number.
///
/// # Errors
///
/// Returns `IngestError` when a required field is empty or a value does not parse
pub fn parse_row(row: usize, raw: &RawWorkoutRow) -> Result<WorkoutSet, IngestError> {
    let exercise_title = required(row, COLUMN_EXERCISE_TITLE, raw.exercise_title.as_deref())?;
    let start_time = required(row, COLUMN_START_TIME, raw.start_time.as_deref())?;
    let timestamp =
        parse_start_time(start_time).map_err(|_| IngestError::InvalidTimestamp {
            row,
            exercise_title: exercise_title.to_owned(),
            value: start_time.to_owned(),
        })?;

    let weight = present(raw.weight_lbs.as_deref())
        .map(|value| {
            value.parse::<f64>().map_err(|_| IngestError::InvalidValue {
                row,
                field: COLUMN_WEIGHT_LBS,
                value: value.to_owned(),
            })
        })
        .transpose()?;

    let reps_text = required(row, COLUMN_REPS, raw.reps.as_deref())?;
    let reps = parse_reps(reps_text).ok_or_else(|| IngestError::InvalidValue {
        row,
        field: COLUMN_REPS,
        value: reps_text.to_owned(),
    })?;

    Ok(WorkoutSetBuilder::new(exercise_title, timestamp)
        .maybe_weight(weight)
        .reps(reps)
        .build())
}

/// Non-blank trimmed field value
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn required<'a>(
    row: usize,
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, IngestError> {
    present(value).ok_or(IngestError::MissingField { row, field })
}

/// Rep counts, also accepting whole floats like `8.0` written by spreadsheet tools
fn parse_reps(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().or_else(|| {
        let float = value.parse::<f64>().ok()?;
        (float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= f64::from(u32::MAX))
            .then_some(float as u32)
    })
}

/// Reads a workout log into memory
pub struct WorkoutLogReader;

impl WorkoutLogReader {
    /// Read and validate every set in the CSV file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, or for the first invalid record
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Vec<WorkoutSet>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::storage(format!("cannot open workout log {}: {e}", path.display()))
                .with_source(e)
        })?;
        let sets = Self::from_reader(file)?;
        info!(path = %path.display(), sets = sets.len(), "Loaded workout log");
        Ok(sets)
    }

    /// Read and validate every set from CSV text
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is absent, the CSV is malformed,
    /// or a record fails validation
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Vec<WorkoutSet>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(csv_error)?;
        if let Some(column) = REQUIRED_COLUMNS
            .into_iter()
            .find(|column| !headers.iter().any(|header| header == *column))
        {
            return Err(IngestError::MissingColumn { column }.into());
        }

        let mut sets = Vec::new();
        for (index, record) in csv_reader.deserialize::<RawWorkoutRow>().enumerate() {
            let raw = record.map_err(csv_error)?;
            sets.push(parse_row(index + 1, &raw)?);
        }

        debug!(sets = sets.len(), "Parsed workout rows");
        Ok(sets)
    }
}
