// ABOUTME: Ingestion error types for raw workout rows
// ABOUTME: Missing fields, unparsable timestamps, and invalid numeric values with row identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Failure turning a raw workout row into a `WorkoutSet`.
///
/// Every variant aborts the run: a partially ingested log would make the
/// downstream reports silently wrong. `row` is 1-based over data rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    /// The input has no column with this name
    #[error("Input is missing required column '{column}'")]
    MissingColumn {
        /// Name of the absent column
        column: &'static str,
    },

    /// A record lacks a value for a required field
    #[error("Row {row}: missing required field '{field}'")]
    MissingField {
        /// Data row number
        row: usize,
        /// Name of the empty field
        field: &'static str,
    },

    /// `start_time` does not parse under the expected format
    #[error("Row {row} ({exercise_title}): invalid start_time '{value}'")]
    InvalidTimestamp {
        /// Data row number
        row: usize,
        /// Exercise of the offending record
        exercise_title: String,
        /// Raw timestamp text
        value: String,
    },

    /// A numeric field holds something that is not a valid number
    #[error("Row {row}: invalid value '{value}' for field '{field}'")]
    InvalidValue {
        /// Data row number
        row: usize,
        /// Name of the field
        field: &'static str,
        /// Raw field text
        value: String,
    },
}

impl IngestError {
    /// Data row the error refers to, when it is row-specific
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::MissingColumn { .. } => None,
            Self::MissingField { row, .. }
            | Self::InvalidTimestamp { row, .. }
            | Self::InvalidValue { row, .. } => Some(*row),
        }
    }
}
