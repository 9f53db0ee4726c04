// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: Preserves crate::errors import paths for ingestion, export, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` and the domain errors live in `pr-tracker-core` so the
//! intelligence crate can use them without depending on this crate.

pub use pr_tracker_core::errors::*;

/// Convert a `csv` failure into an `AppError`
///
/// I/O failures map to `StorageError`; malformed records map to `InvalidFormat`;
/// anything else happened while writing and maps to `SerializationError`.
#[must_use]
pub fn csv_error(error: csv::Error) -> AppError {
    let code = match error.kind() {
        csv::ErrorKind::Io(_) => ErrorCode::StorageError,
        csv::ErrorKind::Utf8 { .. }
        | csv::ErrorKind::UnequalLengths { .. }
        | csv::ErrorKind::Deserialize { .. } => ErrorCode::InvalidFormat,
        _ => ErrorCode::SerializationError,
    };
    AppError::new(code, error.to_string()).with_source(error)
}
