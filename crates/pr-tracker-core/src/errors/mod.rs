// ABOUTME: Unified error handling for the PR tracker workspace
// ABOUTME: Defines ErrorCode, AppError, AppResult and re-exports domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain errors (`IngestError`, `AnalysisError`) carry structured context for
//! the stage that produced them. At the application boundary they convert into
//! `AppError`, which pairs a stable `ErrorCode` with a human-readable message.

/// Errors raised while turning raw workout rows into `WorkoutSet`s
pub mod ingest;

/// Errors raised by statistics that need more data than is available
pub mod analysis;

pub use analysis::AnalysisError;
pub use ingest::IngestError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    InvalidInput = 3000,
    /// A required field or column is missing
    MissingRequiredField = 3001,
    /// A value does not match the expected format
    InvalidFormat = 3002,

    // Analysis (4000-4999)
    /// Not enough data points for the requested statistic
    InsufficientData = 4000,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    ConfigInvalid = 6002,

    // Storage (9000-9999)
    /// Reading or writing a file failed
    StorageError = 9002,
    /// Serializing a report or chart failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the record",
            Self::InvalidFormat => "The data format is invalid",
            Self::InsufficientData => "Not enough data to compute the statistic",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Process exit code for CLI front-ends
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::InvalidFormat => 65,
            Self::InsufficientData => 66,
            Self::ConfigInvalid => 78,
            Self::StorageError => 74,
            Self::SerializationError => 70,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// File read/write failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Report or chart serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<IngestError> for AppError {
    fn from(error: IngestError) -> Self {
        let code = match &error {
            IngestError::MissingField { .. } | IngestError::MissingColumn { .. } => {
                ErrorCode::MissingRequiredField
            }
            IngestError::InvalidTimestamp { .. } | IngestError::InvalidValue { .. } => {
                ErrorCode::InvalidFormat
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        Self::new(ErrorCode::InsufficientData, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
