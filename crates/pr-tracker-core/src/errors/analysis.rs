// ABOUTME: Analysis error types for statistics that cannot be computed
// ABOUTME: InsufficientData marks a single statistic as undefined without aborting the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// A statistic could not be computed from the available data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Too few points, or a series with zero variance
    #[error("Insufficient data for {statistic}: {reason}")]
    InsufficientData {
        /// Statistic that was requested
        statistic: &'static str,
        /// Why it is undefined
        reason: String,
    },
}

impl AnalysisError {
    /// Create an `InsufficientData` error
    #[must_use]
    pub fn insufficient(statistic: &'static str, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            statistic,
            reason: reason.into(),
        }
    }

    /// Name of the statistic that failed
    #[must_use]
    pub const fn statistic(&self) -> &'static str {
        match self {
            Self::InsufficientData { statistic, .. } => statistic,
        }
    }
}
