// ABOUTME: Statistical analysis of weekly training volume against weekly PR counts
// ABOUTME: Pearson correlation, least-squares trend line, and correlation strength classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: week counts are far below f64 precision

use pr_tracker_core::constants::correlation::{MIN_WEEKS, MODERATE_UPPER_BOUND, WEAK_UPPER_BOUND};
use pr_tracker_core::errors::AnalysisError;
use pr_tracker_core::models::WeeklySummary;
use serde::{Deserialize, Serialize};

/// Strength of a correlation, judged on its absolute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationStrength {
    /// |r| < 0.3
    Weak,
    /// 0.3 <= |r| < 0.7
    Moderate,
    /// |r| >= 0.7
    Strong,
}

impl CorrelationStrength {
    /// Classify a correlation coefficient
    #[must_use]
    pub fn from_coefficient(coefficient: f64) -> Self {
        let magnitude = coefficient.abs();
        if magnitude < WEAK_UPPER_BOUND {
            Self::Weak
        } else if magnitude < MODERATE_UPPER_BOUND {
            Self::Moderate
        } else {
            Self::Strong
        }
    }
}

/// Sign of a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationDirection {
    /// More volume tends to come with more PRs
    Positive,
    /// More volume tends to come with fewer PRs
    Negative,
}

impl CorrelationDirection {
    /// Direction of a correlation coefficient; zero counts as negative
    #[must_use]
    pub fn from_coefficient(coefficient: f64) -> Self {
        if coefficient > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Least-squares line `pr_count = slope * total_volume + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// PRs gained per unit of weekly volume
    pub slope: f64,
    /// PR count predicted at zero volume
    pub intercept: f64,
}

impl TrendLine {
    /// Evaluate the line at `volume`
    #[must_use]
    pub fn predict(&self, volume: f64) -> f64 {
        self.slope.mul_add(volume, self.intercept)
    }
}

/// Correlation between weekly volume and weekly PR count, with interpretation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeCorrelation {
    /// Pearson correlation coefficient
    pub coefficient: f64,
    /// Strength classification
    pub strength: CorrelationStrength,
    /// Sign classification
    pub direction: CorrelationDirection,
    /// Least-squares fit of PRs on volume
    pub trend_line: TrendLine,
    /// Number of weeks used
    pub weeks: usize,
}

/// Centered sums over paired samples
struct PairedMoments {
    count: usize,
    mean_x: f64,
    mean_y: f64,
    sum_xx: f64,
    sum_yy: f64,
    sum_xy: f64,
}

impl PairedMoments {
    fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let n = pairs.len() as f64;
        let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (mut sum_xx, mut sum_yy, mut sum_xy) = (0.0, 0.0, 0.0);
        for (x, y) in pairs {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sum_xx = dx.mul_add(dx, sum_xx);
            sum_yy = dy.mul_add(dy, sum_yy);
            sum_xy = dx.mul_add(dy, sum_xy);
        }

        Self {
            count: pairs.len(),
            mean_x,
            mean_y,
            sum_xx,
            sum_yy,
            sum_xy,
        }
    }
}

/// Statistical analyzer for weekly summaries
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Pearson correlation between `total_volume` and `pr_count` across weeks.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InsufficientData` with fewer than two weeks, or
    /// when either series has zero variance.
    pub fn correlate(summaries: &[WeeklySummary]) -> Result<f64, AnalysisError> {
        let moments = Self::moments("correlation", summaries)?;
        if moments.sum_yy <= f64::EPSILON {
            return Err(AnalysisError::insufficient(
                "correlation",
                "weekly PR count has zero variance",
            ));
        }

        let coefficient = moments.sum_xy / (moments.sum_xx * moments.sum_yy).sqrt();
        Ok(coefficient.clamp(-1.0, 1.0))
    }

    /// Fit a least-squares line of weekly PR count on weekly volume.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InsufficientData` with fewer than two weeks or
    /// when weekly volume has zero variance.
    pub fn fit_trend_line(summaries: &[WeeklySummary]) -> Result<TrendLine, AnalysisError> {
        let moments = Self::moments("trend line", summaries)?;
        let slope = moments.sum_xy / moments.sum_xx;
        Ok(TrendLine {
            slope,
            intercept: slope.mul_add(-moments.mean_x, moments.mean_y),
        })
    }

    /// Correlation, its interpretation and the trend line in one pass over the data
    ///
    /// # Errors
    ///
    /// Propagates the failures of `correlate` and `fit_trend_line`.
    pub fn volume_correlation(
        summaries: &[WeeklySummary],
    ) -> Result<VolumeCorrelation, AnalysisError> {
        let coefficient = Self::correlate(summaries)?;
        let trend_line = Self::fit_trend_line(summaries)?;
        Ok(VolumeCorrelation {
            coefficient,
            strength: CorrelationStrength::from_coefficient(coefficient),
            direction: CorrelationDirection::from_coefficient(coefficient),
            trend_line,
            weeks: Self::defined_pairs(summaries).len(),
        })
    }

    /// (volume, PR count) pairs for weeks with finite values
    fn defined_pairs(summaries: &[WeeklySummary]) -> Vec<(f64, f64)> {
        summaries
            .iter()
            .filter(|week| week.total_volume.is_finite())
            .map(|week| (week.total_volume, week.pr_count as f64))
            .collect()
    }

    /// Shared validation for statistics of PR count against volume
    fn moments(
        statistic: &'static str,
        summaries: &[WeeklySummary],
    ) -> Result<PairedMoments, AnalysisError> {
        let pairs = Self::defined_pairs(summaries);
        if pairs.len() < MIN_WEEKS {
            return Err(AnalysisError::insufficient(
                statistic,
                format!("need at least {MIN_WEEKS} weeks, got {}", pairs.len()),
            ));
        }

        let moments = PairedMoments::from_pairs(&pairs);
        if moments.sum_xx <= f64::EPSILON {
            return Err(AnalysisError::insufficient(
                statistic,
                format!(
                    "weekly volume has zero variance across {} weeks",
                    moments.count
                ),
            ));
        }
        Ok(moments)
    }
}
