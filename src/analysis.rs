// ABOUTME: End-to-end analysis pipeline composing PR detection, weekly volume, and statistics
// ABOUTME: Produces one serializable AnalysisReport that the CLI, exports, and charts consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis pipeline
//!
//! Statistics that need more data than the log has are reported as `None`;
//! they never abort the run.

use crate::intelligence::{
    AnalysisConfig, ExerciseVolume, ExerciseVolumeRanker, PrDetector, PrProgression, PrSummary,
    StatisticalAnalyzer, TrainingOverview, VolumeAggregator, VolumeCorrelation,
};
use crate::models::{PrEvent, PrRecord, WeeklySummary, WorkoutSet};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything derived from one workout log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Evaluation time used for day counts
    pub generated_at: NaiveDateTime,
    /// Headline numbers
    pub overview: TrainingOverview,
    /// Every new PR, grouped by exercise in title order
    pub pr_events: Vec<PrEvent>,
    /// Current PR per exercise, in title order
    pub pr_records: Vec<PrRecord>,
    /// PR records heaviest first
    pub ranked_prs: Vec<PrRecord>,
    /// Heaviest lift and average PR weight
    pub pr_summary: PrSummary,
    /// PRs hit within the recent window
    pub recent_prs: Vec<PrRecord>,
    /// PRs not hit for longer than the stale window
    pub stale_prs: Vec<PrRecord>,
    /// PRs matched at least the consistency threshold
    pub consistent_prs: Vec<PrRecord>,
    /// Gap-free weekly timeline
    pub weekly: Vec<WeeklySummary>,
    /// Volume vs PR correlation, `None` when undefined for this log
    pub correlation: Option<VolumeCorrelation>,
    /// Exercises ranked by total volume, truncated to the configured size
    pub exercise_volumes: Vec<ExerciseVolume>,
    /// Progressions of the tracked exercises
    pub progressions: Vec<PrProgression>,
    /// Progressions of the comparison group
    pub comparison: Vec<PrProgression>,
}

impl AnalysisReport {
    /// The heaviest lifts, limited to `count`
    #[must_use]
    pub fn top_prs(&self, count: usize) -> &[PrRecord] {
        &self.ranked_prs[..count.min(self.ranked_prs.len())]
    }
}

/// Run every analysis over `sets`, evaluated at `now`
#[must_use]
pub fn analyze(sets: &[WorkoutSet], now: NaiveDateTime, config: &AnalysisConfig) -> AnalysisReport {
    let pr_events = PrDetector::extract_pr_events(sets);
    let pr_records = PrDetector::compute_pr_records(sets, now);
    let ranked_prs = PrDetector::rank_by_weight(&pr_records);
    let pr_summary = PrSummary::from_records(&pr_records);

    let recent_prs = owned(PrDetector::recent_prs(&pr_records, config.recent_pr_days));
    let stale_prs = owned(PrDetector::stale_prs(&pr_records, config.stale_pr_days));
    let consistent_prs = owned(PrDetector::consistent_prs(
        &pr_records,
        config.consistent_pr_hits,
    ));

    let weekly = VolumeAggregator::bucket_weekly(sets, config.week_starts_on);
    let overview = TrainingOverview::from_sets(sets, &weekly);

    let correlation = match StatisticalAnalyzer::volume_correlation(&weekly) {
        Ok(correlation) => Some(correlation),
        Err(e) => {
            warn!(statistic = e.statistic(), "Statistic undefined: {e}");
            None
        }
    };

    let mut exercise_volumes = ExerciseVolumeRanker::rank(sets);
    exercise_volumes.truncate(config.top_volume_exercise_count);

    let progressions = PrProgression::compare(sets, &config.tracked_exercises);
    let comparison = PrProgression::compare(sets, &config.comparison_exercises);

    info!(
        sets = sets.len(),
        events = pr_events.len(),
        exercises = pr_records.len(),
        weeks = weekly.len(),
        "Analysis complete"
    );

    AnalysisReport {
        generated_at: now,
        overview,
        pr_events,
        pr_records,
        ranked_prs,
        pr_summary,
        recent_prs,
        stale_prs,
        consistent_prs,
        weekly,
        correlation,
        exercise_volumes,
        progressions,
        comparison,
    }
}

fn owned(records: Vec<&PrRecord>) -> Vec<PrRecord> {
    records.into_iter().cloned().collect()
}
