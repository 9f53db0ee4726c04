// ABOUTME: Console report commands for pr-tracker
// ABOUTME: Handles overview, prs, weekly, correlate, and progression output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pr_tracker::{analysis::AnalysisReport, intelligence::PrProgression, models::WorkoutSet};

use crate::helpers::display::{
    display_correlation, display_overview, display_pr_table, display_progression, display_weekly,
    section,
};

/// Headline numbers and the heaviest lift
pub fn overview(report: &AnalysisReport) {
    display_overview(&report.overview, &report.pr_summary);
}

/// Heaviest PRs followed by the recent, stale and consistent lists
pub fn prs(report: &AnalysisReport, top: usize) {
    section(&format!("Top {top} heaviest lifts"));
    display_pr_table(report.top_prs(top));

    section(&format!("Recent PRs ({})", report.recent_prs.len()));
    display_pr_table(&report.recent_prs);

    section(&format!("Stale PRs ({})", report.stale_prs.len()));
    display_pr_table(&report.stale_prs);

    section(&format!("Consistent PRs ({})", report.consistent_prs.len()));
    display_pr_table(&report.consistent_prs);
}

/// Weekly volume timeline
pub fn weekly(report: &AnalysisReport) {
    section(&format!("Weekly volume ({} weeks)", report.weekly.len()));
    display_weekly(&report.weekly);
}

/// Volume vs PR correlation
pub fn correlate(report: &AnalysisReport) {
    section("Training volume vs PRs");
    display_correlation(report.correlation.as_ref());
}

/// PR progression of each requested exercise
pub fn progression(sets: &[WorkoutSet], exercises: &[String]) {
    for title in exercises {
        section(&format!("{title} - PR progression"));
        match PrProgression::for_exercise(sets, title) {
            Some(progression) => display_progression(&progression),
            None => println!("No data found for {title}"),
        }
    }
}
