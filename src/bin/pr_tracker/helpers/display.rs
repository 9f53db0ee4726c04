// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pr-tracker
// ABOUTME: Provides fixed-width console tables for PRs, weeks, correlation, and progressions

use pr_tracker::{
    constants::report::DATE_FORMAT,
    intelligence::{PrProgression, PrSummary, TrainingOverview, VolumeCorrelation},
    models::{PrRecord, WeeklySummary},
};

const RULE_WIDTH: usize = 80;

/// Print a section heading
pub fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Display headline numbers for the log
pub fn display_overview(overview: &TrainingOverview, summary: &PrSummary) {
    section("Data overview");
    println!("   Total sets: {}", overview.total_sets);
    println!("   Weighted sets: {}", overview.weighted_sets);
    println!("   Unique exercises: {}", overview.unique_exercises);
    if let (Some(first), Some(last)) = (overview.first_set_at, overview.last_set_at) {
        println!(
            "   Date range: {} to {}",
            first.format(DATE_FORMAT),
            last.format(DATE_FORMAT)
        );
    }
    println!("   Total volume: {:.0} lbs", overview.total_volume);
    println!("   Weeks analyzed: {}", overview.weeks_analyzed);
    if let Some(volume) = overview.average_weekly_volume {
        println!("   Average weekly volume: {volume:.0} lbs");
    }
    if let Some(sets) = overview.average_weekly_sets {
        println!("   Average sets per week: {sets:.1}");
    }
    if let Some(prs) = overview.average_weekly_prs {
        println!("   Average PRs per week: {prs:.2}");
    }

    section("PR summary");
    println!("   Exercises with a PR: {}", summary.exercise_count);
    if let Some(heaviest) = &summary.heaviest {
        println!(
            "   Heaviest lift: {} at {:.1} lbs",
            heaviest.exercise_title, heaviest.max_weight
        );
    }
    if let Some(average) = summary.average_pr_weight {
        println!("   Average PR weight: {average:.1} lbs");
    }
}

/// Display PR records as a table
pub fn display_pr_table(records: &[PrRecord]) {
    if records.is_empty() {
        println!("   (none)");
        return;
    }
    println!(
        "{:<36} {:>9} {:>12} {:>12} {:>5} {:>6}",
        "Exercise", "PR (lbs)", "First", "Last", "Hits", "Days"
    );
    for record in records {
        println!(
            "{:<36} {:>9.1} {:>12} {:>12} {:>5} {:>6}",
            truncate(&record.exercise_title, 36),
            record.max_weight,
            record.first_achieved_at.format(DATE_FORMAT).to_string(),
            record.last_achieved_at.format(DATE_FORMAT).to_string(),
            record.times_hit,
            record.days_since_last
        );
    }
}

/// Display the weekly timeline
pub fn display_weekly(weeks: &[WeeklySummary]) {
    if weeks.is_empty() {
        println!("   (no sets)");
        return;
    }
    println!(
        "{:<12} {:>12} {:>6} {:>5} {:>12} {:>12}",
        "Week", "Volume", "Sets", "PRs", "4wk avg", "8wk avg"
    );
    for week in weeks {
        println!(
            "{:<12} {:>12.0} {:>6} {:>5} {:>12} {:>12}",
            week.week_start.to_string(),
            week.total_volume,
            week.set_count,
            week.pr_count,
            optional(week.volume_4wk_avg),
            optional(week.volume_8wk_avg)
        );
    }
}

/// Display the correlation, or why it is undefined
pub fn display_correlation(correlation: Option<&VolumeCorrelation>) {
    let Some(correlation) = correlation else {
        println!("   Correlation undefined: need at least two weeks with varying volume and PRs");
        return;
    };
    println!("   Weeks: {}", correlation.weeks);
    println!("   Correlation (r): {:.3}", correlation.coefficient);
    println!(
        "   Interpretation: {:?} {:?} relationship",
        correlation.strength, correlation.direction
    );
    println!(
        "   Trend line: PRs = {:.6} x volume + {:.3}",
        correlation.trend_line.slope, correlation.trend_line.intercept
    );
}

/// Display the PR steps of one exercise
pub fn display_progression(progression: &PrProgression) {
    for point in &progression.points {
        println!(
            "   {}  {:>8.1} lbs",
            point.timestamp.format(DATE_FORMAT),
            point.weight
        );
    }
    if let (Some(max), Some(gain)) = (progression.current_max(), progression.total_gain()) {
        println!("   Current PR: {max:.1} lbs (+{gain:.1} lbs since first PR)");
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.0}"))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_owned()
    } else {
        text.chars().take(width - 1).chain(['~']).collect()
    }
}
