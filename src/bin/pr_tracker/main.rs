// ABOUTME: pr-tracker - command-line front-end for personal record and training volume analytics
// ABOUTME: Loads a workout log, runs the analysis pipeline, and prints or exports the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Headline numbers for the default log (workout_data.csv)
//! pr-tracker overview
//!
//! # Ten heaviest PRs plus recent, stale and consistent lists
//! pr-tracker --data my_log.csv prs --top 10
//!
//! # Weekly volume with rolling averages, weeks starting on Sunday
//! pr-tracker --week-start sun weekly
//!
//! # Does heavier training line up with more PRs?
//! pr-tracker correlate
//!
//! # PR progression of specific exercises
//! pr-tracker progression "Bench Press (Barbell)" "Leg Extension"
//!
//! # Write my_prs/weekly_summary tables and chart series
//! pr-tracker --format json export --out visualizations --charts
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use pr_tracker::{
    analysis::analyze,
    config::{AnalysisConfig, TrackerConfig},
    errors::AppError,
    ingest::WorkoutLogReader,
    logging::LoggingConfig,
    reports::ReportFormat,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "pr-tracker",
    about = "Personal record and training volume analytics",
    long_about = "Reads a workout log CSV and reports personal records, weekly training volume, and how volume relates to new PRs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Workout log CSV (overrides PR_TRACKER_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Evaluation date for "days since" (YYYY-MM-DD, defaults to now)
    #[arg(long, global = true)]
    now: Option<NaiveDate>,

    /// First day of each week bucket (overrides PR_TRACKER_WEEK_START)
    #[arg(long, global = true)]
    week_start: Option<String>,

    /// Report format: csv or json (overrides PR_TRACKER_REPORT_FORMAT)
    #[arg(long, global = true)]
    format: Option<ReportFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show headline numbers for the log
    Overview,

    /// Show PR records
    Prs {
        /// Number of heaviest lifts to list (defaults to the configured size)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show the weekly volume timeline
    Weekly,

    /// Correlate weekly volume with weekly PR count
    Correlate,

    /// Show the PR progression of exercises
    Progression {
        /// Exercise titles, exactly as they appear in the log
        #[arg(required = true)]
        exercises: Vec<String>,
    },

    /// Export report tables and optionally chart series
    Export {
        /// Output directory (overrides PR_TRACKER_OUTPUT_DIR)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also write chart series as JSON documents
        #[arg(long)]
        charts: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let now = evaluation_time(cli.now)?;
    debug!(%now, "Evaluation time");

    let sets = WorkoutLogReader::from_path(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    info!(sets = sets.len(), "Workout log ready");

    let analyze_log = || analyze(&sets, now, &config.analysis);

    match cli.command {
        Command::Overview => commands::report::overview(&analyze_log()),
        Command::Prs { top } => {
            let top = top.unwrap_or(config.analysis.top_pr_count);
            commands::report::prs(&analyze_log(), top);
        }
        Command::Weekly => commands::report::weekly(&analyze_log()),
        Command::Correlate => commands::report::correlate(&analyze_log()),
        Command::Progression { exercises } => commands::report::progression(&sets, &exercises),
        Command::Export { out, charts } => {
            let dir = out.unwrap_or_else(|| config.output_dir.clone());
            commands::export::export(&analyze_log(), &config, &dir, charts)?;
        }
    }

    Ok(())
}

/// Environment configuration with command-line overrides applied
fn resolve_config(cli: &Cli) -> Result<TrackerConfig> {
    let mut config = TrackerConfig::from_env().map_err(AppError::from)?;

    if let Some(data) = &cli.data {
        config.data_path.clone_from(data);
    }
    if let Some(format) = cli.format {
        config.report_format = format;
    }
    if let Some(day) = &cli.week_start {
        config.analysis.week_starts_on =
            AnalysisConfig::parse_weekday(day).map_err(AppError::from)?;
    }
    config.analysis.validate().map_err(AppError::from)?;
    Ok(config)
}

/// End of the requested day, or the current local time
fn evaluation_time(date: Option<NaiveDate>) -> Result<NaiveDateTime> {
    date.map_or_else(
        || Ok(chrono::Local::now().naive_local()),
        |day| {
            day.and_hms_opt(23, 59, 59)
                .ok_or_else(|| AppError::invalid_input(format!("invalid date {day}")).into())
        },
    )
}
