// ABOUTME: Report tables for PR records and weekly summaries with CSV and JSON export
// ABOUTME: Row types, writers over any io::Write, and directory export of both tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reports
//!
//! The PR table is written ranked by weight, heaviest first, with dates as
//! `%d %b %Y`. The weekly table keeps chronological order and leaves rolling
//! averages empty for weeks that do not have a full window yet.

use crate::analysis::AnalysisReport;
use crate::constants::report::{DATE_FORMAT, PR_REPORT_STEM, WEEKLY_REPORT_STEM};
use crate::errors::{csv_error, AppResult};
use crate::intelligence::config::ConfigError;
use crate::models::{PrRecord, WeeklySummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Output format of exported tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Comma separated values with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array of row objects
    Json,
}

impl ReportFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Parse(format!(
                "unknown report format '{other}' (expected csv or json)"
            ))),
        }
    }
}

/// One row of the PR table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrReportRow {
    /// Exercise name
    pub exercise: String,
    /// Heaviest weight lifted
    pub pr_weight_lbs: f64,
    /// First day the PR weight was lifted
    pub first_achieved: String,
    /// Most recent day the PR weight was lifted
    pub last_achieved: String,
    /// Sets performed at the PR weight
    pub times_hit: usize,
    /// Whole days since the PR weight was last lifted
    pub days_since: i64,
}

impl From<&PrRecord> for PrReportRow {
    fn from(record: &PrRecord) -> Self {
        Self {
            exercise: record.exercise_title.clone(),
            pr_weight_lbs: record.max_weight,
            first_achieved: record.first_achieved_at.format(DATE_FORMAT).to_string(),
            last_achieved: record.last_achieved_at.format(DATE_FORMAT).to_string(),
            times_hit: record.times_hit,
            days_since: record.days_since_last,
        }
    }
}

/// One row of the weekly summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReportRow {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Sum of `reps * weight`
    pub total_volume: f64,
    /// Sets performed
    pub set_count: usize,
    /// New PRs set
    pub pr_count: usize,
    /// Trailing 4 week volume average
    pub volume_4wk_avg: Option<f64>,
    /// Trailing 8 week volume average
    pub volume_8wk_avg: Option<f64>,
}

impl From<&WeeklySummary> for WeeklyReportRow {
    fn from(summary: &WeeklySummary) -> Self {
        Self {
            week_start: summary.week_start,
            total_volume: summary.total_volume,
            set_count: summary.set_count,
            pr_count: summary.pr_count,
            volume_4wk_avg: summary.volume_4wk_avg,
            volume_8wk_avg: summary.volume_8wk_avg,
        }
    }
}

/// Write PR records as a table, in the order given
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails
pub fn write_pr_report<W: Write>(
    writer: W,
    records: &[PrRecord],
    format: ReportFormat,
) -> AppResult<()> {
    let rows: Vec<PrReportRow> = records.iter().map(PrReportRow::from).collect();
    write_rows(writer, &rows, format)
}

/// Write weekly summaries as a table, in the order given
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails
pub fn write_weekly_report<W: Write>(
    writer: W,
    summaries: &[WeeklySummary],
    format: ReportFormat,
) -> AppResult<()> {
    let rows: Vec<WeeklyReportRow> = summaries.iter().map(WeeklyReportRow::from).collect();
    write_rows(writer, &rows, format)
}

fn write_rows<W: Write, T: Serialize>(
    mut writer: W,
    rows: &[T],
    format: ReportFormat,
) -> AppResult<()> {
    match format {
        ReportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in rows {
                csv_writer.serialize(row).map_err(csv_error)?;
            }
            csv_writer.flush()?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Export the PR table and the weekly summary into `dir`
///
/// Creates `dir` if needed and writes `my_prs.<ext>` and
/// `weekly_summary.<ext>`, returning the written paths.
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be written
pub fn export_reports(
    report: &AnalysisReport,
    dir: &Path,
    format: ReportFormat,
) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let pr_path = dir.join(format!("{PR_REPORT_STEM}.{}", format.extension()));
    write_pr_report(
        BufWriter::new(File::create(&pr_path)?),
        &report.ranked_prs,
        format,
    )?;

    let weekly_path = dir.join(format!("{WEEKLY_REPORT_STEM}.{}", format.extension()));
    write_weekly_report(
        BufWriter::new(File::create(&weekly_path)?),
        &report.weekly,
        format,
    )?;

    info!(
        dir = %dir.display(),
        %format,
        prs = report.ranked_prs.len(),
        weeks = report.weekly.len(),
        "Exported reports"
    );
    Ok(vec![pr_path, weekly_path])
}
