// ABOUTME: Chart-ready series built from an AnalysisReport and the sinks that persist them
// ABOUTME: Rendering is left to the consumer; documents carry labeled points, axes, and chart kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chart Series
//!
//! Each chart is a `ChartDocument`: a title, axis labels, a `ChartKind` and one
//! or more labeled series. A `ChartSink` decides where documents go.
//! `JsonChartSink` writes one JSON file per chart, `MemoryChartSink` keeps them
//! in memory.

use crate::analysis::AnalysisReport;
use crate::errors::AppResult;
use crate::intelligence::{AnalysisConfig, PrProgression};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How a consumer should draw the series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Connected points in x order
    Line,
    /// One bar per category
    Bar,
    /// Unconnected points
    Scatter,
}

/// X coordinate of a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartX {
    /// Point in time
    Time(NaiveDateTime),
    /// Calendar day
    Date(NaiveDate),
    /// Numeric axis
    Number(f64),
    /// Categorical axis
    Category(String),
}

/// One point of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X coordinate
    pub x: ChartX,
    /// Y value
    pub y: f64,
}

/// A labeled sequence of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label
    pub label: String,
    /// Points in drawing order
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    fn new(label: impl Into<String>, points: Vec<ChartPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    fn from_progression(progression: &PrProgression, label: String) -> Self {
        let points = progression
            .points
            .iter()
            .map(|point| ChartPoint {
                x: ChartX::Time(point.timestamp),
                y: point.weight,
            })
            .collect();
        Self::new(label, points)
    }
}

/// A complete chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    /// Chart title
    pub title: String,
    /// How to draw it
    pub kind: ChartKind,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Series on the chart
    pub series: Vec<ChartSeries>,
}

impl ChartDocument {
    fn new(title: impl Into<String>, kind: ChartKind, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.into(),
            kind,
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            series: Vec::new(),
        }
    }

    fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }
}

/// Destination for chart documents
pub trait ChartSink {
    /// Accept one chart under a file-safe `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot store the document
    fn emit(&mut self, name: &str, document: &ChartDocument) -> AppResult<()>;
}

/// Writes each chart to `<dir>/<name>.json`
#[derive(Debug, Clone)]
pub struct JsonChartSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonChartSink {
    /// Sink writing into `dir`, created on first emit
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Output directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChartSink for JsonChartSink {
    fn emit(&mut self, name: &str, document: &ChartDocument) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{name}.json"));
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, document)?;
        writer.flush()?;
        debug!(path = %path.display(), series = document.series.len(), "Wrote chart");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps emitted charts in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryChartSink {
    documents: Vec<(String, ChartDocument)>,
}

impl MemoryChartSink {
    /// Empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Charts in emit order
    #[must_use]
    pub fn documents(&self) -> &[(String, ChartDocument)] {
        &self.documents
    }

    /// Chart emitted under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ChartDocument> {
        self.documents
            .iter()
            .find(|(emitted, _)| emitted == name)
            .map(|(_, document)| document)
    }
}

impl ChartSink for MemoryChartSink {
    fn emit(&mut self, name: &str, document: &ChartDocument) -> AppResult<()> {
        self.documents.push((name.to_owned(), document.clone()));
        Ok(())
    }
}

/// Lowercase name with runs of non-alphanumerics collapsed to `_`
///
/// Unicode letters and digits are kept, so `Développé` becomes `développé`.
#[must_use]
pub fn chart_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// Build every chart for a report
///
/// Charts without data are skipped: the pressing comparison when none of
/// its exercises were trained, and the trend line when the correlation is
/// undefined.
#[must_use]
pub fn build_chart_documents(
    report: &AnalysisReport,
    config: &AnalysisConfig,
) -> Vec<(String, ChartDocument)> {
    let mut documents = Vec::new();
    let mut progression_names = HashSet::new();

    for progression in &report.progressions {
        let title = &progression.exercise_title;
        let document = ChartDocument::new(
            format!("{title} - PR Progression Over Time"),
            ChartKind::Line,
            "Date",
            "Weight (lbs)",
        )
        .with_series(ChartSeries::from_progression(
            progression,
            format!("{title} PR"),
        ));
        let name = unique_progression_name(title, &mut progression_names);
        documents.push((name, document));
    }

    if !report.comparison.is_empty() {
        let mut document = ChartDocument::new(
            "Pressing Movements - PR Comparison",
            ChartKind::Line,
            "Date",
            "Weight (lbs)",
        );
        for progression in &report.comparison {
            document = document.with_series(ChartSeries::from_progression(
                progression,
                progression.exercise_title.clone(),
            ));
        }
        documents.push(("pressing_comparison".to_owned(), document));
    }

    let top = report.top_prs(config.top_pr_count);
    let top_points = top
        .iter()
        .map(|record| ChartPoint {
            x: ChartX::Category(record.exercise_title.clone()),
            y: record.max_weight,
        })
        .collect();
    documents.push((
        "top_prs".to_owned(),
        ChartDocument::new(
            format!("Top {} Heaviest Lifts", top.len()),
            ChartKind::Bar,
            "Exercise",
            "Weight (lbs)",
        )
        .with_series(ChartSeries::new("PR weight", top_points)),
    ));

    documents.push(("weekly_volume_trends".to_owned(), weekly_volume_chart(report)));
    documents.push(("volume_vs_prs_correlation".to_owned(), correlation_chart(report)));

    let volume_points = report
        .exercise_volumes
        .iter()
        .map(|volume| ChartPoint {
            x: ChartX::Category(volume.exercise_title.clone()),
            y: volume.total_volume,
        })
        .collect();
    documents.push((
        "top_exercises_by_volume".to_owned(),
        ChartDocument::new(
            format!("Top {} Exercises by Total Volume", report.exercise_volumes.len()),
            ChartKind::Bar,
            "Exercise",
            "Total Volume (lbs x reps)",
        )
        .with_series(ChartSeries::new("Total volume", volume_points)),
    ));

    documents
}

/// `<slug>_progression`, suffixed `_2`, `_3`, ... when another title already took the name
fn unique_progression_name(title: &str, taken: &mut HashSet<String>) -> String {
    let slug = chart_slug(title);
    let stem = if slug.is_empty() {
        "exercise".to_owned()
    } else {
        slug
    };
    let mut name = format!("{stem}_progression");
    let mut suffix = 2;
    while taken.contains(&name) {
        name = format!("{stem}_progression_{suffix}");
        suffix += 1;
    }
    if suffix > 2 {
        warn!(exercise = %title, chart = %name, "Progression chart name collided, added suffix");
    }
    taken.insert(name.clone());
    name
}

fn weekly_volume_chart(report: &AnalysisReport) -> ChartDocument {
    let point = |week: NaiveDate, y: f64| ChartPoint {
        x: ChartX::Date(week),
        y,
    };
    let volume = report
        .weekly
        .iter()
        .map(|w| point(w.week_start, w.total_volume))
        .collect();
    let avg4 = report
        .weekly
        .iter()
        .filter_map(|w| w.volume_4wk_avg.map(|y| point(w.week_start, y)))
        .collect();
    let avg8 = report
        .weekly
        .iter()
        .filter_map(|w| w.volume_8wk_avg.map(|y| point(w.week_start, y)))
        .collect();

    ChartDocument::new(
        "Weekly Training Volume Trends",
        ChartKind::Line,
        "Week",
        "Total Volume (lbs x reps)",
    )
    .with_series(ChartSeries::new("Weekly Volume", volume))
    .with_series(ChartSeries::new("4-Week Average", avg4))
    .with_series(ChartSeries::new("8-Week Average", avg8))
}

fn correlation_chart(report: &AnalysisReport) -> ChartDocument {
    let weeks: Vec<ChartPoint> = report
        .weekly
        .iter()
        .map(|w| ChartPoint {
            x: ChartX::Number(w.total_volume),
            y: w.pr_count as f64,
        })
        .collect();

    let title = report.correlation.as_ref().map_or_else(
        || "Training Volume vs PRs".to_owned(),
        |c| format!("Training Volume vs PRs (r = {:.3})", c.coefficient),
    );
    let mut document = ChartDocument::new(
        title,
        ChartKind::Scatter,
        "Weekly Volume (lbs x reps)",
        "PRs Set",
    )
    .with_series(ChartSeries::new("Weeks", weeks));

    if let Some(correlation) = &report.correlation {
        let volumes = report.weekly.iter().map(|w| w.total_volume);
        let low = volumes.clone().fold(f64::INFINITY, f64::min);
        let high = volumes.fold(f64::NEG_INFINITY, f64::max);
        let line = [low, high]
            .into_iter()
            .map(|x| ChartPoint {
                x: ChartX::Number(x),
                y: correlation.trend_line.predict(x),
            })
            .collect();
        document = document.with_series(ChartSeries::new("Trend line", line));
    }
    document
}

/// Build every chart for `report` and hand them to `sink`, returning the count
///
/// # Errors
///
/// Returns the first sink failure
pub fn emit_charts<S: ChartSink + ?Sized>(
    sink: &mut S,
    report: &AnalysisReport,
    config: &AnalysisConfig,
) -> AppResult<usize> {
    let documents = build_chart_documents(report, config);
    for (name, document) in &documents {
        sink.emit(name, document)?;
    }
    Ok(documents.len())
}
