// ABOUTME: Export command for pr-tracker
// ABOUTME: Writes report tables and, on request, chart series documents to a directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pr_tracker::{
    analysis::AnalysisReport,
    charts::{emit_charts, JsonChartSink},
    config::TrackerConfig,
    errors::AppResult,
    reports::export_reports,
};
use std::path::Path;
use tracing::info;

/// Export tables into `dir`, plus chart series when `charts` is set
pub fn export(
    report: &AnalysisReport,
    config: &TrackerConfig,
    dir: &Path,
    charts: bool,
) -> AppResult<()> {
    for path in export_reports(report, dir, config.report_format)? {
        println!("Created {}", path.display());
    }

    if charts {
        let mut sink = JsonChartSink::new(dir);
        let count = emit_charts(&mut sink, report, &config.analysis)?;
        for path in sink.written() {
            println!("Created {}", path.display());
        }
        info!(count, dir = %dir.display(), "Exported chart series");
    }

    Ok(())
}
