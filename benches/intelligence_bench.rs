// ABOUTME: Criterion benchmarks for PR detection and weekly volume aggregation
// ABOUTME: Measures event extraction, record computation, bucketing, and the full pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the aggregation engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Weekday;
use common::fixtures::{generate_sets, LogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pr_tracker::analysis::analyze;
use pr_tracker::intelligence::{AnalysisConfig, PrDetector, StatisticalAnalyzer, VolumeAggregator};

const SIZES: [LogSize; 3] = [LogSize::Small, LogSize::Medium, LogSize::Large];

/// Benchmark running-max PR event extraction
fn bench_pr_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("pr_events");

    for size in SIZES {
        let sets = generate_sets(size);
        group.throughput(Throughput::Elements(sets.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract_pr_events", sets.len()),
            &sets,
            |b, sets| b.iter(|| PrDetector::extract_pr_events(black_box(sets))),
        );
    }

    group.finish();
}

/// Benchmark PR record computation
fn bench_pr_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("pr_records");
    let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    for size in SIZES {
        let sets = generate_sets(size);
        group.throughput(Throughput::Elements(sets.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_pr_records", sets.len()),
            &sets,
            |b, sets| b.iter(|| PrDetector::compute_pr_records(black_box(sets), black_box(now))),
        );
    }

    group.finish();
}

/// Benchmark weekly bucketing and the correlation over its output
fn bench_weekly_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_volume");

    for size in SIZES {
        let sets = generate_sets(size);
        group.throughput(Throughput::Elements(sets.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("bucket_weekly", sets.len()),
            &sets,
            |b, sets| b.iter(|| VolumeAggregator::bucket_weekly(black_box(sets), Weekday::Mon)),
        );

        let weeks = VolumeAggregator::bucket_weekly(&sets, Weekday::Mon);
        group.bench_with_input(
            BenchmarkId::new("correlate", weeks.len()),
            &weeks,
            |b, weeks| b.iter(|| StatisticalAnalyzer::volume_correlation(black_box(weeks))),
        );
    }

    group.finish();
}

/// Benchmark the complete analysis pipeline
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = AnalysisConfig::default();
    let sets = generate_sets(LogSize::Medium);
    let now = sets
        .iter()
        .map(pr_tracker::models::WorkoutSet::timestamp)
        .max()
        .unwrap_or_default();

    group.throughput(Throughput::Elements(sets.len() as u64));
    group.bench_function("analyze_medium_log", |b| {
        b.iter(|| analyze(black_box(&sets), now, &config));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_pr_events,
    bench_pr_records,
    bench_weekly_volume,
    bench_pipeline,
);
criterion_main!(benches);
