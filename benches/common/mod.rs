// ABOUTME: Common benchmark utilities and workout log fixtures
// ABOUTME: Provides deterministic set generators shared by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
