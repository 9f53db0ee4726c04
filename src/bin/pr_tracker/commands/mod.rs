// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pr-tracker
// ABOUTME: Provides access to console report and export commands

pub mod export;
pub mod report;
