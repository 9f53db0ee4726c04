// ABOUTME: Core types and constants for the PR tracker workout analytics workspace
// ABOUTME: Foundation crate with workout models, error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PR Tracker Core
//!
//! Foundation crate providing shared types for the PR tracker workspace. It
//! changes rarely, so the analytics crate and the binary can compile against
//! a stable set of models.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Input formats, rolling windows, and report thresholds
//! - **models**: Workout sets and the records derived from them

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutSet`, `PrRecord`, `PrEvent`, `WeeklySummary`)
pub mod models;
