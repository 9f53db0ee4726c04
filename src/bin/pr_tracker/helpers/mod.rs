// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for pr-tracker
// ABOUTME: Provides access to console table formatting

pub mod display;
