// ABOUTME: Configuration module for the training planner
// ABOUTME: Re-exports intelligence configuration types and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (scheduler, recovery profile, periodization, progression)
pub mod intelligence;

pub use intelligence::{
    ConfigError, IntelligenceConfig, PeriodizationConfig, ProgressionConfig, RecoveryProfile,
    SchedulerConfig,
};
