// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, seeded random sources and goal fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `training_planner`

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use training_planner::config::intelligence::SchedulerConfig;
use training_planner::intelligence::RngSource;
use training_planner::models::{Goal, GoalType, Modality, Session};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic random source
pub fn seeded(seed: u64) -> RngSource<rand_chacha::ChaCha8Rng> {
    RngSource::seeded(seed)
}

/// Strength and endurance at equal priority
pub fn strength_endurance_goals() -> Vec<Goal> {
    vec![
        Goal::new(GoalType::Strength, 1.0),
        Goal::new(GoalType::Endurance, 1.0),
    ]
}

/// One goal of every scored type
pub fn all_goal_types() -> Vec<Goal> {
    vec![
        Goal::new(GoalType::Strength, 1.0),
        Goal::new(GoalType::Endurance, 0.8),
        Goal::new(GoalType::BodyComposition, 0.6),
        Goal::new(GoalType::Speed, 0.5),
    ]
}

/// Small search budget that keeps integration tests fast
pub fn quick_scheduler_config() -> SchedulerConfig {
    SchedulerConfig {
        population_size: 16,
        max_generations: 12,
        ..SchedulerConfig::default()
    }
}

/// Fixed reference instant
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 7, 0, 0).unwrap()
}

/// Session at `hours` after the reference instant
pub fn timed_session(
    hours: i64,
    modalities: &[Modality],
    duration: f64,
    intensity: f64,
) -> Session {
    Session::new(0, modalities.iter().copied(), duration, intensity)
        .with_timestamp(reference_time() + Duration::hours(hours))
}
