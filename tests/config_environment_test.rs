// ABOUTME: Tests for intelligence configuration defaults, validation and environment overrides
// ABOUTME: Environment-mutating tests are serialised to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use training_planner::config::intelligence::{
    ConfigError, IntelligenceConfig, PeriodizationConfig, ProgressionConfig, SchedulerConfig,
};
use training_planner::logging::{LogFormat, LoggingConfig};
use training_planner::{AppError, ErrorCode};

const OVERRIDE_VARS: [&str; 6] = [
    "PLANNER_SCHEDULER_POPULATION_SIZE",
    "PLANNER_SCHEDULER_MUTATION_RATE",
    "PLANNER_RECOVERY_CORTISOL_BASELINE",
    "PLANNER_PERIODIZATION_SESSIONS_PER_WEEK",
    "PLANNER_PROGRESSION_DELOAD_FRACTION",
    "PLANNER_SCHEDULER_CROSSOVER_RATE",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = IntelligenceConfig::default();
    config.validate().unwrap();

    assert_eq!(config.scheduler.population_size, 40);
    assert_eq!(config.scheduler.max_generations, 60);
    assert_eq!(config.scheduler.tournament_size, 3);
    assert_eq!(config.scheduler.survivor_count(), 20);
    assert!((config.recovery.glycogen_capacity - 500.0).abs() < f64::EPSILON);
    assert_eq!(config.periodization.time_frame_weeks, 12);
    assert!((config.progression.fatigue_threshold - 0.6).abs() < f64::EPSILON);
    assert!(config.progression.readiness_hrv.is_none());
}

#[test]
fn test_survivor_count_rounds_up() {
    let config = SchedulerConfig {
        population_size: 15,
        ..SchedulerConfig::default()
    };
    assert_eq!(config.survivor_count(), 8);
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_overrides();
    env::set_var("PLANNER_SCHEDULER_POPULATION_SIZE", "24");
    env::set_var("PLANNER_SCHEDULER_MUTATION_RATE", "0.3");
    env::set_var("PLANNER_RECOVERY_CORTISOL_BASELINE", "0.5");
    env::set_var("PLANNER_PERIODIZATION_SESSIONS_PER_WEEK", "6");

    let config = IntelligenceConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_eq!(config.scheduler.population_size, 24);
    assert!((config.scheduler.mutation_rate - 0.3).abs() < f64::EPSILON);
    assert!((config.recovery.cortisol_baseline - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.periodization.sessions_per_week, 6);
}

#[test]
#[serial]
fn test_unparseable_override_rejected() {
    clear_overrides();
    env::set_var("PLANNER_SCHEDULER_POPULATION_SIZE", "lots");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_rejected() {
    clear_overrides();
    env::set_var("PLANNER_SCHEDULER_CROSSOVER_RATE", "1.5");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_deload_fraction_override_validated() {
    clear_overrides();
    env::set_var("PLANNER_PROGRESSION_DELOAD_FRACTION", "0");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(result.is_err());
}

#[test]
fn test_validation_rules() {
    let small_population = IntelligenceConfig {
        scheduler: SchedulerConfig {
            population_size: 3,
            ..SchedulerConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    assert!(small_population.validate().is_err());

    let eight_days = IntelligenceConfig {
        periodization: PeriodizationConfig {
            sessions_per_week: 8,
            ..PeriodizationConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    assert!(eight_days.validate().is_err());

    let no_threshold = IntelligenceConfig {
        progression: ProgressionConfig {
            fatigue_threshold: 0.0,
            ..ProgressionConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    assert!(no_threshold.validate().is_err());
}

#[test]
fn test_config_error_maps_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("population_size must be at least 4").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.to_string().contains("population_size"));
}

#[test]
fn test_config_deserializes_from_json() {
    let config: IntelligenceConfig = serde_json::from_str(
        r#"{
            "scheduler": {"population_size": 20, "max_generations": 5, "crossover_rate": 0.8,
                          "mutation_rate": 0.1, "mutation_scale": 0.2, "tournament_size": 2},
            "recovery": {"hormonal_sensitivity": 0.7},
            "periodization": {"time_frame_weeks": 8, "sessions_per_week": 3,
                              "fatigue_sensitivity": 1.5},
            "progression": {"fatigue_threshold": 0.8, "deload_fraction": 0.3, "readiness_hrv": 0.55}
        }"#,
    )
    .unwrap();
    config.validate().unwrap();
    assert_eq!(config.scheduler.population_size, 20);
    assert!((config.recovery.hormonal_sensitivity - 0.7).abs() < f64::EPSILON);
    assert!((config.recovery.glycogen_capacity - 500.0).abs() < f64::EPSILON);
    assert_eq!(config.progression.readiness_hrv, Some(0.55));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
}

#[test]
#[serial]
fn test_logging_init_is_idempotent() {
    let config = LoggingConfig::default();
    training_planner::logging::init_logging(&config).unwrap();
    training_planner::logging::init_logging(&config).unwrap();
}
