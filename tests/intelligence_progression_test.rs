// ABOUTME: Integration tests for progression modelling: double progression and curves
// ABOUTME: Verifies deload carry-over, weight projections and HRV-based load adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use training_planner::config::intelligence::{
    IntelligenceConfig, PeriodizationConfig, ProgressionConfig,
};
use training_planner::intelligence::progression::load_adjustment;
use training_planner::intelligence::{
    Emphasis, PeriodizationBuilder, Phase, PhaseFocus, PhaseKind, PlannedSession,
    ProgressionBuilder, ProgressionModel, RecoveryFocus, RepRange,
};
use training_planner::models::{Calendar, Constraints};

fn session(day: u32, emphasis: Emphasis, intensity: f64, session_load: f64) -> PlannedSession {
    PlannedSession {
        day,
        emphasis,
        modalities: emphasis.modalities(),
        intensity,
        duration: 60.0,
        session_load,
    }
}

fn phase(weeks: u32, recovery_focus: RecoveryFocus, weekly_plan: Vec<PlannedSession>) -> Phase {
    Phase {
        name: PhaseKind::Intensification,
        weeks,
        emphasis: Vec::new(),
        intensity_label: "high".to_owned(),
        focus: PhaseFocus::Intensity,
        recovery_focus,
        weekly_plan,
        progression: ProgressionModel::default(),
    }
}

fn builder(fatigue_threshold: f64, deload_fraction: f64) -> ProgressionBuilder {
    ProgressionBuilder::new(ProgressionConfig {
        fatigue_threshold,
        deload_fraction,
        readiness_hrv: None,
    })
}

#[test]
fn test_eight_week_phase_schedules_deloads() {
    common::init_test_logging();
    let plan = vec![session(0, Emphasis::Strength, 0.8, 40.0)];
    let eight_weeks = phase(8, RecoveryFocus::Neuromuscular, plan.clone());

    let model = builder(0.6, 0.5).create_progression_model(&eight_weeks, &plan);

    assert!(!model.deload_weeks.is_empty());
    assert!(model
        .deload_weeks
        .iter()
        .all(|d| (d.load_reduction - 0.5).abs() < f64::EPSILON));
    let weeks: Vec<u32> = model.deload_weeks.iter().map(|d| d.week).collect();
    assert_eq!(weeks, vec![4, 6, 8]);
}

#[test]
fn test_cumulative_fatigue_resets_to_carry_over() {
    let progression = builder(0.6, 0.4);
    let curve = ProgressionBuilder::fatigue_curve(10);
    let deloads = progression.schedule_deloads(&curve);

    assert_eq!(deloads.cumulative.len(), 10);
    assert!(!deloads.weeks.is_empty());
    for deload in &deloads.weeks {
        let after = deloads.cumulative[deload.week as usize - 1];
        assert!((after - 0.3).abs() < 1e-12);
        assert!(after > 0.0);
    }
}

#[test]
fn test_fatigue_curve_has_minimum_length_and_cap() {
    let short = ProgressionBuilder::fatigue_curve(2);
    assert_eq!(short.len(), 4);
    assert!((short[0] - 0.12).abs() < 1e-12);
    assert!((short[1] - 0.17).abs() < 1e-12);

    let long = ProgressionBuilder::fatigue_curve(12);
    assert_eq!(long.len(), 12);
    assert!(long.iter().all(|f| *f <= 0.25));
    assert!((long[11] - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_high_threshold_never_deloads() {
    let deloads = builder(10.0, 0.4).schedule_deloads(&ProgressionBuilder::fatigue_curve(8));
    assert!(deloads.weeks.is_empty());
    assert_eq!(deloads.cumulative.len(), 8);
}

#[test]
fn test_weight_progression_non_decreasing() {
    let plan = vec![
        session(0, Emphasis::Strength, 0.85, 50.0),
        session(1, Emphasis::Endurance, 0.65, 30.0),
        session(2, Emphasis::Speed, 0.9, 20.0),
        session(3, Emphasis::General, 0.7, 70.0),
    ];
    let progressions = ProgressionBuilder::double_progression(&plan);

    assert_eq!(progressions.len(), 4);
    for progression in &progressions {
        assert_eq!(progression.weight_progression.len(), 4);
        for pair in progression.weight_progression.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    let strength = &progressions[0];
    assert_eq!(strength.rep_range, RepRange { min: 3, max: 6 });
    let initial = 50.0 / (3.0 * 0.85);
    assert!((strength.weight_progression[0] - initial).abs() < 1e-9);
    let increment = 0.85 * 0.025;
    assert!((strength.weight_progression[1] - initial * (1.0 + increment)).abs() < 1e-9);

    assert_eq!(progressions[1].rep_range, RepRange { min: 10, max: 15 });
    assert_eq!(progressions[2].rep_range, RepRange { min: 2, max: 5 });
    assert_eq!(progressions[3].rep_range, RepRange { min: 5, max: 12 });
}

#[test]
fn test_zero_intensity_session_has_zero_weight() {
    let progressions = ProgressionBuilder::double_progression(
        &[session(0, Emphasis::Strength, 0.0, 0.0)],
    );
    assert!(progressions[0].weight_progression.iter().all(|w| w.abs() < f64::EPSILON));
}

#[test]
fn test_progression_curves_shapes() {
    let curves = ProgressionBuilder::progression_curves(6);
    assert_eq!(curves.linear.len(), 6);
    assert_eq!(curves.exponential.len(), 6);
    assert_eq!(curves.undulating.len(), 6);

    assert!((curves.linear[0] - 1.0).abs() < 1e-12);
    assert!((curves.linear[5] - 1.25).abs() < 1e-12);
    assert!((curves.exponential[2] - 1.03_f64.powi(2)).abs() < 1e-12);
    assert!((curves.undulating[0] - 1.05).abs() < 1e-12);
    assert!((curves.undulating[1] - 0.99).abs() < 1e-12);
    assert!(curves.undulating[2] > curves.undulating[1]);
}

#[test]
fn test_auto_regulation_uses_focus_baseline() {
    let plan = vec![
        session(0, Emphasis::Strength, 0.85, 50.0),
        session(1, Emphasis::Endurance, 0.6, 30.0),
    ];
    let progression = builder(0.6, 0.4);

    let neuromuscular = progression.auto_regulate(&plan, RecoveryFocus::Neuromuscular);
    assert!((neuromuscular[0].hrv_baseline - 0.52).abs() < f64::EPSILON);
    assert!((neuromuscular[0].target_rpe - 8.5).abs() < 1e-12);
    // reading at the suppressed baseline
    assert!((neuromuscular[0].load_adjustment + 0.1).abs() < f64::EPSILON);

    let metabolic = progression.auto_regulate(&plan, RecoveryFocus::Metabolic);
    assert!((metabolic[1].hrv_baseline - 0.6).abs() < f64::EPSILON);
    assert!((metabolic[1].load_adjustment + 0.02).abs() < f64::EPSILON);
}

#[test]
fn test_auto_regulation_with_elevated_hrv() {
    let progression = ProgressionBuilder::new(ProgressionConfig {
        readiness_hrv: Some(0.7),
        ..ProgressionConfig::default()
    });
    let plan = vec![
        session(0, Emphasis::Speed, 0.9, 50.0),
        session(1, Emphasis::Endurance, 0.6, 30.0),
    ];
    let adjustments = progression.auto_regulate(&plan, RecoveryFocus::General);
    assert!((adjustments[0].load_adjustment + 0.05).abs() < f64::EPSILON);
    assert!(adjustments[1].load_adjustment.abs() < f64::EPSILON);
}

#[test]
fn test_load_adjustment_table() {
    assert!((load_adjustment(0.7, 9.0) + 0.05).abs() < f64::EPSILON);
    assert!(load_adjustment(0.7, 6.0).abs() < f64::EPSILON);
    assert!((load_adjustment(0.4, 6.0) + 0.1).abs() < f64::EPSILON);
    assert!((load_adjustment(0.61, 9.0) + 0.02).abs() < f64::EPSILON);
}

#[test]
fn test_periodized_phases_get_deloads_from_config() {
    let builder = PeriodizationBuilder::new(
        PeriodizationConfig {
            time_frame_weeks: 24,
            ..PeriodizationConfig::default()
        },
        ProgressionConfig {
            fatigue_threshold: 0.6,
            deload_fraction: 0.5,
            readiness_hrv: None,
        },
    );
    let plan = builder
        .design_periodization_plan(
            &common::strength_endurance_goals(),
            &Constraints::default(),
            &Calendar::default(),
        )
        .unwrap();

    // 24 weeks split 8/8/8
    for phase in &plan.phases {
        assert_eq!(phase.weeks, 8);
        assert_eq!(phase.progression.deload_weeks.len(), 3);
        assert_eq!(phase.progression.progression_curves.fatigue_curve.len(), 8);
    }
}

#[test]
fn test_global_builder_uses_loaded_configuration() {
    let plan = vec![
        session(0, Emphasis::Strength, 0.8, 40.0),
        session(2, Emphasis::Endurance, 0.7, 35.0),
    ];
    let eight_weeks = phase(8, RecoveryFocus::Neuromuscular, plan.clone());
    let explicit = ProgressionBuilder::new(IntelligenceConfig::global().progression.clone());

    let from_global =
        ProgressionBuilder::from_global().create_progression_model(&eight_weeks, &plan);

    assert_eq!(from_global, explicit.create_progression_model(&eight_weeks, &plan));
}
