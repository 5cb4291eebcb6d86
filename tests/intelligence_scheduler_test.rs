// ABOUTME: Integration tests for the NSGA-II multi-objective scheduler
// ABOUTME: Covers the end-to-end scenario, Pareto invariants, operators and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use training_planner::config::intelligence::SchedulerConfig;
use training_planner::intelligence::scheduler::operators::{crossover, mutate};
use training_planner::intelligence::scheduler::{compute_fatigue, dominates, Candidate};
use training_planner::intelligence::{FnSource, MultiObjectiveScheduler};
use training_planner::models::{Constraints, Goal, GoalType, Modality, Session};
use training_planner::ErrorCode;

#[test]
fn test_strength_endurance_scenario() {
    common::init_test_logging();
    let goals = common::strength_endurance_goals();
    let scheduler = MultiObjectiveScheduler::new(SchedulerConfig::default());
    let mut rng = common::seeded(2024);

    let summary = scheduler
        .optimize_training_plan(&goals, &Constraints::default(), 28, &mut rng)
        .unwrap();

    assert_eq!(summary.schedule.len(), 28);
    assert_eq!(summary.objective_scores.len(), 2);
    assert!(summary.load_distribution.strength > 0.0);
    assert!(summary.load_distribution.endurance > 0.0);
    assert_eq!(summary.goals_satisfied.len(), 2);
    assert_eq!(summary.goals_satisfied[0].goal.goal_type, GoalType::Strength);
    assert!((summary.goals_satisfied[1].score - summary.objective_scores[1]).abs() < f64::EPSILON);
    assert_eq!(summary.generations, 60);
    assert!(summary.pareto_front_size >= 1);
}

#[test]
fn test_final_front_is_non_dominated() {
    let goals = common::all_goal_types();
    let scheduler = MultiObjectiveScheduler::new(common::quick_scheduler_config());
    let mut rng = common::seeded(7);

    let evolution = scheduler
        .evolve(&goals, &Constraints::default(), 14, &mut rng)
        .unwrap();

    let front = &evolution.ranking.fronts[0];
    assert!(!front.is_empty());
    for &a in front {
        for &b in front {
            assert!(!dominates(
                &evolution.population[a].objectives,
                &evolution.population[b].objectives
            ));
        }
    }
    for &index in front {
        assert_eq!(evolution.ranking.ranks[index], 0);
    }
}

#[test]
fn test_front_extremes_have_infinite_crowding() {
    let goals = common::strength_endurance_goals();
    let scheduler = MultiObjectiveScheduler::new(common::quick_scheduler_config());
    let mut rng = common::seeded(11);

    let evolution = scheduler
        .evolve(&goals, &Constraints::default(), 7, &mut rng)
        .unwrap();

    for front in &evolution.ranking.fronts {
        for objective in 0..goals.len() {
            let values: Vec<f64> = front
                .iter()
                .map(|&i| evolution.population[i].objectives[objective])
                .collect();
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            if max <= min {
                continue;
            }
            assert!(front.iter().any(|&i| {
                (evolution.population[i].objectives[objective] - max).abs() < f64::EPSILON
                    && evolution.ranking.crowding[i].is_infinite()
            }));
            assert!(front.iter().any(|&i| {
                (evolution.population[i].objectives[objective] - min).abs() < f64::EPSILON
                    && evolution.ranking.crowding[i].is_infinite()
            }));
        }
    }
}

#[test]
fn test_population_size_invariant_across_generations() {
    let config = SchedulerConfig {
        population_size: 15,
        max_generations: 9,
        ..SchedulerConfig::default()
    };
    let scheduler = MultiObjectiveScheduler::new(config);
    let mut rng = common::seeded(3);

    let evolution = scheduler
        .evolve(&common::strength_endurance_goals(), &Constraints::default(), 10, &mut rng)
        .unwrap();

    assert_eq!(evolution.history.len(), 9);
    assert!(evolution.history.iter().all(|g| g.population_size == 15));
    assert_eq!(evolution.population.len(), 15);
    assert!(evolution.population.iter().all(|c| c.objectives.len() == 2));
    assert!(evolution.population.iter().all(|c| c.schedule.len() == 10));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let scheduler = MultiObjectiveScheduler::new(common::quick_scheduler_config());
    let goals = common::all_goal_types();

    let first = scheduler
        .optimize_training_plan(&goals, &Constraints::default(), 14, &mut common::seeded(99))
        .unwrap();
    let second = scheduler
        .optimize_training_plan(&goals, &Constraints::default(), 14, &mut common::seeded(99))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_short_horizon_clamped_to_one_week() {
    let scheduler = MultiObjectiveScheduler::new(common::quick_scheduler_config());
    let summary = scheduler
        .optimize_training_plan(
            &common::strength_endurance_goals(),
            &Constraints::default(),
            0,
            &mut common::seeded(5),
        )
        .unwrap();
    assert_eq!(summary.schedule.len(), 7);
}

#[test]
fn test_empty_goals_rejected() {
    let scheduler = MultiObjectiveScheduler::default();
    let error = scheduler
        .optimize_training_plan(&[], &Constraints::default(), 28, &mut common::seeded(1))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_non_positive_priority_rejected() {
    let scheduler = MultiObjectiveScheduler::default();
    let goals = vec![Goal::new(GoalType::Strength, 0.0)];
    let error = scheduler
        .optimize_training_plan(&goals, &Constraints::default(), 28, &mut common::seeded(1))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_invalid_search_budget_rejected() {
    let scheduler = MultiObjectiveScheduler::new(SchedulerConfig {
        population_size: 2,
        ..SchedulerConfig::default()
    });
    let error = scheduler
        .optimize_training_plan(
            &common::strength_endurance_goals(),
            &Constraints::default(),
            7,
            &mut common::seeded(1),
        )
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_equipment_limits_modalities() {
    let constraints = Constraints {
        available_equipment: BTreeSet::from(["dumbbell".to_owned()]),
        ..Constraints::default()
    };
    let scheduler = MultiObjectiveScheduler::new(common::quick_scheduler_config());
    let summary = scheduler
        .optimize_training_plan(
            &common::all_goal_types(),
            &constraints,
            14,
            &mut common::seeded(21),
        )
        .unwrap();

    for session in &summary.schedule {
        assert!(!session.modalities.is_empty());
        assert!(!session.trains(Modality::Endurance));
        assert!(!session.trains(Modality::Speed));
    }
    assert!(summary.load_distribution.endurance.abs() < f64::EPSILON);
}

#[test]
fn test_initial_candidates_respect_bounds() {
    let constraints = Constraints {
        max_daily_duration: 60.0,
        ..Constraints::default()
    };
    let mut rng = common::seeded(8);
    let candidate = Candidate::random(21, &constraints, &mut rng);

    assert_eq!(candidate.schedule.len(), 21);
    for (day, session) in candidate.schedule.iter().enumerate() {
        assert_eq!(session.day as usize, day);
        assert!((45.0..=60.0).contains(&session.duration));
        assert!((0.65..0.95).contains(&session.intensity));
        assert!((session.recovery - 12.0 * (1.0 + session.intensity)).abs() < 1e-9);
    }
}

#[test]
fn test_mutation_keeps_sessions_in_bounds() {
    let constraints = Constraints::default();
    let schedule: Vec<Session> = (0..10)
        .map(|day| {
            let (duration, intensity) = if day % 2 == 0 { (89.0, 0.94) } else { (31.0, 0.56) };
            Session::new(day, [Modality::Strength], duration, intensity)
        })
        .collect();
    let mut candidate = Candidate::from_schedule(schedule, &constraints, None);

    // every session mutates; factors alternate between the two extremes
    let draws = [0.0, 0.999_999, 0.0, 0.0];
    let mut next = 0;
    let mut rng = FnSource::new(move || {
        let value = draws[next % draws.len()];
        next += 1;
        value
    });
    for _ in 0..5 {
        mutate(&mut candidate, 1.0, 2.0, &constraints, &mut rng);
        for session in &candidate.schedule {
            assert!((0.55..=0.95).contains(&session.intensity));
            assert!((30.0..=constraints.max_daily_duration).contains(&session.duration));
        }
    }
}

#[test]
fn test_crossover_recomputes_derived_state() {
    let constraints = Constraints::default();
    let strength: Vec<Session> = (0..8)
        .map(|day| Session::new(day, [Modality::Strength], 60.0, 0.8))
        .collect();
    let endurance: Vec<Session> = (0..8)
        .map(|day| Session::new(day, [Modality::Endurance], 60.0, 0.8))
        .collect();
    let a = Candidate::from_schedule(strength, &constraints, None);
    let b = Candidate::from_schedule(endurance, &constraints, None);

    let mut rng = FnSource::new(|| 0.5);
    let (child_a, child_b) = crossover(&a, &b, &constraints, &mut rng);

    assert_eq!(child_a.schedule.len(), 8);
    assert!(child_a.load_distribution.strength > 0.0);
    assert!(child_a.load_distribution.endurance > 0.0);
    assert!(child_a.interference_risk.strength_penalty > 0.0);
    assert!((child_a.load_distribution.total() - a.load_distribution.total()).abs() < 1e-9);
    assert!(child_b.schedule[0].trains(Modality::Endurance));
    assert!(child_b.schedule[7].trains(Modality::Strength));
    assert!(child_a.objectives.is_empty());
}

#[test]
fn test_fatigue_density_penalty() {
    let constraints = Constraints {
        max_weekly_sessions: 3,
        ..Constraints::default()
    };
    let schedule: Vec<Session> = (0..7)
        .map(|day| Session::new(day, [Modality::Strength], 45.0, 0.5))
        .collect();

    let fatigue = compute_fatigue(&schedule, &constraints, None);
    // base 0.25, density 7 vs cap 3
    let expected = 0.25 + 0.1 * (7.0 - 3.0) / 3.0;
    assert!((fatigue - expected).abs() < 1e-9);

    let stretched = compute_fatigue(&schedule, &constraints, Some(14));
    let expected_stretched = 0.125 + 0.1 * (3.5 - 3.0) / 3.0;
    assert!((stretched - expected_stretched).abs() < 1e-9);
    assert!(compute_fatigue(&[], &constraints, None).abs() < f64::EPSILON);
}

#[test]
fn test_zero_generations_still_selects_from_first_front() {
    // With no evolution the winner is picked from the random population by
    // (rank, crowding) alone; fatigue feasibility is not enforced here.
    let scheduler = MultiObjectiveScheduler::new(SchedulerConfig {
        max_generations: 0,
        ..common::quick_scheduler_config()
    });
    let goals = common::strength_endurance_goals();
    let evolution = scheduler
        .evolve(&goals, &Constraints::default(), 7, &mut common::seeded(13))
        .unwrap();

    assert!(evolution.history.is_empty());
    let best = evolution.best_index().unwrap();
    assert_eq!(evolution.ranking.ranks[best], 0);
    let summary = evolution.summary(&goals).unwrap();
    assert_eq!(summary.generations, 0);
}

#[test]
fn test_generation_history_tracks_front() {
    let scheduler = MultiObjectiveScheduler::new(common::quick_scheduler_config());
    let evolution = scheduler
        .evolve(&common::all_goal_types(), &Constraints::default(), 7, &mut common::seeded(17))
        .unwrap();

    for (index, stats) in evolution.history.iter().enumerate() {
        assert_eq!(stats.generation as usize, index);
        assert!(stats.pareto_front_size >= 1);
        assert!(stats.front_count >= 1);
        assert!(stats.feasible_count <= stats.population_size);
        assert_eq!(stats.best_objectives.len(), 4);
    }
}
