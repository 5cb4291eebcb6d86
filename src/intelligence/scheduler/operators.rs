// ABOUTME: Genetic operators of the scheduler: tournament selection, crossover and mutation
// ABOUTME: Every operator draws from the injected random source and re-derives candidate state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use planner_core::models::Constraints;

use super::candidate::{recovery_hours, Candidate};
use super::sorting::Ranking;
use crate::intelligence::physiological_constants::scheduler::{
    MUTATION_DURATION_MIN, MUTATION_INTENSITY_MAX, MUTATION_INTENSITY_MIN,
};
use crate::intelligence::random::RandomSource;

/// Constraint-aware comparison of two population members
///
/// Feasible beats infeasible, then lower rank, then larger crowding.
#[must_use]
pub fn compare_constrained(
    population: &[Candidate],
    ranking: &Ranking,
    fatigue_ceiling: f64,
    a: usize,
    b: usize,
) -> Ordering {
    let feasible_a = population[a].is_feasible(fatigue_ceiling);
    let feasible_b = population[b].is_feasible(fatigue_ceiling);
    feasible_b
        .cmp(&feasible_a)
        .then_with(|| ranking.compare(a, b))
}

/// Tournament over `size` contestants drawn with replacement from `pool`
///
/// Returns a population index. `pool` must be non-empty.
pub fn tournament(
    pool: &[usize],
    population: &[Candidate],
    ranking: &Ranking,
    fatigue_ceiling: f64,
    size: usize,
    rng: &mut dyn RandomSource,
) -> usize {
    let mut winner = pool[rng.next_index(pool.len())];
    for _ in 1..size.max(1) {
        let challenger = pool[rng.next_index(pool.len())];
        if compare_constrained(population, ranking, fatigue_ceiling, challenger, winner)
            == Ordering::Less
        {
            winner = challenger;
        }
    }
    winner
}

/// Single-point schedule crossover
///
/// The cut lies strictly inside the shorter parent when it has at least two
/// sessions; otherwise the children are clones.
pub fn crossover(
    first: &Candidate,
    second: &Candidate,
    constraints: &Constraints,
    rng: &mut dyn RandomSource,
) -> (Candidate, Candidate) {
    let shortest = first.schedule.len().min(second.schedule.len());
    if shortest < 2 {
        return (first.clone(), second.clone());
    }
    let cut = 1 + rng.next_index(shortest - 1);

    let splice = |head: &Candidate, tail: &Candidate| {
        let schedule = head.schedule[..cut]
            .iter()
            .chain(&tail.schedule[cut..])
            .cloned()
            .collect();
        Candidate::from_schedule(schedule, constraints, None)
    };
    (splice(first, second), splice(second, first))
}

/// Per-session mutation of intensity and duration by a shared factor
pub fn mutate(
    candidate: &mut Candidate,
    rate: f64,
    scale: f64,
    constraints: &Constraints,
    rng: &mut dyn RandomSource,
) {
    for session in &mut candidate.schedule {
        if !rng.chance(rate) {
            continue;
        }
        let factor = 1.0 + (rng.next_f64() - 0.5) * scale;
        session.intensity =
            (session.intensity * factor).clamp(MUTATION_INTENSITY_MIN, MUTATION_INTENSITY_MAX);
        let duration_cap = constraints.max_daily_duration.max(MUTATION_DURATION_MIN);
        session.duration = (session.duration * factor).clamp(MUTATION_DURATION_MIN, duration_cap);
        session.recovery = recovery_hours(constraints, session.intensity);
    }
    candidate.refresh(constraints);
}
