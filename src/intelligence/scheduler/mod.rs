// ABOUTME: NSGA-II multi-objective scheduler evolving day-by-day training schedules
// ABOUTME: Ranks candidates by Pareto front and crowding, breeds offspring, returns the best plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Multi-objective training schedule optimisation.
//!
//! The population is a plain `Vec<Candidate>`. Ranks, fronts and crowding
//! distances are recomputed into a [`Ranking`] each generation and indexed by
//! population position.
//!
//! ```text
//! random population ─▶ evaluate ─▶ rank ─▶ survivors ─┐
//!        ▲                                            │
//!        └──────── survivors + offspring ◀── breed ◀──┘
//! ```

/// Candidate schedules and their derived state
pub mod candidate;
/// Genetic operators
pub mod operators;
/// Dominance, fronts and crowding distance
pub mod sorting;

use std::cmp::Ordering;

use planner_core::errors::{AppError, AppResult};
use planner_core::models::{Constraints, Goal, Session};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::intelligence::{IntelligenceConfig, SchedulerConfig};
use crate::intelligence::objectives::{Objective, ObjectiveFunctions};
use crate::intelligence::physiological_constants::scheduler::MIN_HORIZON_DAYS;
use crate::intelligence::random::{RandomSource, RngSource};

pub use candidate::{compute_fatigue, Candidate, InterferenceRisk, LoadDistribution};
pub use sorting::{crowding_distance, dominates, fast_non_dominated_sort, Ranking};

/// A goal paired with the winning candidate's objective value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSatisfaction {
    /// The goal
    pub goal: Goal,
    /// Priority-weighted objective value
    pub score: f64,
}

/// Best plan found by a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// One session per day
    pub schedule: Vec<Session>,
    /// Load per modality
    pub load_distribution: LoadDistribution,
    /// Fatigue index
    pub fatigue_index: f64,
    /// Simplified interference estimate
    pub interference_risk: InterferenceRisk,
    /// Objective values, one per goal
    pub objective_scores: Vec<f64>,
    /// Goals paired with their objective values
    pub goals_satisfied: Vec<GoalSatisfaction>,
    /// Generations evolved
    pub generations: u32,
    /// Size of the final Pareto front
    pub pareto_front_size: usize,
}

/// Statistics recorded before breeding each generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Zero-based generation number
    pub generation: u32,
    /// Population size at evaluation time
    pub population_size: usize,
    /// Number of fronts
    pub front_count: usize,
    /// Size of front 0
    pub pareto_front_size: usize,
    /// Candidates within the fatigue ceiling
    pub feasible_count: usize,
    /// Best value per objective
    pub best_objectives: Vec<f64>,
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Evolution {
    /// Final, evaluated population
    pub population: Vec<Candidate>,
    /// Ranking of the final population
    pub ranking: Ranking,
    /// Per-generation statistics
    pub history: Vec<GenerationStats>,
}

impl Evolution {
    /// Index of the best candidate by rank, then crowding distance
    ///
    /// Front 0 always exists for a non-empty population, so the winner is
    /// rank 0 even after zero generations.
    #[must_use]
    pub fn best_index(&self) -> Option<usize> {
        (0..self.population.len()).min_by(|&a, &b| self.ranking.compare(a, b))
    }

    /// Summarise the best candidate against the goals it was scored on
    #[must_use]
    pub fn summary(&self, goals: &[Goal]) -> Option<Summary> {
        let best = &self.population[self.best_index()?];
        Some(Summary {
            schedule: best.schedule.clone(),
            load_distribution: best.load_distribution,
            fatigue_index: best.fatigue_index,
            interference_risk: best.interference_risk,
            objective_scores: best.objectives.clone(),
            goals_satisfied: goals
                .iter()
                .zip(&best.objectives)
                .map(|(goal, score)| GoalSatisfaction {
                    goal: *goal,
                    score: *score,
                })
                .collect(),
            generations: self.history.len() as u32,
            pareto_front_size: self.ranking.pareto_front_size(),
        })
    }
}

/// NSGA-II scheduler
#[derive(Debug, Clone, Default)]
pub struct MultiObjectiveScheduler {
    config: SchedulerConfig,
}

impl MultiObjectiveScheduler {
    /// Create a scheduler with explicit settings
    #[must_use]
    pub const fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Create a scheduler from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(IntelligenceConfig::global().scheduler.clone())
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Optimise a schedule over `time_horizon` days with an injected random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty goal list or invalid goals and
    /// constraints, and `ConfigInvalid` for invalid scheduler settings.
    pub fn optimize_training_plan(
        &self,
        goals: &[Goal],
        constraints: &Constraints,
        time_horizon: usize,
        rng: &mut dyn RandomSource,
    ) -> AppResult<Summary> {
        let evolution = self.evolve(goals, constraints, time_horizon, rng)?;
        evolution
            .summary(goals)
            .ok_or_else(|| AppError::internal("scheduler produced an empty population"))
    }

    /// Optimise with a platform-seeded random source
    ///
    /// # Errors
    ///
    /// See [`Self::optimize_training_plan`].
    pub fn optimize_with_entropy(
        &self,
        goals: &[Goal],
        constraints: &Constraints,
        time_horizon: usize,
    ) -> AppResult<Summary> {
        let mut rng = RngSource::from_entropy();
        self.optimize_training_plan(goals, constraints, time_horizon, &mut rng)
    }

    /// Run the full evolution and return the final population with its ranking
    ///
    /// # Errors
    ///
    /// See [`Self::optimize_training_plan`].
    pub fn evolve(
        &self,
        goals: &[Goal],
        constraints: &Constraints,
        time_horizon: usize,
        rng: &mut dyn RandomSource,
    ) -> AppResult<Evolution> {
        Goal::validate_all(goals)?;
        constraints.validate()?;
        self.config.validate()?;

        let objectives = ObjectiveFunctions::for_goals(goals);
        let days = time_horizon.max(MIN_HORIZON_DAYS);
        let size = self.config.population_size;
        let survivor_cap = self.config.survivor_count();

        info!(
            goals = goals.len(),
            days,
            population = size,
            generations = self.config.max_generations,
            "Starting schedule optimisation"
        );

        let mut population: Vec<Candidate> = (0..size)
            .map(|_| Candidate::random(days, constraints, rng))
            .collect();
        let mut history = Vec::with_capacity(self.config.max_generations as usize);

        for generation in 0..self.config.max_generations {
            debug_assert_eq!(population.len(), size);
            let ranking = evaluate_and_rank(&mut population, &objectives);
            let stats = generation_stats(generation, &population, &ranking, constraints);
            debug!(
                generation,
                fronts = stats.front_count,
                pareto_front = stats.pareto_front_size,
                feasible = stats.feasible_count,
                "Generation ranked"
            );
            history.push(stats);

            let survivors = ranking.select_survivors(survivor_cap);
            let offspring = self.breed(
                &population,
                &ranking,
                &survivors,
                size - survivors.len(),
                constraints,
                rng,
            );
            let mut next: Vec<Candidate> = survivors
                .iter()
                .map(|&index| population[index].clone())
                .collect();
            next.extend(offspring);
            population = next;
        }

        let ranking = evaluate_and_rank(&mut population, &objectives);
        info!(
            generations = history.len(),
            pareto_front = ranking.pareto_front_size(),
            "Schedule optimisation finished"
        );

        Ok(Evolution {
            population,
            ranking,
            history,
        })
    }

    /// Produce `count` offspring from the survivor pool
    fn breed(
        &self,
        population: &[Candidate],
        ranking: &Ranking,
        pool: &[usize],
        count: usize,
        constraints: &Constraints,
        rng: &mut dyn RandomSource,
    ) -> Vec<Candidate> {
        let mut offspring = Vec::with_capacity(count + 1);
        if pool.is_empty() {
            return offspring;
        }
        let ceiling = constraints.fatigue_ceiling;
        let size = self.config.tournament_size;

        while offspring.len() < count {
            let first = operators::tournament(pool, population, ranking, ceiling, size, rng);
            let second = operators::tournament(pool, population, ranking, ceiling, size, rng);

            let (mut child_a, mut child_b) = if rng.chance(self.config.crossover_rate) {
                operators::crossover(&population[first], &population[second], constraints, rng)
            } else {
                (population[first].clone(), population[second].clone())
            };
            for child in [&mut child_a, &mut child_b] {
                operators::mutate(
                    child,
                    self.config.mutation_rate,
                    self.config.mutation_scale,
                    constraints,
                    rng,
                );
            }
            offspring.push(child_a);
            offspring.push(child_b);
        }
        offspring.truncate(count);
        offspring
    }
}

/// Score every candidate in parallel, then rank the population
fn evaluate_and_rank(population: &mut [Candidate], objectives: &[Objective]) -> Ranking {
    population
        .par_iter_mut()
        .for_each(|candidate| candidate.evaluate(objectives));
    let vectors: Vec<Vec<f64>> = population.iter().map(|c| c.objectives.clone()).collect();
    Ranking::compute(&vectors)
}

fn generation_stats(
    generation: u32,
    population: &[Candidate],
    ranking: &Ranking,
    constraints: &Constraints,
) -> GenerationStats {
    let dimensions = population.first().map_or(0, |c| c.objectives.len());
    let best_objectives = (0..dimensions)
        .map(|m| {
            population
                .iter()
                .map(|c| c.objectives[m])
                .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
                .unwrap_or(0.0)
        })
        .collect();
    GenerationStats {
        generation,
        population_size: population.len(),
        front_count: ranking.fronts.len(),
        pareto_front_size: ranking.pareto_front_size(),
        feasible_count: population
            .iter()
            .filter(|c| c.is_feasible(constraints.fatigue_ceiling))
            .count(),
        best_objectives,
    }
}
