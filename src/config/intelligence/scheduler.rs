// ABOUTME: Multi-objective scheduler configuration (population, generations, operator rates)
// ABOUTME: Defaults tuned for a bounded NSGA-II search over weekly training schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{is_probability, ConfigError};

/// Evolutionary scheduler parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Number of candidate schedules per generation
    pub population_size: usize,
    /// Fixed generation budget
    pub max_generations: u32,
    /// Probability that two selected parents are recombined
    pub crossover_rate: f64,
    /// Per-session mutation probability
    pub mutation_rate: f64,
    /// Spread of the multiplicative mutation factor
    pub mutation_scale: f64,
    /// Number of contestants per tournament
    pub tournament_size: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            population_size: 40,
            max_generations: 60,
            crossover_rate: 0.9,
            mutation_rate: 0.15,
            mutation_scale: 0.3,
            tournament_size: 3,
        }
    }
}

impl SchedulerConfig {
    /// Number of survivors kept from each generation
    #[must_use]
    pub const fn survivor_count(&self) -> usize {
        self.population_size.div_ceil(2)
    }

    /// Validate the search budget and operator rates
    ///
    /// # Errors
    ///
    /// Returns the first violated range constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 4 {
            return Err(ConfigError::ValueOutOfRange(
                "population_size must be at least 4",
            ));
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "tournament_size must be at least 1",
            ));
        }
        if !is_probability(self.crossover_rate) || !is_probability(self.mutation_rate) {
            return Err(ConfigError::InvalidRange(
                "crossover_rate and mutation_rate must be in [0, 1]",
            ));
        }
        if !(self.mutation_scale.is_finite() && self.mutation_scale >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "mutation_scale must be non-negative",
            ));
        }
        Ok(())
    }
}
