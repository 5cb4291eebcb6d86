// ABOUTME: Intelligence module configuration for training plan optimisation and periodization
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `scheduler` - Evolutionary search budget and operator rates
//! - `recovery` - Athlete recovery profile for the interference model
//! - `periodization` - Plan length and weekly frequency defaults
//! - `progression` - Deload triggering and auto-regulation

pub mod error;
pub mod periodization;
pub mod progression;
pub mod recovery;
pub mod scheduler;

pub use error::ConfigError;
pub use periodization::PeriodizationConfig;
pub use progression::ProgressionConfig;
pub use recovery::RecoveryProfile;
pub use scheduler::SchedulerConfig;

use planner_core::constants::plan_limits::{MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the multi-objective scheduler
    pub scheduler: SchedulerConfig,
    /// Default recovery profile for interference analysis
    pub recovery: RecoveryProfile,
    /// Configuration for the periodization builder
    pub periodization: PeriodizationConfig,
    /// Configuration for progression modelling
    pub progression: ProgressionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated range constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scheduler.validate()?;

        let recovery = &self.recovery;
        if !is_probability(recovery.testosterone_baseline)
            || !is_probability(recovery.cortisol_baseline)
        {
            return Err(ConfigError::InvalidRange(
                "hormonal baselines must be in [0, 1]",
            ));
        }
        if recovery.glycogen_capacity <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "glycogen_capacity must be positive",
            ));
        }
        if recovery.recovery_rate < 0.0 || recovery.glycogen_replenish_rate < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery and replenish rates must be non-negative",
            ));
        }

        let periodization = &self.periodization;
        let week = MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK;
        if !week.contains(&periodization.sessions_per_week) {
            return Err(ConfigError::InvalidRange(
                "sessions_per_week must be between 1 and 7",
            ));
        }
        if periodization.time_frame_weeks < 3 {
            return Err(ConfigError::ValueOutOfRange(
                "time_frame_weeks must be at least 3",
            ));
        }

        let progression = &self.progression;
        if progression.fatigue_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fatigue_threshold must be positive",
            ));
        }
        if !(progression.deload_fraction > 0.0 && progression.deload_fraction <= 1.0) {
            return Err(ConfigError::InvalidRange("deload_fraction must be in (0, 1]"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Scheduler overrides
        Self::apply_env_var(
            "PLANNER_SCHEDULER_POPULATION_SIZE",
            &mut self.scheduler.population_size,
        )?;
        Self::apply_env_var(
            "PLANNER_SCHEDULER_MAX_GENERATIONS",
            &mut self.scheduler.max_generations,
        )?;
        Self::apply_env_var(
            "PLANNER_SCHEDULER_CROSSOVER_RATE",
            &mut self.scheduler.crossover_rate,
        )?;
        Self::apply_env_var(
            "PLANNER_SCHEDULER_MUTATION_RATE",
            &mut self.scheduler.mutation_rate,
        )?;
        Self::apply_env_var(
            "PLANNER_SCHEDULER_MUTATION_SCALE",
            &mut self.scheduler.mutation_scale,
        )?;

        // Recovery profile overrides
        Self::apply_env_var(
            "PLANNER_RECOVERY_HORMONAL_SENSITIVITY",
            &mut self.recovery.hormonal_sensitivity,
        )?;
        Self::apply_env_var(
            "PLANNER_RECOVERY_TESTOSTERONE_BASELINE",
            &mut self.recovery.testosterone_baseline,
        )?;
        Self::apply_env_var(
            "PLANNER_RECOVERY_CORTISOL_BASELINE",
            &mut self.recovery.cortisol_baseline,
        )?;
        Self::apply_env_var(
            "PLANNER_RECOVERY_GLYCOGEN_CAPACITY",
            &mut self.recovery.glycogen_capacity,
        )?;
        Self::apply_env_var(
            "PLANNER_RECOVERY_RATE",
            &mut self.recovery.recovery_rate,
        )?;

        // Periodization overrides
        Self::apply_env_var(
            "PLANNER_PERIODIZATION_TIME_FRAME_WEEKS",
            &mut self.periodization.time_frame_weeks,
        )?;
        Self::apply_env_var(
            "PLANNER_PERIODIZATION_SESSIONS_PER_WEEK",
            &mut self.periodization.sessions_per_week,
        )?;

        // Progression overrides
        Self::apply_env_var(
            "PLANNER_PROGRESSION_FATIGUE_THRESHOLD",
            &mut self.progression.fatigue_threshold,
        )?;
        Self::apply_env_var(
            "PLANNER_PROGRESSION_DELOAD_FRACTION",
            &mut self.progression.deload_fraction,
        )?;

        Ok(self)
    }
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
