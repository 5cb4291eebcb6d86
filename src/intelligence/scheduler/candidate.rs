// ABOUTME: Candidate schedule (chromosome) of the evolutionary scheduler and its derived state
// ABOUTME: Load distribution, fatigue index and the scheduler's simplified interference estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::time_constants::{DAYS_PER_WEEK, MINUTES_PER_HOUR};
use planner_core::models::{Constraints, Modality, Session};
use serde::{Deserialize, Serialize};

use crate::intelligence::objectives::Objective;
use crate::intelligence::physiological_constants::scheduler::{
    BASE_DURATION_MINUTES, DURATION_SPREAD_MINUTES, GLYCOGEN_STRESS_LOAD_FACTOR,
    INITIAL_INTENSITY_MIN, INITIAL_INTENSITY_SPREAD, LOAD_EPSILON,
    MODALITY_INCLUSION_PROBABILITY, STRENGTH_PENALTY_PER_RATIO, WEEKLY_DENSITY_PENALTY,
};
use crate::intelligence::random::RandomSource;

/// Intensity-weighted training hours per modality
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadDistribution {
    /// Strength load
    pub strength: f64,
    /// Endurance load
    pub endurance: f64,
    /// Conditioning load
    pub conditioning: f64,
    /// Speed load
    pub speed: f64,
}

impl LoadDistribution {
    /// Sum the load of a schedule; a session's load is split evenly over its modalities
    #[must_use]
    pub fn from_schedule(schedule: &[Session]) -> Self {
        let mut load = Self::default();
        for session in schedule {
            if session.modalities.is_empty() {
                continue;
            }
            let share = (session.duration / MINUTES_PER_HOUR) * session.intensity
                / session.modalities.len() as f64;
            for modality in &session.modalities {
                *load.get_mut(*modality) += share;
            }
        }
        load
    }

    /// Load of one modality
    #[must_use]
    pub const fn get(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Strength => self.strength,
            Modality::Endurance => self.endurance,
            Modality::Conditioning => self.conditioning,
            Modality::Speed => self.speed,
        }
    }

    fn get_mut(&mut self, modality: Modality) -> &mut f64 {
        match modality {
            Modality::Strength => &mut self.strength,
            Modality::Endurance => &mut self.endurance,
            Modality::Conditioning => &mut self.conditioning,
            Modality::Speed => &mut self.speed,
        }
    }

    /// Load summed over all modalities
    #[must_use]
    pub fn total(&self) -> f64 {
        self.strength + self.endurance + self.conditioning + self.speed
    }
}

/// The scheduler's simplified interference estimate
///
/// Derived from the load distribution alone and distinct from
/// [`InterferenceModel`](crate::intelligence::interference::InterferenceModel).
/// Objective values depend on this exact formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterferenceRisk {
    /// Strength blunting from endurance volume
    pub strength_penalty: f64,
    /// Glycogen demand relative to total load
    pub glycogen_stress: f64,
    /// Mean of the two stresses
    pub hormonal_conflict: f64,
}

impl InterferenceRisk {
    /// Estimate interference risk from a load distribution
    #[must_use]
    pub fn estimate(load: &LoadDistribution) -> Self {
        let ratio = load.endurance / (load.strength + LOAD_EPSILON);
        let strength_penalty = (STRENGTH_PENALTY_PER_RATIO * ratio).min(1.0);
        let total = load.total();
        let glycogen_stress = if total > 0.0 {
            ((load.endurance + load.conditioning) / (GLYCOGEN_STRESS_LOAD_FACTOR * total)).min(1.0)
        } else {
            0.0
        };
        Self {
            strength_penalty,
            glycogen_stress,
            hormonal_conflict: ((strength_penalty + glycogen_stress) / 2.0).min(1.0),
        }
    }
}

/// Fatigue index of a schedule
///
/// Mean daily `intensity * duration / max_daily_duration` over the horizon,
/// plus a penalty for exceeding the weekly session cap. The horizon defaults
/// to the schedule's own length.
#[must_use]
pub fn compute_fatigue(
    schedule: &[Session],
    constraints: &Constraints,
    horizon_days: Option<usize>,
) -> f64 {
    let days = horizon_days.unwrap_or(schedule.len());
    if days == 0 || constraints.max_daily_duration <= 0.0 {
        return 0.0;
    }
    let days_f = days as f64;
    let strain: f64 = schedule
        .iter()
        .map(|s| s.intensity * s.duration / constraints.max_daily_duration)
        .sum();

    let max_weekly = f64::from(constraints.max_weekly_sessions.max(1));
    let weekly_density = schedule.len() as f64 / days_f * DAYS_PER_WEEK;
    let excess = (weekly_density - max_weekly).max(0.0) / max_weekly;

    strain / days_f + WEEKLY_DENSITY_PENALTY * excess
}

/// Modalities trainable with the available equipment, in canonical order
#[must_use]
pub fn available_modalities(constraints: &Constraints) -> Vec<Modality> {
    Modality::ALL
        .into_iter()
        .filter(|m| m.is_available(&constraints.available_equipment))
        .collect()
}

/// Planned recovery hours after a session of the given intensity
#[must_use]
pub fn recovery_hours(constraints: &Constraints, intensity: f64) -> f64 {
    constraints.min_recovery_hours * (1.0 + intensity)
}

/// A candidate schedule and its derived state
///
/// Ranking and crowding metadata live in the scheduler's per-generation
/// scratch arrays, indexed by population position, not on the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// One session per day, in day order
    pub schedule: Vec<Session>,
    /// Load per modality
    pub load_distribution: LoadDistribution,
    /// Fatigue index
    pub fatigue_index: f64,
    /// Simplified interference estimate
    pub interference_risk: InterferenceRisk,
    /// Objective values, one per goal
    pub objectives: Vec<f64>,
}

impl Candidate {
    /// Build a candidate and derive its state from the schedule
    #[must_use]
    pub fn from_schedule(
        schedule: Vec<Session>,
        constraints: &Constraints,
        horizon_days: Option<usize>,
    ) -> Self {
        let load_distribution = LoadDistribution::from_schedule(&schedule);
        Self {
            fatigue_index: compute_fatigue(&schedule, constraints, horizon_days),
            interference_risk: InterferenceRisk::estimate(&load_distribution),
            load_distribution,
            schedule,
            objectives: Vec::new(),
        }
    }

    /// Random schedule over `days` days
    pub fn random(days: usize, constraints: &Constraints, rng: &mut dyn RandomSource) -> Self {
        let allowed = available_modalities(constraints);
        let schedule = (0..days)
            .map(|day| {
                let mut modalities: Vec<Modality> = allowed
                    .iter()
                    .copied()
                    .filter(|_| rng.chance(MODALITY_INCLUSION_PROBABILITY))
                    .collect();
                if modalities.is_empty() && !allowed.is_empty() {
                    modalities.push(allowed[rng.next_index(allowed.len())]);
                }
                let duration = DURATION_SPREAD_MINUTES
                    .mul_add(rng.next_f64(), BASE_DURATION_MINUTES)
                    .min(constraints.max_daily_duration);
                let intensity =
                    INITIAL_INTENSITY_SPREAD.mul_add(rng.next_f64(), INITIAL_INTENSITY_MIN);
                Session::new(day as u32, modalities, duration, intensity)
                    .with_recovery(recovery_hours(constraints, intensity))
            })
            .collect();
        Self::from_schedule(schedule, constraints, Some(days))
    }

    /// Recompute load, fatigue and interference after the schedule changed
    pub fn refresh(&mut self, constraints: &Constraints) {
        self.load_distribution = LoadDistribution::from_schedule(&self.schedule);
        self.fatigue_index = compute_fatigue(&self.schedule, constraints, None);
        self.interference_risk = InterferenceRisk::estimate(&self.load_distribution);
        self.objectives.clear();
    }

    /// Score the candidate against every objective
    pub fn evaluate(&mut self, objectives: &[Objective]) {
        let (load, fatigue, risk) = (
            &self.load_distribution,
            self.fatigue_index,
            &self.interference_risk,
        );
        self.objectives = objectives
            .iter()
            .map(|o| o.evaluate(load, fatigue, risk))
            .collect();
    }

    /// Whether the fatigue index respects the ceiling
    #[must_use]
    pub fn is_feasible(&self, fatigue_ceiling: f64) -> bool {
        self.fatigue_index <= fatigue_ceiling
    }
}
