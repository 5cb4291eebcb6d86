// ABOUTME: Goal-specific objective functions scored by the multi-objective scheduler
// ABOUTME: Each goal maps to priority x (benefit - penalties) over load, fatigue and risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Objective functions.
//!
//! Every objective is maximised. Penalties read the candidate's embedded
//! [`InterferenceRisk`], never the detailed
//! [`InterferenceModel`](crate::intelligence::interference::InterferenceModel).

use planner_core::models::{Goal, GoalType};
use serde::{Deserialize, Serialize};

use crate::intelligence::physiological_constants::objectives::{
    BODY_COMPOSITION_FATIGUE_PENALTY, BODY_COMPOSITION_FATIGUE_THRESHOLD,
    ENDURANCE_FATIGUE_PENALTY, ENDURANCE_FATIGUE_THRESHOLD, ENDURANCE_GLYCOGEN_PENALTY,
    SPEED_CONDITIONING_SHARE, SPEED_HORMONAL_PENALTY, SPEED_STRENGTH_SHARE,
    STRENGTH_FATIGUE_PENALTY, STRENGTH_FATIGUE_THRESHOLD, STRENGTH_INTERFERENCE_PENALTY,
};
use crate::intelligence::scheduler::candidate::{InterferenceRisk, LoadDistribution};

/// Fatigue above a tolerated threshold
fn excess_fatigue(fatigue_index: f64, threshold: f64) -> f64 {
    (fatigue_index - threshold).max(0.0)
}

/// Objective bound to one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Goal this objective scores
    pub goal: Goal,
}

impl Objective {
    /// Priority-weighted score of a candidate's derived state
    #[must_use]
    pub fn evaluate(
        &self,
        load: &LoadDistribution,
        fatigue_index: f64,
        interference: &InterferenceRisk,
    ) -> f64 {
        let raw = match self.goal.goal_type {
            GoalType::Strength => ObjectiveFunctions::strength(load, fatigue_index, interference),
            GoalType::Endurance => ObjectiveFunctions::endurance(load, fatigue_index, interference),
            GoalType::BodyComposition => {
                ObjectiveFunctions::body_composition(load, fatigue_index, interference)
            }
            GoalType::Speed | GoalType::Agility => {
                ObjectiveFunctions::speed_agility(load, interference)
            }
            GoalType::Other => return 0.0,
        };
        self.goal.priority * raw
    }
}

/// Unweighted goal objectives
pub struct ObjectiveFunctions;

impl ObjectiveFunctions {
    /// One objective per goal, in goal order
    #[must_use]
    pub fn for_goals(goals: &[Goal]) -> Vec<Objective> {
        goals.iter().map(|goal| Objective { goal: *goal }).collect()
    }

    /// Strength: load minus fatigue and strength-interference penalties
    #[must_use]
    pub fn strength(
        load: &LoadDistribution,
        fatigue_index: f64,
        interference: &InterferenceRisk,
    ) -> f64 {
        load.strength
            - STRENGTH_FATIGUE_PENALTY * excess_fatigue(fatigue_index, STRENGTH_FATIGUE_THRESHOLD)
            - STRENGTH_INTERFERENCE_PENALTY * interference.strength_penalty
    }

    /// Endurance: load minus glycogen-stress and fatigue penalties
    #[must_use]
    pub fn endurance(
        load: &LoadDistribution,
        fatigue_index: f64,
        interference: &InterferenceRisk,
    ) -> f64 {
        load.endurance
            - ENDURANCE_GLYCOGEN_PENALTY * interference.glycogen_stress
            - ENDURANCE_FATIGUE_PENALTY * excess_fatigue(fatigue_index, ENDURANCE_FATIGUE_THRESHOLD)
    }

    /// Body composition: conditioning load discounted by hormonal conflict, minus fatigue
    #[must_use]
    pub fn body_composition(
        load: &LoadDistribution,
        fatigue_index: f64,
        interference: &InterferenceRisk,
    ) -> f64 {
        load.conditioning * (1.0 - interference.hormonal_conflict)
            - BODY_COMPOSITION_FATIGUE_PENALTY
                * excess_fatigue(fatigue_index, BODY_COMPOSITION_FATIGUE_THRESHOLD)
    }

    /// Speed and agility: blended strength/conditioning load minus hormonal conflict
    #[must_use]
    pub fn speed_agility(load: &LoadDistribution, interference: &InterferenceRisk) -> f64 {
        SPEED_STRENGTH_SHARE * load.strength + SPEED_CONDITIONING_SHARE * load.conditioning
            - SPEED_HORMONAL_PENALTY * interference.hormonal_conflict
    }
}
