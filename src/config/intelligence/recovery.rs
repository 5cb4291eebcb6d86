// ABOUTME: Athlete recovery profile used by the interference model
// ABOUTME: Hormonal baselines, glycogen store parameters and recovery kinetics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Physiological profile consumed by `InterferenceModel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryProfile {
    /// Scaling of hormonal disruption per unit of session stress
    pub hormonal_sensitivity: f64,
    /// Resting testosterone, normalised to [0, 1]
    pub testosterone_baseline: f64,
    /// Resting cortisol, normalised to [0, 1]
    pub cortisol_baseline: f64,
    /// Muscle glycogen capacity (grams)
    pub glycogen_capacity: f64,
    /// Glycogen resynthesis between sessions (grams per hour)
    pub glycogen_replenish_rate: f64,
    /// Exponential recovery constant (per hour)
    pub recovery_rate: f64,
}

impl Default for RecoveryProfile {
    fn default() -> Self {
        Self {
            hormonal_sensitivity: 0.5,
            testosterone_baseline: 0.6,
            cortisol_baseline: 0.4,
            glycogen_capacity: 500.0,
            glycogen_replenish_rate: 5.0,
            recovery_rate: 0.05,
        }
    }
}
