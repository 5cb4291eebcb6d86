// ABOUTME: Periodization builder defaults for plan length and weekly frequency
// ABOUTME: Constraint fields left unset by the caller fall back to these values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Defaults for rule-based periodized plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationConfig {
    /// Plan length in weeks (excluding any taper)
    pub time_frame_weeks: u32,
    /// Training days per week
    pub sessions_per_week: u32,
    /// Sensitivity of the performance score to total volume
    pub fatigue_sensitivity: f64,
}

impl Default for PeriodizationConfig {
    fn default() -> Self {
        Self {
            time_frame_weeks: 12,
            sessions_per_week: 4,
            fatigue_sensitivity: 1.0,
        }
    }
}
