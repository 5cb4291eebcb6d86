// ABOUTME: Training goal model with goal type taxonomy and priority weighting
// ABOUTME: Unknown goal types deserialize as Other and contribute nothing to objectives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Fitness goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalType {
    /// Maximal and relative strength
    Strength,
    /// Aerobic endurance
    Endurance,
    /// Body composition (fat loss, lean mass)
    BodyComposition,
    /// Linear speed
    Speed,
    /// Change of direction and coordination
    Agility,
    /// Anything else; scored as zero
    #[serde(other)]
    Other,
}

impl GoalType {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::BodyComposition => "body-composition",
            Self::Speed => "speed",
            Self::Agility => "agility",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weighted training goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal category
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Relative importance, strictly positive
    pub priority: f64,
}

impl Goal {
    /// Create a goal
    #[must_use]
    pub const fn new(goal_type: GoalType, priority: f64) -> Self {
        Self {
            goal_type,
            priority,
        }
    }

    /// Check that the priority is a positive finite number
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when the priority is not usable
    pub fn validate(&self) -> AppResult<()> {
        if self.priority.is_finite() && self.priority > 0.0 {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Goal '{}' has invalid priority {}",
                self.goal_type, self.priority
            )))
        }
    }

    /// Validate a full goal list: non-empty and every goal well formed
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` for an empty list or a malformed goal
    pub fn validate_all(goals: &[Self]) -> AppResult<()> {
        if goals.is_empty() {
            return Err(AppError::invalid_input("At least one goal is required"));
        }
        goals.iter().try_for_each(Self::validate)
    }
}
