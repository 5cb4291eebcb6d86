// ABOUTME: Calendar and sport event models for competition-aware planning
// ABOUTME: A competition date triggers the taper phase in periodized plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An entry in the athlete's sport calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportEvent {
    /// Event date
    pub date: NaiveDate,
    /// Event name
    #[serde(default)]
    pub name: String,
    /// Whether the event is a competition (as opposed to a camp, test day, etc.)
    #[serde(default = "default_true")]
    pub is_competition: bool,
}

const fn default_true() -> bool {
    true
}

/// Planning calendar supplied alongside goals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// Target competition
    #[serde(default)]
    pub competition_date: Option<NaiveDate>,
}

impl Calendar {
    /// Calendar with a target competition
    #[must_use]
    pub const fn with_competition(date: NaiveDate) -> Self {
        Self {
            competition_date: Some(date),
        }
    }
}
