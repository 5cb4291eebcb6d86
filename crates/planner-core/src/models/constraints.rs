// ABOUTME: Training constraints with documented defaults merged over partial caller input
// ABOUTME: Covers weekly volume caps, recovery, equipment, fatigue ceiling and sport calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::calendar::SportEvent;
use crate::constants::{constraint_defaults, plan_limits};
use crate::errors::{AppError, AppResult};

/// Fully resolved training constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Maximum number of sessions per week
    pub max_weekly_sessions: u32,
    /// Maximum session duration (minutes)
    pub max_daily_duration: f64,
    /// Minimum recovery between sessions (hours)
    pub min_recovery_hours: f64,
    /// Equipment the athlete has access to
    pub available_equipment: BTreeSet<String>,
    /// Fatigue index above which a schedule counts as infeasible, in (0, 1]
    pub fatigue_ceiling: f64,
    /// Upcoming events
    pub sport_calendar: Vec<SportEvent>,
    /// Plan length in weeks for periodized plans (engine default when unset)
    pub time_frame_weeks: Option<u32>,
    /// Sessions per week for periodized plans (engine default when unset)
    pub sessions_per_week: Option<u32>,
    /// Sensitivity of the performance score to accumulated volume
    pub fatigue_sensitivity: Option<f64>,
    /// Explicit competition date
    pub competition_date: Option<NaiveDate>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_weekly_sessions: constraint_defaults::MAX_WEEKLY_SESSIONS,
            max_daily_duration: constraint_defaults::MAX_DAILY_DURATION_MINUTES,
            min_recovery_hours: constraint_defaults::MIN_RECOVERY_HOURS,
            available_equipment: constraint_defaults::AVAILABLE_EQUIPMENT
                .iter()
                .map(|item| (*item).to_owned())
                .collect(),
            fatigue_ceiling: constraint_defaults::FATIGUE_CEILING,
            sport_calendar: Vec::new(),
            time_frame_weeks: None,
            sessions_per_week: None,
            fatigue_sensitivity: None,
            competition_date: None,
        }
    }
}

impl Constraints {
    /// Earliest competition named by the explicit date or the sport calendar
    #[must_use]
    pub fn competition_date(&self) -> Option<NaiveDate> {
        let from_calendar = self
            .sport_calendar
            .iter()
            .filter(|event| event.is_competition)
            .map(|event| event.date)
            .min();
        match (self.competition_date, from_calendar) {
            (Some(explicit), Some(listed)) => Some(explicit.min(listed)),
            (explicit, listed) => explicit.or(listed),
        }
    }

    /// Check numeric ranges
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` when a field is outside its domain
    pub fn validate(&self) -> AppResult<()> {
        if self.max_weekly_sessions == 0 {
            return Err(AppError::invalid_input(
                "max_weekly_sessions must be at least 1",
            ));
        }
        if !self.max_daily_duration.is_finite() || self.max_daily_duration < 30.0 {
            return Err(AppError::invalid_input(
                "max_daily_duration must be at least 30 minutes",
            ));
        }
        if !self.min_recovery_hours.is_finite() || self.min_recovery_hours < 0.0 {
            return Err(AppError::invalid_input(
                "min_recovery_hours must be non-negative",
            ));
        }
        if !(self.fatigue_ceiling > 0.0 && self.fatigue_ceiling <= 1.0) {
            return Err(AppError::invalid_input("fatigue_ceiling must be in (0, 1]"));
        }
        if let Some(sessions) = self.sessions_per_week {
            if !(plan_limits::MIN_SESSIONS_PER_WEEK..=plan_limits::MAX_SESSIONS_PER_WEEK)
                .contains(&sessions)
            {
                return Err(AppError::invalid_input(format!(
                    "sessions_per_week must be between {} and {}, got {sessions}",
                    plan_limits::MIN_SESSIONS_PER_WEEK,
                    plan_limits::MAX_SESSIONS_PER_WEEK
                )));
            }
        }
        Ok(())
    }
}

/// Partial constraints as supplied by a caller
///
/// Every field is optional; [`ConstraintOverrides::resolve`] merges the
/// supplied values over the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintOverrides {
    /// See [`Constraints::max_weekly_sessions`]
    pub max_weekly_sessions: Option<u32>,
    /// See [`Constraints::max_daily_duration`]
    pub max_daily_duration: Option<f64>,
    /// See [`Constraints::min_recovery_hours`]
    pub min_recovery_hours: Option<f64>,
    /// See [`Constraints::available_equipment`]
    pub available_equipment: Option<Vec<String>>,
    /// See [`Constraints::fatigue_ceiling`]
    pub fatigue_ceiling: Option<f64>,
    /// See [`Constraints::sport_calendar`]
    pub sport_calendar: Option<Vec<SportEvent>>,
    /// See [`Constraints::time_frame_weeks`]
    pub time_frame_weeks: Option<u32>,
    /// See [`Constraints::sessions_per_week`]
    pub sessions_per_week: Option<u32>,
    /// See [`Constraints::fatigue_sensitivity`]
    pub fatigue_sensitivity: Option<f64>,
    /// See [`Constraints::competition_date`]
    pub competition_date: Option<NaiveDate>,
}

impl ConstraintOverrides {
    /// Merge over defaults and validate the result
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if the merged constraints are out of range
    pub fn resolve(self) -> AppResult<Constraints> {
        let defaults = Constraints::default();
        let constraints = Constraints {
            max_weekly_sessions: self
                .max_weekly_sessions
                .unwrap_or(defaults.max_weekly_sessions),
            max_daily_duration: self
                .max_daily_duration
                .unwrap_or(defaults.max_daily_duration),
            min_recovery_hours: self
                .min_recovery_hours
                .unwrap_or(defaults.min_recovery_hours),
            available_equipment: self.available_equipment.map_or(
                defaults.available_equipment,
                |items| items.into_iter().collect(),
            ),
            fatigue_ceiling: self.fatigue_ceiling.unwrap_or(defaults.fatigue_ceiling),
            sport_calendar: self.sport_calendar.unwrap_or_default(),
            time_frame_weeks: self.time_frame_weeks,
            sessions_per_week: self.sessions_per_week,
            fatigue_sensitivity: self.fatigue_sensitivity,
            competition_date: self.competition_date,
        };
        constraints.validate()?;
        Ok(constraints)
    }
}
