// ABOUTME: Rule-based periodization builder producing accumulation through taper phases
// ABOUTME: Derives phase emphasis from goals, lays out weekly plans and scores the overall plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Periodization.
//!
//! Independent of the evolutionary scheduler: the same goals and constraints
//! always produce the same phases. Each phase is enriched with a
//! [`ProgressionModel`] built from its weekly plan.

use std::collections::BTreeSet;
use std::fmt;

use planner_core::errors::{AppError, AppResult};
use planner_core::models::{Calendar, Constraints, Goal, GoalType, Modality};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::intelligence::{IntelligenceConfig, PeriodizationConfig, ProgressionConfig};
use crate::intelligence::physiological_constants::periodization::{
    ACCUMULATION_SHARE, FATIGUE_VOLUME_DIVISOR, INTENSIFICATION_SHARE, INTENSITY_SCORE_WEIGHT,
    MIN_TIME_FRAME_WEEKS, SESSION_LOAD_SCALE, TAPER_WEEKS, VOLUME_SCORE_WEIGHT,
};
use crate::intelligence::progression::{ProgressionBuilder, ProgressionModel};

/// Training emphasis of a phase or session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    /// Strength development
    Strength,
    /// Aerobic development
    Endurance,
    /// Body composition
    BodyComposition,
    /// Speed and agility
    Speed,
    /// Fallback when no goal maps to an emphasis
    General,
}

impl Emphasis {
    /// Emphasis served by a goal type; agility trains as speed
    #[must_use]
    pub const fn from_goal(goal_type: GoalType) -> Option<Self> {
        match goal_type {
            GoalType::Strength => Some(Self::Strength),
            GoalType::Endurance => Some(Self::Endurance),
            GoalType::BodyComposition => Some(Self::BodyComposition),
            GoalType::Speed | GoalType::Agility => Some(Self::Speed),
            GoalType::Other => None,
        }
    }

    /// Modalities trained by sessions of this emphasis
    #[must_use]
    pub fn modalities(&self) -> BTreeSet<Modality> {
        let modalities: &[Modality] = match self {
            Self::Strength => &[Modality::Strength],
            Self::Endurance => &[Modality::Endurance],
            Self::BodyComposition => &[Modality::Strength, Modality::Conditioning],
            Self::Speed => &[Modality::Speed],
            Self::General => &[Modality::Conditioning],
        };
        modalities.iter().copied().collect()
    }

    /// Typical working intensity of the emphasis
    #[must_use]
    pub const fn base_intensity(&self) -> f64 {
        match self {
            Self::Strength => 0.85,
            Self::Endurance => 0.65,
            Self::Speed => 0.9,
            Self::BodyComposition | Self::General => 0.7,
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::BodyComposition => "body-composition",
            Self::Speed => "speed",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training focus of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseFocus {
    /// High volume, moderate intensity
    Volume,
    /// Rising intensity
    Intensity,
    /// Peak performance expression
    Performance,
    /// Load shedding before competition
    Taper,
}

impl PhaseFocus {
    /// Planned session length (minutes) before the daily cap
    #[must_use]
    pub const fn session_minutes(&self) -> f64 {
        match self {
            Self::Volume => 75.0,
            Self::Intensity => 60.0,
            Self::Performance => 50.0,
            Self::Taper => 40.0,
        }
    }

    /// Intensity of the session on a given training day
    #[must_use]
    pub fn day_intensity(&self, day: u32) -> f64 {
        match self {
            Self::Volume => 0.65 + 0.05 * f64::from(day % 3),
            Self::Intensity => 0.7 + 0.07 * f64::from(day % 2),
            Self::Performance | Self::Taper => 0.6 + 0.08 * f64::from(day % 4),
        }
    }
}

/// Recovery priority of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryFocus {
    /// Substrate and metabolic recovery
    Metabolic,
    /// Nervous-system recovery
    Neuromuscular,
    /// No specific priority
    General,
}

/// Phase of a periodized plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseKind {
    /// General preparation
    Accumulation,
    /// Specific preparation
    Intensification,
    /// Peaking
    Realization,
    /// Pre-competition taper
    Taper,
}

impl PhaseKind {
    /// Focus of the phase
    #[must_use]
    pub const fn focus(&self) -> PhaseFocus {
        match self {
            Self::Accumulation => PhaseFocus::Volume,
            Self::Intensification => PhaseFocus::Intensity,
            Self::Realization => PhaseFocus::Performance,
            Self::Taper => PhaseFocus::Taper,
        }
    }

    /// Human-readable intensity label
    #[must_use]
    pub const fn intensity_label(&self) -> &'static str {
        match self {
            Self::Accumulation => "moderate",
            Self::Intensification => "high",
            Self::Realization => "peak",
            Self::Taper => "low",
        }
    }

    /// Recovery priority of the phase
    #[must_use]
    pub const fn recovery_focus(&self) -> RecoveryFocus {
        match self {
            Self::Accumulation => RecoveryFocus::Metabolic,
            Self::Intensification | Self::Realization => RecoveryFocus::Neuromuscular,
            Self::Taper => RecoveryFocus::General,
        }
    }

    /// Weighting factor of an emphasis in this phase
    #[must_use]
    pub const fn emphasis_factor(&self, emphasis: Emphasis) -> f64 {
        match (self, emphasis) {
            (Self::Accumulation, Emphasis::Strength) => 0.7,
            (Self::Accumulation, Emphasis::Endurance) => 0.9,
            (Self::Accumulation, Emphasis::BodyComposition) => 0.8,
            (Self::Accumulation, Emphasis::Speed) => 0.5,
            (Self::Intensification, Emphasis::Strength) => 0.9,
            (Self::Intensification, Emphasis::Endurance | Emphasis::BodyComposition) => 0.6,
            (Self::Intensification, Emphasis::Speed) => 0.8,
            (Self::Realization, Emphasis::Strength) => 0.8,
            (Self::Realization, Emphasis::Endurance) => 0.7,
            (Self::Realization, Emphasis::BodyComposition) => 0.5,
            (Self::Realization, Emphasis::Speed) => 0.9,
            (_, _) => 1.0,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accumulation => "Accumulation",
            Self::Intensification => "Intensification",
            Self::Realization => "Realization",
            Self::Taper => "Taper",
        };
        f.write_str(name)
    }
}

/// Normalised weight of one emphasis within a phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmphasisWeight {
    /// Emphasis
    pub emphasis: Emphasis,
    /// Share of the phase, summing to 1 across the phase
    pub weight: f64,
}

/// One session of a phase's template week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSession {
    /// Training day within the week, zero-based
    pub day: u32,
    /// Emphasis of the session
    pub emphasis: Emphasis,
    /// Modalities trained
    pub modalities: BTreeSet<Modality>,
    /// Intensity in [0, 1]
    pub intensity: f64,
    /// Duration in minutes
    pub duration: f64,
    /// `intensity * emphasis weight * 100`
    pub session_load: f64,
}

/// A phase of the plan with its template week and progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase name
    pub name: PhaseKind,
    /// Length in weeks
    pub weeks: u32,
    /// Emphasis weights, summing to 1
    pub emphasis: Vec<EmphasisWeight>,
    /// Intensity label
    pub intensity_label: String,
    /// Training focus
    pub focus: PhaseFocus,
    /// Recovery priority
    pub recovery_focus: RecoveryFocus,
    /// Template week
    pub weekly_plan: Vec<PlannedSession>,
    /// Progression derived from the template week
    pub progression: ProgressionModel,
}

impl Phase {
    /// Summed session load of the template week
    #[must_use]
    pub fn weekly_load(&self) -> f64 {
        self.weekly_plan.iter().map(|s| s.session_load).sum()
    }

    /// Mean intensity of the template week
    #[must_use]
    pub fn average_intensity(&self) -> f64 {
        if self.weekly_plan.is_empty() {
            return 0.0;
        }
        self.weekly_plan.iter().map(|s| s.intensity).sum::<f64>() / self.weekly_plan.len() as f64
    }
}

/// Output of [`PeriodizationBuilder::design_periodization_plan`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationPlan {
    /// Phases in training order
    pub phases: Vec<Phase>,
    /// Non-negative plan quality score
    pub performance_score: f64,
}

impl PeriodizationPlan {
    /// Total plan length in weeks, taper included
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.phases.iter().map(|p| p.weeks).sum()
    }
}

/// Builds periodized plans from goals, constraints and a calendar
#[derive(Debug, Clone, Default)]
pub struct PeriodizationBuilder {
    config: PeriodizationConfig,
    progression: ProgressionBuilder,
}

impl PeriodizationBuilder {
    /// Create a builder with explicit settings
    #[must_use]
    pub const fn new(config: PeriodizationConfig, progression: ProgressionConfig) -> Self {
        Self {
            config,
            progression: ProgressionBuilder::new(progression),
        }
    }

    /// Create a builder from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        let global = IntelligenceConfig::global();
        Self::new(global.periodization.clone(), global.progression.clone())
    }

    /// Design a phased plan
    ///
    /// Constraint overrides for time frame, weekly frequency and fatigue
    /// sensitivity take precedence over the builder's configuration. A
    /// competition date in either the constraints or the calendar appends a
    /// two-week taper.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty goal list, invalid goals or
    /// constraints, or a time frame shorter than three weeks.
    pub fn design_periodization_plan(
        &self,
        goals: &[Goal],
        constraints: &Constraints,
        calendar: &Calendar,
    ) -> AppResult<PeriodizationPlan> {
        Goal::validate_all(goals)?;
        constraints.validate()?;

        let time_frame = constraints
            .time_frame_weeks
            .unwrap_or(self.config.time_frame_weeks);
        let sessions_per_week = constraints
            .sessions_per_week
            .unwrap_or(self.config.sessions_per_week)
            .min(constraints.max_weekly_sessions);
        let fatigue_sensitivity = constraints
            .fatigue_sensitivity
            .unwrap_or(self.config.fatigue_sensitivity);

        let [accumulation, intensification, realization] = Self::phase_weeks(time_frame)?;
        let mut phases: Vec<Phase> = [
            (PhaseKind::Accumulation, accumulation),
            (PhaseKind::Intensification, intensification),
            (PhaseKind::Realization, realization),
        ]
        .into_iter()
        .map(|(kind, weeks)| self.build_phase(kind, weeks, goals, sessions_per_week, constraints))
        .collect();

        let competition = constraints.competition_date().or(calendar.competition_date);
        if competition.is_some() {
            phases.push(self.taper_phase(constraints));
        }

        let performance_score = Self::performance_score(&phases, fatigue_sensitivity);
        info!(
            phases = phases.len(),
            weeks = phases.iter().map(|p| p.weeks).sum::<u32>(),
            sessions_per_week,
            performance_score,
            competition = ?competition,
            "Periodization plan designed"
        );

        Ok(PeriodizationPlan {
            phases,
            performance_score,
        })
    }

    /// Split a time frame into accumulation, intensification and realization weeks
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the time frame is shorter than three weeks.
    pub fn phase_weeks(time_frame: u32) -> AppResult<[u32; 3]> {
        if time_frame < MIN_TIME_FRAME_WEEKS {
            return Err(AppError::invalid_input(format!(
                "time frame must be at least {MIN_TIME_FRAME_WEEKS} weeks, got {time_frame}"
            )));
        }
        let share = |fraction: f64| ((f64::from(time_frame) * fraction).floor() as u32).max(1);
        let accumulation = share(ACCUMULATION_SHARE);
        let intensification = share(INTENSIFICATION_SHARE);
        Ok([
            accumulation,
            intensification,
            time_frame - accumulation - intensification,
        ])
    }

    /// Normalised emphasis weights of a phase
    ///
    /// Each distinct emphasis served by the goals gets the phase's factor, in
    /// order of first appearance. Goals that map to no emphasis leave a single
    /// general emphasis.
    #[must_use]
    pub fn phase_emphasis(kind: PhaseKind, goals: &[Goal]) -> Vec<EmphasisWeight> {
        let mut present: Vec<Emphasis> = Vec::new();
        for emphasis in goals.iter().filter_map(|g| Emphasis::from_goal(g.goal_type)) {
            if !present.contains(&emphasis) {
                present.push(emphasis);
            }
        }
        if present.is_empty() {
            return vec![EmphasisWeight {
                emphasis: Emphasis::General,
                weight: 1.0,
            }];
        }

        let total: f64 = present.iter().map(|e| kind.emphasis_factor(*e)).sum();
        present
            .into_iter()
            .map(|emphasis| EmphasisWeight {
                emphasis,
                weight: kind.emphasis_factor(emphasis) / total,
            })
            .collect()
    }

    /// Template week: one session per training day, cycling through the emphases
    #[must_use]
    pub fn weekly_plan(
        focus: PhaseFocus,
        emphasis: &[EmphasisWeight],
        sessions_per_week: u32,
        max_daily_duration: f64,
    ) -> Vec<PlannedSession> {
        if emphasis.is_empty() {
            return Vec::new();
        }
        (0..sessions_per_week)
            .map(|day| {
                let slot = emphasis[day as usize % emphasis.len()];
                let intensity = focus.day_intensity(day);
                PlannedSession {
                    day,
                    emphasis: slot.emphasis,
                    modalities: slot.emphasis.modalities(),
                    intensity,
                    duration: focus.session_minutes().min(max_daily_duration),
                    session_load: intensity * slot.weight * SESSION_LOAD_SCALE,
                }
            })
            .collect()
    }

    /// `0.4 * volume + 60 * intensity - fatigue penalty`, floored at zero
    #[must_use]
    pub fn performance_score(phases: &[Phase], fatigue_sensitivity: f64) -> f64 {
        let volume_score: f64 = phases
            .iter()
            .enumerate()
            .map(|(i, phase)| (i + 1) as f64 * phase.weekly_load())
            .sum();

        let sessions: Vec<&PlannedSession> = phases.iter().flat_map(|p| &p.weekly_plan).collect();
        let intensity_score = if sessions.is_empty() {
            0.0
        } else {
            sessions.iter().map(|s| s.intensity).sum::<f64>() / sessions.len() as f64
        };

        let total_volume: f64 = phases
            .iter()
            .map(|p| p.weekly_load() * f64::from(p.weeks))
            .sum();
        let fatigue_penalty = fatigue_sensitivity * total_volume / FATIGUE_VOLUME_DIVISOR;

        (VOLUME_SCORE_WEIGHT * volume_score + INTENSITY_SCORE_WEIGHT * intensity_score
            - fatigue_penalty)
            .max(0.0)
    }

    fn build_phase(
        &self,
        kind: PhaseKind,
        weeks: u32,
        goals: &[Goal],
        sessions_per_week: u32,
        constraints: &Constraints,
    ) -> Phase {
        let emphasis = Self::phase_emphasis(kind, goals);
        let weekly_plan = Self::weekly_plan(
            kind.focus(),
            &emphasis,
            sessions_per_week,
            constraints.max_daily_duration,
        );
        self.finish_phase(kind, weeks, emphasis, weekly_plan)
    }

    /// Fixed low-volume week of strength, endurance and speed work
    fn taper_phase(&self, constraints: &Constraints) -> Phase {
        let template = [
            (0, Emphasis::Strength, 0.75),
            (2, Emphasis::Endurance, 0.6),
            (4, Emphasis::Speed, 0.8),
        ];
        let weight = 1.0 / template.len() as f64;
        let duration = PhaseFocus::Taper
            .session_minutes()
            .min(constraints.max_daily_duration);

        let emphasis = template
            .iter()
            .map(|(_, emphasis, _)| EmphasisWeight {
                emphasis: *emphasis,
                weight,
            })
            .collect();
        let weekly_plan = template
            .iter()
            .map(|&(day, emphasis, intensity)| PlannedSession {
                day,
                emphasis,
                modalities: emphasis.modalities(),
                intensity,
                duration,
                session_load: intensity * weight * SESSION_LOAD_SCALE,
            })
            .collect();
        self.finish_phase(PhaseKind::Taper, TAPER_WEEKS, emphasis, weekly_plan)
    }

    fn finish_phase(
        &self,
        kind: PhaseKind,
        weeks: u32,
        emphasis: Vec<EmphasisWeight>,
        weekly_plan: Vec<PlannedSession>,
    ) -> Phase {
        let mut phase = Phase {
            name: kind,
            weeks,
            emphasis,
            intensity_label: kind.intensity_label().to_owned(),
            focus: kind.focus(),
            recovery_focus: kind.recovery_focus(),
            weekly_plan,
            progression: ProgressionModel::default(),
        };
        phase.progression = self
            .progression
            .create_progression_model(&phase, &phase.weekly_plan);
        phase
    }
}
