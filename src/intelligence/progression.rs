// ABOUTME: Progression model for a periodization phase: double progression and weight curves
// ABOUTME: Deloads fire from a cumulative fatigue curve and reset to a carry-over, not to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::intelligence::{IntelligenceConfig, ProgressionConfig};
use crate::intelligence::periodization::{Emphasis, Phase, PlannedSession, RecoveryFocus};
use crate::intelligence::physiological_constants::progression::{
    DELOAD_CARRY_OVER, ELEVATED_HRV_HARD_ADJUSTMENT, EXPONENTIAL_WEEKLY_GROWTH,
    FATIGUE_CURVE_BASE, FATIGUE_CURVE_CAP, FATIGUE_CURVE_SLOPE, HIGH_RPE,
    HRV_NEUROMUSCULAR_BASELINE, HRV_REFERENCE, HRV_SIGNIFICANT_DELTA,
    INCREMENT_PER_BASE_INTENSITY, LINEAR_WEEKLY_GAIN, MIN_FATIGUE_CURVE_WEEKS,
    NEUTRAL_HRV_ADJUSTMENT, PROJECTION_WEEKS, RPE_PER_INTENSITY, SUPPRESSED_HRV_ADJUSTMENT,
    UNDULATING_AMPLITUDE, UNDULATING_WEEKLY_GAIN,
};

/// Inclusive repetition range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

impl RepRange {
    /// Rep range trained for an emphasis
    #[must_use]
    pub const fn for_emphasis(emphasis: Emphasis) -> Self {
        let (min, max) = match emphasis {
            Emphasis::Strength => (3, 6),
            Emphasis::Endurance => (10, 15),
            Emphasis::Speed => (2, 5),
            Emphasis::BodyComposition | Emphasis::General => (5, 12),
        };
        Self { min, max }
    }
}

/// Double-progression prescription for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleProgression {
    /// Session the prescription applies to
    pub session: PlannedSession,
    /// Target repetitions
    pub rep_range: RepRange,
    /// Projected working weight, one entry per week
    pub weight_progression: Vec<f64>,
}

/// Weekly multiplier curves over a phase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionCurves {
    /// Constant weekly gain
    pub linear: Vec<f64>,
    /// Compounding weekly gain
    pub exponential: Vec<f64>,
    /// Trend with alternating heavy and light weeks
    pub undulating: Vec<f64>,
    /// Fatigue accrued each week
    pub fatigue_curve: Vec<f64>,
}

/// A planned deload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeloadWeek {
    /// One-based week number
    pub week: u32,
    /// Fraction of load removed
    pub load_reduction: f64,
}

/// Deload weeks with the cumulative fatigue after each week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeloadPlan {
    /// Triggered deloads
    pub weeks: Vec<DeloadWeek>,
    /// Cumulative fatigue at the end of each week, after any reset
    pub cumulative: Vec<f64>,
}

/// Readiness-based load adjustment for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoRegulation {
    /// Session being adjusted
    pub session: PlannedSession,
    /// Target rating of perceived exertion
    pub target_rpe: f64,
    /// Expected HRV for the phase's recovery focus
    pub hrv_baseline: f64,
    /// Relative load change
    pub load_adjustment: f64,
}

/// Progression attached to a phase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionModel {
    /// Per-session weight projections
    pub double_progression: Vec<DoubleProgression>,
    /// Weekly curves
    pub progression_curves: ProgressionCurves,
    /// Planned deloads
    pub deload_weeks: Vec<DeloadWeek>,
    /// Per-session readiness adjustments
    pub auto_regulation: Vec<AutoRegulation>,
}

/// Builds [`ProgressionModel`]s
#[derive(Debug, Clone, Default)]
pub struct ProgressionBuilder {
    config: ProgressionConfig,
}

impl ProgressionBuilder {
    /// Create a builder with explicit settings
    #[must_use]
    pub const fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Create a builder from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(IntelligenceConfig::global().progression.clone())
    }

    /// Build the progression of a phase from its weekly plan
    #[must_use]
    pub fn create_progression_model(
        &self,
        phase: &Phase,
        weekly_plan: &[PlannedSession],
    ) -> ProgressionModel {
        let mut progression_curves = Self::progression_curves(phase.weeks);
        progression_curves.fatigue_curve = Self::fatigue_curve(phase.weeks);
        let deloads = self.schedule_deloads(&progression_curves.fatigue_curve);

        info!(
            phase = %phase.name,
            weeks = phase.weeks,
            sessions = weekly_plan.len(),
            deloads = deloads.weeks.len(),
            "Progression model created"
        );

        ProgressionModel {
            double_progression: Self::double_progression(weekly_plan),
            progression_curves,
            deload_weeks: deloads.weeks,
            auto_regulation: self.auto_regulate(weekly_plan, phase.recovery_focus),
        }
    }

    /// Rep range and projected working weight for every session
    #[must_use]
    pub fn double_progression(weekly_plan: &[PlannedSession]) -> Vec<DoubleProgression> {
        weekly_plan
            .iter()
            .map(|session| {
                let rep_range = RepRange::for_emphasis(session.emphasis);
                let denominator = f64::from(rep_range.min) * session.intensity;
                let initial_weight = if denominator > 0.0 {
                    session.session_load / denominator
                } else {
                    0.0
                };
                let increment = session.emphasis.base_intensity() * INCREMENT_PER_BASE_INTENSITY;
                let weight_progression = (0..PROJECTION_WEEKS)
                    .scan(initial_weight, |weight, _| {
                        let current = *weight;
                        *weight *= 1.0 + increment;
                        Some(current)
                    })
                    .collect();
                DoubleProgression {
                    session: session.clone(),
                    rep_range,
                    weight_progression,
                }
            })
            .collect()
    }

    /// Linear, exponential and undulating curves of length `weeks`
    ///
    /// The fatigue curve is left empty; see [`Self::fatigue_curve`].
    #[must_use]
    pub fn progression_curves(weeks: u32) -> ProgressionCurves {
        let range = || (0..weeks).map(f64::from);
        ProgressionCurves {
            linear: range().map(|w| 1.0 + LINEAR_WEEKLY_GAIN * w).collect(),
            exponential: range().map(|w| EXPONENTIAL_WEEKLY_GROWTH.powf(w)).collect(),
            undulating: (0..weeks)
                .map(|w| {
                    let swing = if w % 2 == 0 {
                        UNDULATING_AMPLITUDE
                    } else {
                        -UNDULATING_AMPLITUDE
                    };
                    1.0 + UNDULATING_WEEKLY_GAIN * f64::from(w) + swing
                })
                .collect(),
            fatigue_curve: Vec::new(),
        }
    }

    /// Weekly fatigue accrual over at least four weeks
    #[must_use]
    pub fn fatigue_curve(weeks: u32) -> Vec<f64> {
        (0..weeks.max(MIN_FATIGUE_CURVE_WEEKS))
            .map(|w| {
                let accrued = FATIGUE_CURVE_BASE + FATIGUE_CURVE_SLOPE * f64::from(w);
                accrued.min(FATIGUE_CURVE_CAP)
            })
            .collect()
    }

    /// Place deload weeks where cumulative fatigue reaches the threshold
    ///
    /// After each deload the cumulative fatigue resets to the carry-over
    /// rather than zero.
    #[must_use]
    pub fn schedule_deloads(&self, fatigue_curve: &[f64]) -> DeloadPlan {
        let mut plan = DeloadPlan::default();
        let mut cumulative = 0.0;
        for (index, fatigue) in fatigue_curve.iter().enumerate() {
            cumulative += fatigue;
            if cumulative >= self.config.fatigue_threshold {
                plan.weeks.push(DeloadWeek {
                    week: index as u32 + 1,
                    load_reduction: self.config.deload_fraction,
                });
                cumulative = DELOAD_CARRY_OVER;
            }
            plan.cumulative.push(cumulative);
        }
        plan
    }

    /// Load adjustments from target RPE and the simulated HRV reading
    #[must_use]
    pub fn auto_regulate(
        &self,
        weekly_plan: &[PlannedSession],
        recovery_focus: RecoveryFocus,
    ) -> Vec<AutoRegulation> {
        let hrv_baseline = match recovery_focus {
            RecoveryFocus::Neuromuscular => HRV_NEUROMUSCULAR_BASELINE,
            RecoveryFocus::Metabolic | RecoveryFocus::General => HRV_REFERENCE,
        };
        let hrv = self.config.readiness_hrv.unwrap_or(hrv_baseline);
        weekly_plan
            .iter()
            .map(|session| {
                let target_rpe = session.intensity * RPE_PER_INTENSITY;
                AutoRegulation {
                    session: session.clone(),
                    target_rpe,
                    hrv_baseline,
                    load_adjustment: load_adjustment(hrv, target_rpe),
                }
            })
            .collect()
    }
}

/// Relative load change for an HRV reading and target RPE
#[must_use]
pub fn load_adjustment(hrv: f64, target_rpe: f64) -> f64 {
    let delta = hrv - HRV_REFERENCE;
    if delta >= HRV_SIGNIFICANT_DELTA {
        if target_rpe >= HIGH_RPE {
            ELEVATED_HRV_HARD_ADJUSTMENT
        } else {
            0.0
        }
    } else if delta <= -HRV_SIGNIFICANT_DELTA {
        SUPPRESSED_HRV_ADJUSTMENT
    } else {
        NEUTRAL_HRV_ADJUSTMENT
    }
}
