// ABOUTME: Fixed coefficients of the interference, objective, periodization and progression models
// ABOUTME: Grouped by model so each formula reads its constants from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Model coefficients.
//!
//! These are not tunables: objective values and interference scores are
//! pinned to them, so changing one changes every downstream plan.

/// Detailed interference model (`InterferenceModel`)
pub mod interference {
    /// Hours of separation before molecular interference starts to decay
    pub const MOLECULAR_GAP_THRESHOLD_HOURS: f64 = 6.0;
    /// Exponential decay constant of molecular interference (per hour)
    pub const MOLECULAR_DECAY_RATE: f64 = 0.1;
    /// Glycogen consumed per minute at full intensity (grams)
    pub const GLYCOGEN_USE_PER_MINUTE: f64 = 2.0;
    /// Relative glycogen use of sessions without endurance or conditioning work
    pub const NON_GLYCOLYTIC_USE_FACTOR: f64 = 0.5;
    /// Weight of the same-session glycogen demand term
    pub const GLYCOGEN_DEMAND_WEIGHT: f64 = 0.5;
    /// Divisor converting `duration * intensity` into recovery load
    pub const RECOVERY_LOAD_DIVISOR: f64 = 200.0;
}

/// Goal objective penalties
pub mod objectives {
    /// Fatigue index tolerated by strength work
    pub const STRENGTH_FATIGUE_THRESHOLD: f64 = 0.6;
    /// Penalty per unit of fatigue above the strength threshold
    pub const STRENGTH_FATIGUE_PENALTY: f64 = 20.0;
    /// Penalty per unit of strength interference
    pub const STRENGTH_INTERFERENCE_PENALTY: f64 = 15.0;
    /// Fatigue index tolerated by endurance work
    pub const ENDURANCE_FATIGUE_THRESHOLD: f64 = 0.55;
    /// Penalty per unit of fatigue above the endurance threshold
    pub const ENDURANCE_FATIGUE_PENALTY: f64 = 18.0;
    /// Penalty per unit of glycogen stress
    pub const ENDURANCE_GLYCOGEN_PENALTY: f64 = 10.0;
    /// Fatigue index tolerated by body-composition work
    pub const BODY_COMPOSITION_FATIGUE_THRESHOLD: f64 = 0.5;
    /// Penalty per unit of fatigue above the body-composition threshold
    pub const BODY_COMPOSITION_FATIGUE_PENALTY: f64 = 22.0;
    /// Strength share of the speed/agility benefit
    pub const SPEED_STRENGTH_SHARE: f64 = 0.6;
    /// Conditioning share of the speed/agility benefit
    pub const SPEED_CONDITIONING_SHARE: f64 = 0.4;
    /// Penalty per unit of hormonal conflict for speed/agility
    pub const SPEED_HORMONAL_PENALTY: f64 = 10.0;
}

/// Evolutionary scheduler search space
pub mod scheduler {
    /// Minimum planning horizon (days)
    pub const MIN_HORIZON_DAYS: usize = 7;
    /// Base session duration of random schedules (minutes)
    pub const BASE_DURATION_MINUTES: f64 = 45.0;
    /// Random extension on top of the base duration (minutes)
    pub const DURATION_SPREAD_MINUTES: f64 = 45.0;
    /// Lowest intensity of a freshly generated session
    pub const INITIAL_INTENSITY_MIN: f64 = 0.65;
    /// Width of the initial intensity range
    pub const INITIAL_INTENSITY_SPREAD: f64 = 0.3;
    /// Intensity bounds enforced after mutation
    pub const MUTATION_INTENSITY_MIN: f64 = 0.55;
    /// Upper intensity bound enforced after mutation
    pub const MUTATION_INTENSITY_MAX: f64 = 0.95;
    /// Shortest session allowed after mutation (minutes)
    pub const MUTATION_DURATION_MIN: f64 = 30.0;
    /// Probability that a modality is included in a random session
    pub const MODALITY_INCLUSION_PROBABILITY: f64 = 0.5;
    /// Weight of exceeding the weekly session cap in the fatigue index
    pub const WEEKLY_DENSITY_PENALTY: f64 = 0.1;
    /// Guard against division by a zero strength load
    pub const LOAD_EPSILON: f64 = 1e-6;
    /// Strength penalty per unit of endurance/strength ratio
    pub const STRENGTH_PENALTY_PER_RATIO: f64 = 0.3;
    /// Share of total load above which glycogen stress saturates
    pub const GLYCOGEN_STRESS_LOAD_FACTOR: f64 = 1.2;
}

/// Periodization phase rules
pub mod periodization {
    /// Share of the time frame given to accumulation
    pub const ACCUMULATION_SHARE: f64 = 0.35;
    /// Share of the time frame given to intensification
    pub const INTENSIFICATION_SHARE: f64 = 0.35;
    /// Length of the competition taper (weeks)
    pub const TAPER_WEEKS: u32 = 2;
    /// Weight of the volume score in the performance score
    pub const VOLUME_SCORE_WEIGHT: f64 = 0.4;
    /// Weight of mean intensity in the performance score
    pub const INTENSITY_SCORE_WEIGHT: f64 = 60.0;
    /// Volume normaliser of the fatigue penalty
    pub const FATIGUE_VOLUME_DIVISOR: f64 = 1500.0;
    /// Multiplier converting `intensity * weight` into session load
    pub const SESSION_LOAD_SCALE: f64 = 100.0;
    /// Shortest supported time frame (weeks)
    pub const MIN_TIME_FRAME_WEEKS: u32 = 3;
}

/// Progression model rules
pub mod progression {
    /// Weeks projected by double progression
    pub const PROJECTION_WEEKS: usize = 4;
    /// Weekly load increment per unit of base intensity
    pub const INCREMENT_PER_BASE_INTENSITY: f64 = 0.025;
    /// Minimum length of the fatigue curve (weeks)
    pub const MIN_FATIGUE_CURVE_WEEKS: u32 = 4;
    /// First-week fatigue accrual
    pub const FATIGUE_CURVE_BASE: f64 = 0.12;
    /// Weekly increase in fatigue accrual
    pub const FATIGUE_CURVE_SLOPE: f64 = 0.05;
    /// Cap on weekly fatigue accrual
    pub const FATIGUE_CURVE_CAP: f64 = 0.25;
    /// Fatigue carried over after a deload week
    pub const DELOAD_CARRY_OVER: f64 = 0.3;
    /// Reference HRV of a recovered athlete
    pub const HRV_REFERENCE: f64 = 0.6;
    /// HRV baseline under a neuromuscular recovery focus
    pub const HRV_NEUROMUSCULAR_BASELINE: f64 = 0.52;
    /// HRV deviation considered meaningful
    pub const HRV_SIGNIFICANT_DELTA: f64 = 0.05;
    /// Target RPE at or above which an elevated HRV still trims load
    pub const HIGH_RPE: f64 = 8.0;
    /// RPE points per unit of session intensity
    pub const RPE_PER_INTENSITY: f64 = 10.0;
    /// Load change when HRV is elevated and the session is hard
    pub const ELEVATED_HRV_HARD_ADJUSTMENT: f64 = -0.05;
    /// Load change when HRV is suppressed
    pub const SUPPRESSED_HRV_ADJUSTMENT: f64 = -0.1;
    /// Load change when HRV sits near the reference
    pub const NEUTRAL_HRV_ADJUSTMENT: f64 = -0.02;
    /// Weekly gain of the linear curve
    pub const LINEAR_WEEKLY_GAIN: f64 = 0.05;
    /// Weekly growth factor of the exponential curve
    pub const EXPONENTIAL_WEEKLY_GROWTH: f64 = 1.03;
    /// Weekly gain of the undulating curve's trend
    pub const UNDULATING_WEEKLY_GAIN: f64 = 0.04;
    /// Week-to-week swing of the undulating curve
    pub const UNDULATING_AMPLITUDE: f64 = 0.05;
}
