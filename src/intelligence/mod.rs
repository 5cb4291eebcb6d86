// ABOUTME: Training plan intelligence: interference, objectives, scheduling and periodization
// ABOUTME: Pure, synchronous planning algorithms over planner-core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Two independent planning paths share the same inputs:
//!
//! - **Evolutionary**: goals + constraints + horizon go through the
//!   [`MultiObjectiveScheduler`] and come out as a [`Summary`].
//! - **Rule-based**: goals + constraints + calendar go through the
//!   [`PeriodizationBuilder`] and come out as phases, each carrying a
//!   [`ProgressionModel`].
//!
//! The [`InterferenceModel`] scores any session sequence on its own.

/// Detailed concurrent-training interference model
pub mod interference;
/// Goal objective functions
pub mod objectives;
/// Phase templates and plan scoring
pub mod periodization;
/// Model coefficients
pub mod physiological_constants;
/// Per-phase progression, deloads and auto-regulation
pub mod progression;
/// Injectable random sources
pub mod random;
/// NSGA-II schedule optimisation
pub mod scheduler;

pub use interference::{
    InterferenceModel, InterferenceResult, InterferenceScore, SessionInterference,
};
pub use objectives::{Objective, ObjectiveFunctions};
pub use periodization::{
    Emphasis, EmphasisWeight, PeriodizationBuilder, PeriodizationPlan, Phase, PhaseFocus,
    PhaseKind, PlannedSession, RecoveryFocus,
};
pub use progression::{
    AutoRegulation, DeloadPlan, DeloadWeek, DoubleProgression, ProgressionBuilder,
    ProgressionCurves, ProgressionModel, RepRange,
};
pub use random::{FnSource, RandomSource, RngSource};
pub use scheduler::{
    Candidate, Evolution, GenerationStats, GoalSatisfaction, InterferenceRisk, LoadDistribution,
    MultiObjectiveScheduler, Summary,
};
