// ABOUTME: Main library entry point for the training plan decision engine
// ABOUTME: Exposes configuration, logging and the planning algorithms over planner-core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Planner
//!
//! A decision engine that turns weighted fitness goals and athlete
//! constraints into training plans.
//!
//! ## Features
//!
//! - **Interference analysis**: molecular, hormonal, glycogen and recovery
//!   interference across any session sequence
//! - **Evolutionary scheduling**: NSGA-II search over day-by-day schedules
//!   with one objective per goal
//! - **Periodization**: rule-based phase templates with per-phase
//!   progression, deloads and auto-regulation
//!
//! ## Architecture
//!
//! - **`planner_core`**: errors, models and constraint defaults
//! - **Config**: environment-overridable algorithm settings
//! - **Logging**: `tracing` subscriber setup
//! - **Intelligence**: the planning algorithms
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use training_planner::intelligence::{MultiObjectiveScheduler, RngSource};
//! use training_planner::models::{Constraints, Goal, GoalType};
//! use training_planner::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let goals = [Goal::new(GoalType::Strength, 1.0), Goal::new(GoalType::Endurance, 1.0)];
//!     let scheduler = MultiObjectiveScheduler::from_global();
//!     let mut rng = RngSource::seeded(42);
//!     let constraints = Constraints::default();
//!     let summary = scheduler.optimize_training_plan(&goals, &constraints, 28, &mut rng)?;
//!     assert_eq!(summary.schedule.len(), 28);
//!     Ok(())
//! }
//! ```

/// Algorithm configuration with environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Planning algorithms
pub mod intelligence;

pub use planner_core::{constants, errors, models};
pub use planner_core::{AppError, AppResult, ErrorCode};
