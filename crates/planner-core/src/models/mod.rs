// ABOUTME: Planning data models exchanged between callers and the planning engine
// ABOUTME: Goals, sessions, constraints and calendars with serde support for boundary layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core planning models.
//!
//! The excluded UI and storage layers build these from user input and
//! serialise the engine's outputs; the engine itself never touches I/O.

mod calendar;
mod constraints;
mod goal;
mod session;

pub use calendar::{Calendar, SportEvent};
pub use constraints::{ConstraintOverrides, Constraints};
pub use goal::{Goal, GoalType};
pub use session::{Modality, Session};
