// ABOUTME: Core types and constants for the training plan decision engine
// ABOUTME: Foundation crate with error handling, planning models, and constraint defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the training
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Goals, sessions, constraints, and calendars exchanged with callers
//! - **constants**: Documented constraint defaults and modality equipment tables

/// Unified error handling system with standard error codes
pub mod errors;

/// Planning models (Goal, Session, Constraints, Calendar)
pub mod models;

/// Constraint defaults and domain constants
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode};
