// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Constraint defaults and modality equipment tables for the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Values here are the documented
//! defaults that partial caller input is merged over.

/// Defaults applied when a caller omits a constraint field
pub mod constraint_defaults {
    /// Maximum number of training sessions per week
    pub const MAX_WEEKLY_SESSIONS: u32 = 8;
    /// Maximum session duration on any day (minutes)
    pub const MAX_DAILY_DURATION_MINUTES: f64 = 90.0;
    /// Minimum recovery between sessions (hours)
    pub const MIN_RECOVERY_HOURS: f64 = 12.0;
    /// Equipment assumed available when none is specified
    pub const AVAILABLE_EQUIPMENT: [&str; 3] = ["barbell", "dumbbell", "track"];
    /// Upper bound on the acceptable fatigue index
    pub const FATIGUE_CEILING: f64 = 0.75;
}

/// Bounds shared by caller constraints and engine configuration
pub mod plan_limits {
    /// Fewest training days in a periodized week
    pub const MIN_SESSIONS_PER_WEEK: u32 = 1;
    /// Most training days in a periodized week
    pub const MAX_SESSIONS_PER_WEEK: u32 = 7;
}

/// Equipment that unlocks each training modality
///
/// A modality with an empty table needs no equipment.
pub mod modality_equipment {
    /// Any one of these enables strength work
    pub const STRENGTH: &[&str] = &["barbell", "dumbbell", "kettlebell", "machine"];
    /// Any one of these enables endurance work
    pub const ENDURANCE: &[&str] = &["track", "bike", "rower", "treadmill", "pool"];
    /// Any one of these enables speed work
    pub const SPEED: &[&str] = &["track", "sled"];
    /// Conditioning is bodyweight-only
    pub const CONDITIONING: &[&str] = &[];
}

/// Time conversions
pub mod time_constants {
    /// Hours per day
    pub const HOURS_PER_DAY: f64 = 24.0;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}
