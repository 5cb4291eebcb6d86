// ABOUTME: Physiological interference model for concurrent strength and endurance training
// ABOUTME: Scores molecular, hormonal, glycogen and recovery conflict per session and on average
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interference Model
//!
//! Estimates how much each session in a plan is compromised by the sessions
//! around it. Four mechanisms are scored independently in `[0, 1]`:
//!
//! - **Molecular signaling**: AMPK/mTOR antagonism when strength and
//!   endurance share a session; decays once sessions are more than six
//!   hours apart.
//! - **Hormonal response**: session stress scaled by the athlete's
//!   anabolic/catabolic balance.
//! - **Glycogen availability**: substrate deficit for endurance and
//!   conditioning work, tracking depletion and resynthesis across sessions.
//! - **Recovery competition**: residual fatigue that has not cleared by the
//!   start of the session.
//!
//! This is the detailed model. The scheduler carries its own simplified
//! estimate (`scheduler::candidate::InterferenceRisk`) and the two are not
//! interchangeable.
//!
//! # Scientific References
//!
//! - Hickson, R.C. (1980). Interference of strength development by simultaneously
//!   training for strength and endurance. *European Journal of Applied Physiology*, 45, 255-263.
//! - Coffey, V.G. & Hawley, J.A. (2017). Concurrent exercise training: do opposites distract?
//!   *Journal of Physiology*, 595(9), 2883-2896.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use planner_core::constants::time_constants::MINUTES_PER_HOUR;
use planner_core::errors::{AppError, AppResult};
use planner_core::models::Session;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::intelligence::RecoveryProfile;
use crate::intelligence::physiological_constants::interference::{
    GLYCOGEN_DEMAND_WEIGHT, GLYCOGEN_USE_PER_MINUTE, MOLECULAR_DECAY_RATE,
    MOLECULAR_GAP_THRESHOLD_HOURS, NON_GLYCOLYTIC_USE_FACTOR, RECOVERY_LOAD_DIVISOR,
};

/// Component interference scores, each in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterferenceScore {
    /// Molecular signaling conflict
    pub molecular: f64,
    /// Hormonal disruption
    pub hormonal: f64,
    /// Glycogen deficit
    pub glycogen: f64,
    /// Unrecovered fatigue
    pub recovery: f64,
    /// Combined score, capped at 1
    pub total: f64,
}

impl InterferenceScore {
    fn from_components(molecular: f64, hormonal: f64, glycogen: f64, recovery: f64) -> Self {
        Self {
            molecular,
            hormonal,
            glycogen,
            recovery,
            total: (molecular + hormonal + glycogen + recovery).min(1.0),
        }
    }
}

/// Interference of one session, in chronological order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInterference {
    /// Day index of the scored session
    pub day: u32,
    /// Timestamp of the scored session, if it had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Component scores
    #[serde(flatten)]
    pub score: InterferenceScore,
}

/// Interference across a whole plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterferenceResult {
    /// Per-session scores, sorted by time
    pub sessions: Vec<SessionInterference>,
    /// Component means; `total` is recomputed from the averaged components
    pub average: InterferenceScore,
}

/// Running physiological state while walking the plan in time order
struct PhysiologicalState<'a> {
    profile: &'a RecoveryProfile,
    previous_time: Option<f64>,
    previous_glycogen_use: f64,
    available_glycogen: f64,
    previous_load: f64,
    residual_fatigue: f64,
}

impl<'a> PhysiologicalState<'a> {
    const fn new(profile: &'a RecoveryProfile) -> Self {
        Self {
            profile,
            previous_time: None,
            previous_glycogen_use: 0.0,
            available_glycogen: profile.glycogen_capacity,
            previous_load: 0.0,
            residual_fatigue: 0.0,
        }
    }

    fn score(&mut self, session: &Session) -> InterferenceScore {
        let time = session.time_key_hours();
        let gap_hours = self
            .previous_time
            .map_or(0.0, |previous| (time - previous).max(0.0));
        let has_previous = self.previous_time.is_some();

        let molecular = InterferenceModel::molecular_signaling(session, gap_hours);
        let hormonal = InterferenceModel::hormonal_response(session, self.profile);
        let glycogen = self.glycogen_availability(session, gap_hours, has_previous);
        let recovery = self.recovery_competition(session, gap_hours, has_previous);

        self.previous_time = Some(time);
        InterferenceScore::from_components(molecular, hormonal, glycogen, recovery)
    }

    fn glycogen_availability(
        &mut self,
        session: &Session,
        gap_hours: f64,
        has_previous: bool,
    ) -> f64 {
        let capacity = self.profile.glycogen_capacity;
        if has_previous {
            self.available_glycogen = self
                .profile
                .glycogen_replenish_rate
                .mul_add(gap_hours, self.available_glycogen)
                .min(capacity);
        }

        let use_factor = if session.is_glycolytic() {
            1.0
        } else {
            NON_GLYCOLYTIC_USE_FACTOR
        };
        let glycogen_use =
            session.duration * session.intensity * GLYCOGEN_USE_PER_MINUTE * use_factor;

        let score = if session.is_glycolytic() && capacity > 0.0 {
            let shortfall = self.previous_glycogen_use - self.available_glycogen;
            let deficit = shortfall.max(0.0) / capacity;
            let demand = GLYCOGEN_DEMAND_WEIGHT * glycogen_use / capacity;
            (deficit + demand).clamp(0.0, 1.0)
        } else {
            0.0
        };

        self.available_glycogen = (self.available_glycogen - glycogen_use).max(0.0);
        self.previous_glycogen_use = glycogen_use;
        score
    }

    fn recovery_competition(
        &mut self,
        session: &Session,
        gap_hours: f64,
        has_previous: bool,
    ) -> f64 {
        if has_previous {
            let remaining = (-self.profile.recovery_rate * gap_hours).exp();
            self.residual_fatigue = (self.residual_fatigue + self.previous_load) * remaining;
        }
        self.previous_load = session.duration * session.intensity / RECOVERY_LOAD_DIVISOR;
        self.residual_fatigue.clamp(0.0, 1.0)
    }
}

/// Detailed physiological interference model
pub struct InterferenceModel;

impl InterferenceModel {
    /// Score every session of a plan and average the results
    ///
    /// Sessions are ordered by timestamp (falling back to `day`); sessions
    /// with equal keys keep their input order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if any session has out-of-range intensity or duration
    pub fn calculate_interference(
        session_plan: &[Session],
        recovery_profile: &RecoveryProfile,
    ) -> AppResult<InterferenceResult> {
        session_plan.iter().try_for_each(Session::validate)?;

        let mut ordered: Vec<&Session> = session_plan.iter().collect();
        ordered.sort_by(|a, b| {
            a.time_key_hours()
                .partial_cmp(&b.time_key_hours())
                .unwrap_or(Ordering::Equal)
        });

        let mut state = PhysiologicalState::new(recovery_profile);
        let sessions: Vec<SessionInterference> = ordered
            .into_iter()
            .map(|session| SessionInterference {
                day: session.day,
                timestamp: session.timestamp,
                score: state.score(session),
            })
            .collect();

        let average = Self::average(&sessions);
        debug!(
            sessions = sessions.len(),
            average_total = average.total,
            "Calculated session interference"
        );

        Ok(InterferenceResult { sessions, average })
    }

    /// Score a plan supplied as untyped JSON
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if the value is not an array or an
    /// entry cannot be decoded as a session
    pub fn calculate_interference_value(
        session_plan: &Value,
        recovery_profile: &RecoveryProfile,
    ) -> AppResult<InterferenceResult> {
        let entries = session_plan
            .as_array()
            .ok_or_else(|| AppError::invalid_input("Session plan must be a sequence"))?;

        let sessions = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Session::deserialize(entry).map_err(|e| {
                    AppError::invalid_input(format!("Malformed session at index {index}: {e}"))
                        .with_details(json!({ "index": index }))
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Self::calculate_interference(&sessions, recovery_profile)
    }

    /// Molecular signaling conflict of a concurrent session
    #[must_use]
    pub fn molecular_signaling(session: &Session, gap_hours: f64) -> f64 {
        if !session.is_concurrent() {
            return 0.0;
        }
        let excess_gap = (gap_hours - MOLECULAR_GAP_THRESHOLD_HOURS).max(0.0);
        let decay = (-MOLECULAR_DECAY_RATE * excess_gap).exp();
        (session.intensity * decay).min(1.0)
    }

    /// Hormonal disruption of a single session
    #[must_use]
    pub fn hormonal_response(session: &Session, profile: &RecoveryProfile) -> f64 {
        let stress = session.intensity * (session.duration / MINUTES_PER_HOUR);
        let balance = 1.0 - (profile.testosterone_baseline - profile.cortisol_baseline);
        (stress * profile.hormonal_sensitivity * balance).clamp(0.0, 1.0)
    }

    fn average(sessions: &[SessionInterference]) -> InterferenceScore {
        if sessions.is_empty() {
            return InterferenceScore::default();
        }
        let count = sessions.len() as f64;
        let mean = |component: fn(&InterferenceScore) -> f64| {
            sessions.iter().map(|s| component(&s.score)).sum::<f64>() / count
        };
        InterferenceScore::from_components(
            mean(|s| s.molecular),
            mean(|s| s.hormonal),
            mean(|s| s.glycogen),
            mean(|s| s.recovery),
        )
    }
}
