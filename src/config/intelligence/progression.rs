// ABOUTME: Progression model configuration for deload scheduling and auto-regulation
// ABOUTME: Fatigue threshold, deload fraction and optional simulated readiness signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Progression model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Cumulative fatigue that triggers a deload week
    pub fatigue_threshold: f64,
    /// Load reduction applied in a deload week
    pub deload_fraction: f64,
    /// Simulated HRV reading; the focus baseline is used when unset
    pub readiness_hrv: Option<f64>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            fatigue_threshold: 0.6,
            deload_fraction: 0.4,
            readiness_hrv: None,
        }
    }
}
