// ABOUTME: Training session model and modality taxonomy
// ABOUTME: Sessions carry day/timestamp ordering, modality set, duration, intensity and recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::constants::modality_equipment;
use crate::constants::time_constants::{HOURS_PER_DAY, SECONDS_PER_HOUR};
use crate::errors::{AppError, AppResult};

/// Training modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Resistance training
    Strength,
    /// Aerobic endurance work
    Endurance,
    /// Mixed metabolic conditioning
    Conditioning,
    /// Sprint and power work
    Speed,
}

impl Modality {
    /// All modalities in canonical order
    pub const ALL: [Self; 4] = [
        Self::Strength,
        Self::Endurance,
        Self::Conditioning,
        Self::Speed,
    ];

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Conditioning => "conditioning",
            Self::Speed => "speed",
        }
    }

    /// Equipment of which at least one item must be available
    #[must_use]
    pub const fn required_equipment(&self) -> &'static [&'static str] {
        match self {
            Self::Strength => modality_equipment::STRENGTH,
            Self::Endurance => modality_equipment::ENDURANCE,
            Self::Conditioning => modality_equipment::CONDITIONING,
            Self::Speed => modality_equipment::SPEED,
        }
    }

    /// Whether this modality can be trained with the given equipment
    #[must_use]
    pub fn is_available(&self, equipment: &BTreeSet<String>) -> bool {
        let required = self.required_equipment();
        required.is_empty() || required.iter().any(|item| equipment.contains(*item))
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp as sent by clients: epoch milliseconds or a date-time string
#[derive(Deserialize)]
#[serde(untagged)]
enum FlexibleTimestamp {
    Millis(i64),
    Text(String),
}

/// Accepts epoch milliseconds, RFC 3339, or `YYYY-MM-DDTHH:MM:SS` (assumed UTC)
fn deserialize_flexible_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<FlexibleTimestamp>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw {
        FlexibleTimestamp::Millis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}"))),
        FlexibleTimestamp::Text(text) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
                return Ok(Some(dt.with_timezone(&Utc)));
            }
            NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S")
                .map(|dt| Some(Utc.from_utc_datetime(&dt)))
                .map_err(|_| {
                    D::Error::custom(format!(
                        "invalid timestamp '{text}', expected epoch milliseconds or RFC 3339"
                    ))
                })
        }
    }
}

/// A single training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Day index within the plan (0-based)
    #[serde(default)]
    pub day: u32,
    /// Absolute start time; takes precedence over `day` for ordering
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    /// Modalities trained in this session
    pub modalities: BTreeSet<Modality>,
    /// Duration in minutes
    pub duration: f64,
    /// Relative intensity in [0, 1]
    pub intensity: f64,
    /// Planned recovery after the session (hours)
    #[serde(default)]
    pub recovery: f64,
}

impl Session {
    /// Create a day-indexed session
    #[must_use]
    pub fn new(
        day: u32,
        modalities: impl IntoIterator<Item = Modality>,
        duration: f64,
        intensity: f64,
    ) -> Self {
        Self {
            day,
            timestamp: None,
            modalities: modalities.into_iter().collect(),
            duration,
            intensity,
            recovery: 0.0,
        }
    }

    /// Attach an absolute timestamp
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set planned recovery hours
    #[must_use]
    pub const fn with_recovery(mut self, hours: f64) -> Self {
        self.recovery = hours;
        self
    }

    /// Whether the session trains the given modality
    #[must_use]
    pub fn trains(&self, modality: Modality) -> bool {
        self.modalities.contains(&modality)
    }

    /// Whether strength and endurance are combined in this session
    #[must_use]
    pub fn is_concurrent(&self) -> bool {
        self.trains(Modality::Strength) && self.trains(Modality::Endurance)
    }

    /// Whether the session draws on glycogen-limited work
    #[must_use]
    pub fn is_glycolytic(&self) -> bool {
        self.trains(Modality::Endurance) || self.trains(Modality::Conditioning)
    }

    /// Ordering key in hours: timestamp when present, otherwise `day * 24`
    #[must_use]
    pub fn time_key_hours(&self) -> f64 {
        self.timestamp.map_or_else(
            || f64::from(self.day) * HOURS_PER_DAY,
            |ts| ts.timestamp() as f64 / SECONDS_PER_HOUR,
        )
    }

    /// Check intensity and duration ranges
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` for out-of-range or non-finite values
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.intensity) {
            return Err(AppError::invalid_input(format!(
                "Session on day {} has intensity {} outside [0, 1]",
                self.day, self.intensity
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Session on day {} has invalid duration {}",
                self.day, self.duration
            )));
        }
        Ok(())
    }
}
