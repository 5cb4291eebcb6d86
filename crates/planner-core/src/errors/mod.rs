// ABOUTME: Unified error types for the training planner with standard error codes
// ABOUTME: Contract violations surface as InvalidInput and propagate to the caller unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every planning entry point returns [`AppResult`]. The only failure category
//! callers are expected to handle is [`ErrorCode::InvalidInput`]: numeric edge
//! cases inside the algorithms are guarded rather than reported.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Standard error codes used throughout the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input violates the documented contract
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether this code denotes a caller contract violation
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}

/// Unified error type for the planner
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_input(format!("Malformed input: {error}"))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display_includes_description() {
        let error = AppError::invalid_input("goals must not be empty");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: goals must not be empty"
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidInput).unwrap();
        assert_eq!(json, "\"INVALID_INPUT\"");
        assert!(ErrorCode::InvalidInput.is_input_error());
        assert!(!ErrorCode::ConfigInvalid.is_input_error());
    }

    #[test]
    fn test_serde_error_maps_to_invalid_input() {
        let parse_error = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let error = AppError::from(parse_error).with_details(json!({"field": "day"}));
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.details["field"], "day");
    }
}
