// ABOUTME: Logging configuration and structured logging setup for the planning engine
// ABOUTME: Configures log levels and formatters on top of the tracing-subscriber registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration.
//!
//! The planning algorithms only emit `tracing` events; installing a
//! subscriber is left to the embedding application, which can use
//! [`LoggingConfig::init`] for a ready-made setup.

use anyhow::Result;
use std::env;
use std::io;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// A subscriber installed earlier (by a previous call or by the host
    /// application) is left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured filter directive cannot be parsed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)?.add_directive(
            format!("training_planner={}", self.level)
                .parse()
                .unwrap_or_else(|_| Level::INFO.into()),
        );

        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout),
                )
                .try_init(),
        };

        if let Err(e) = installed {
            debug!(error = %e, "Tracing subscriber already installed, keeping existing one");
            return Ok(());
        }

        info!(
            log.level = %self.level,
            log.format = ?self.format,
            version = env!("CARGO_PKG_VERSION"),
            "Training planner logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from a configuration
///
/// # Errors
///
/// Returns an error if the filter directive is invalid
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    config.init()
}
