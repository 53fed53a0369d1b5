// ABOUTME: Configuration error types for intelligence config validation
// ABOUTME: Defines error variants for inverted ranges, bad multipliers, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Configuration error types for intelligence config validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Range whose lower bound exceeds its upper bound, or with a negative bound
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}
