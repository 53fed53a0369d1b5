// ABOUTME: Configuration module for the nutriplan-intelligence crate
// ABOUTME: NutritionConfig aggregates energy, target range, and health threshold settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Nutrition algorithm configuration
//!
//! Every algorithm takes its configuration by reference so callers can tune
//! constants without touching global state. `NutritionConfig::default()` holds
//! the production values.

mod energy;
mod error;
mod targets;
mod thresholds;

pub use energy::{ActivityFactorsConfig, BmrConfig};
pub use error::ConfigError;
pub use targets::{MealTargetRanges, NutrientRange, TargetRangesConfig};
pub use thresholds::HealthThresholdsConfig;

use serde::{Deserialize, Serialize};

/// Complete algorithm configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Per-meal nutrient target ranges
    pub target_ranges: TargetRangesConfig,
    /// Health classification thresholds
    pub health_thresholds: HealthThresholdsConfig,
}

impl NutritionConfig {
    /// Parse a configuration document, filling omitted sections with defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or the validation error of
    /// the first invalid section
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.target_ranges.validate()?;
        self.health_thresholds.validate()
    }
}
