// ABOUTME: Health classification thresholds for food items and meal totals
// ABOUTME: Sugar, fat, calorie, and fiber cut-offs with consistency validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Thresholds used by the health classifier
///
/// All comparisons are strict: a value equal to a `*_max` threshold falls into
/// the next tier, and a value equal to a `*_min` threshold does not qualify.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthThresholdsConfig {
    /// Healthy requires sugar below this (g)
    pub healthy_max_sugar_g: f64,
    /// Healthy requires fat below this (g)
    pub healthy_max_fat_g: f64,
    /// Healthy requires calories below this (kcal)
    pub healthy_max_calories: f64,
    /// Moderate requires sugar below this (g)
    pub moderate_max_sugar_g: f64,
    /// Moderate requires fat below this (g)
    pub moderate_max_fat_g: f64,
    /// Moderate requires calories below this (kcal)
    pub moderate_max_calories: f64,
    /// Weight loss requires calories below this (kcal)
    pub weight_loss_max_calories: f64,
    /// Weight loss requires fiber above this (g)
    pub weight_loss_min_fiber_g: f64,
    /// Weight gain requires calories above this (kcal)
    pub weight_gain_min_calories: f64,
}

impl Default for HealthThresholdsConfig {
    fn default() -> Self {
        Self {
            healthy_max_sugar_g: 25.0,
            healthy_max_fat_g: 20.0,
            healthy_max_calories: 500.0,
            moderate_max_sugar_g: 50.0,
            moderate_max_fat_g: 40.0,
            moderate_max_calories: 1000.0,
            weight_loss_max_calories: 300.0,
            weight_loss_min_fiber_g: 5.0,
            weight_gain_min_calories: 600.0,
        }
    }
}

impl HealthThresholdsConfig {
    /// Validate that thresholds are non-negative and the tiers nest
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is negative or non-finite, or if a healthy
    /// threshold exceeds its moderate counterpart
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("healthy_max_sugar_g", self.healthy_max_sugar_g),
            ("healthy_max_fat_g", self.healthy_max_fat_g),
            ("healthy_max_calories", self.healthy_max_calories),
            ("moderate_max_sugar_g", self.moderate_max_sugar_g),
            ("moderate_max_fat_g", self.moderate_max_fat_g),
            ("moderate_max_calories", self.moderate_max_calories),
            ("weight_loss_max_calories", self.weight_loss_max_calories),
            ("weight_loss_min_fiber_g", self.weight_loss_min_fiber_g),
            ("weight_gain_min_calories", self.weight_gain_min_calories),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let tiers = [
            ("sugar", self.healthy_max_sugar_g, self.moderate_max_sugar_g),
            ("fat", self.healthy_max_fat_g, self.moderate_max_fat_g),
            (
                "calories",
                self.healthy_max_calories,
                self.moderate_max_calories,
            ),
        ];
        for (name, healthy, moderate) in tiers {
            if healthy > moderate {
                return Err(ConfigError::InvalidRange(format!(
                    "healthy {name} threshold {healthy} exceeds moderate threshold {moderate}"
                )));
            }
        }

        if self.weight_loss_max_calories > self.weight_gain_min_calories {
            return Err(ConfigError::InvalidRange(format!(
                "weight loss calorie ceiling {} exceeds weight gain floor {}",
                self.weight_loss_max_calories, self.weight_gain_min_calories
            )));
        }
        Ok(())
    }
}
