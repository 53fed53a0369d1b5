// ABOUTME: Rule-based health and weight-impact classification of nutrient totals
// ABOUTME: Applies sugar, fat, calorie, and fiber thresholds after scaling by quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Health classification
//!
//! Thresholds are heuristics carried over from the product's presentation rules;
//! they are not dietary advice. All comparisons are strict.

use crate::config::{ConfigError, HealthThresholdsConfig};
use nutriplan_core::models::{ClassificationResult, HealthStatus, NutritionVector, WeightImpact};

/// Classifies nutrient totals into health tiers and weight impact
#[derive(Debug, Clone, Default)]
pub struct HealthClassifier {
    thresholds: HealthThresholdsConfig,
}

impl HealthClassifier {
    /// Create a classifier after validating the thresholds
    ///
    /// # Errors
    ///
    /// Returns the validation error of `thresholds`
    pub fn new(thresholds: HealthThresholdsConfig) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &HealthThresholdsConfig {
        &self.thresholds
    }

    /// Classify `nutrition` scaled by `quantity`
    #[must_use]
    pub fn classify(&self, nutrition: &NutritionVector, quantity: f64) -> ClassificationResult {
        let total = nutrition.scale(quantity);
        ClassificationResult::new(self.health_status(&total), self.weight_impact(&total))
    }

    fn health_status(&self, total: &NutritionVector) -> HealthStatus {
        let t = &self.thresholds;
        if total.sugar_content < t.healthy_max_sugar_g
            && total.fat_content < t.healthy_max_fat_g
            && total.calories < t.healthy_max_calories
        {
            HealthStatus::Healthy
        } else if total.sugar_content < t.moderate_max_sugar_g
            && total.fat_content < t.moderate_max_fat_g
            && total.calories < t.moderate_max_calories
        {
            HealthStatus::Moderate
        } else {
            HealthStatus::Unhealthy
        }
    }

    fn weight_impact(&self, total: &NutritionVector) -> WeightImpact {
        let t = &self.thresholds;
        if total.calories < t.weight_loss_max_calories
            && total.fiber_content > t.weight_loss_min_fiber_g
        {
            WeightImpact::SupportsWeightLoss
        } else if total.calories > t.weight_gain_min_calories {
            WeightImpact::SupportsWeightGain
        } else {
            WeightImpact::SupportsWeightMaintenance
        }
    }
}
