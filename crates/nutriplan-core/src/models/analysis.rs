// ABOUTME: Food analysis models for detected items and their health classification
// ABOUTME: AnalyzedFoodItem, HealthStatus, WeightImpact, StatusColor, and ClassificationResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::nutrition::NutritionVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light color attached to a status for presentation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    /// Good
    Green,
    /// Caution
    Yellow,
    /// Bad
    Red,
}

impl StatusColor {
    /// Lowercase color name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse healthiness of a food item or meal total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthStatus {
    /// Low sugar, fat, and calories
    Healthy,
    /// Within the moderate thresholds
    Moderate,
    /// Exceeds the moderate thresholds
    Unhealthy,
}

impl HealthStatus {
    /// Color bound to this status
    #[must_use]
    pub const fn color(self) -> StatusColor {
        match self {
            Self::Healthy => StatusColor::Green,
            Self::Moderate => StatusColor::Yellow,
            Self::Unhealthy => StatusColor::Red,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Healthy => "Healthy",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
        })
    }
}

/// Expected effect of a food on body weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeightImpact {
    /// Low calorie and high fiber
    #[serde(rename = "Supports Weight Loss")]
    SupportsWeightLoss,
    /// Calorie dense
    #[serde(rename = "Supports Weight Gain")]
    SupportsWeightGain,
    /// Everything else
    #[serde(rename = "Supports Weight Maintenance")]
    SupportsWeightMaintenance,
}

impl WeightImpact {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SupportsWeightLoss => "Supports Weight Loss",
            Self::SupportsWeightGain => "Supports Weight Gain",
            Self::SupportsWeightMaintenance => "Supports Weight Maintenance",
        }
    }
}

impl fmt::Display for WeightImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying a nutrition vector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Health tier
    pub health_status: HealthStatus,
    /// Color of the health tier
    pub health_color: StatusColor,
    /// Weight effect
    pub weight_impact: WeightImpact,
}

impl ClassificationResult {
    /// Build a result whose color is derived from the status
    #[must_use]
    pub const fn new(health_status: HealthStatus, weight_impact: WeightImpact) -> Self {
        Self {
            health_status,
            health_color: health_status.color(),
            weight_impact,
        }
    }
}

/// A food item detected in an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedFoodItem {
    /// Name reported by the vision model
    pub item_name: String,
    /// Number of servings (positive)
    pub quantity: f64,
    /// Free-text serving description
    pub serving_size: String,
    /// Nutrients for a single serving
    pub nutrition_per_unit: NutritionVector,
}

impl AnalyzedFoodItem {
    /// Nutrients for the whole detected quantity
    #[must_use]
    pub fn total_nutrition(&self) -> NutritionVector {
        self.nutrition_per_unit.scale(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_is_bound_to_status() {
        let result = ClassificationResult::new(
            HealthStatus::Moderate,
            WeightImpact::SupportsWeightMaintenance,
        );
        assert_eq!(result.health_color, StatusColor::Yellow);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["health_color"], "yellow");
        assert_eq!(json["weight_impact"], "Supports Weight Maintenance");
    }

    #[test]
    fn test_total_nutrition_scales_by_quantity() {
        let item = AnalyzedFoodItem {
            item_name: "Banana".to_owned(),
            quantity: 2.0,
            serving_size: "1 medium".to_owned(),
            nutrition_per_unit: NutritionVector {
                calories: 105.0,
                sugar_content: 14.4,
                ..NutritionVector::ZERO
            },
        };
        let total = item.total_nutrition();
        assert!((total.calories - 210.0).abs() < 1e-9);
        assert!((total.sugar_content - 28.8).abs() < 1e-9);
    }
}
