// ABOUTME: Per-meal nutrient target ranges used by the target synthesizer
// ABOUTME: NutrientRange, MealTargetRanges, and TargetRangesConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::error::ConfigError;
use nutriplan_core::models::{MealKind, NutrientField};
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` a nutrient target is drawn from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl NutrientRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the closed interval
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 || self.min > self.max
        {
            return Err(ConfigError::InvalidRange(format!(
                "{name} range [{}, {}] must be finite, non-negative, and ordered",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Ranges for the eight non-calorie nutrients of one meal kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTargetRanges {
    /// Fat (g)
    pub fat: NutrientRange,
    /// Saturated fat (g)
    pub saturated_fat: NutrientRange,
    /// Cholesterol (mg)
    pub cholesterol: NutrientRange,
    /// Sodium (mg)
    pub sodium: NutrientRange,
    /// Carbohydrates (g)
    pub carbohydrate: NutrientRange,
    /// Fiber (g)
    pub fiber: NutrientRange,
    /// Sugar (g)
    pub sugar: NutrientRange,
    /// Protein (g)
    pub protein: NutrientRange,
}

impl MealTargetRanges {
    /// Ranges paired with their nutrient, in vector order (calories excluded)
    #[must_use]
    pub const fn ranges(&self) -> [(NutrientField, NutrientRange); 8] {
        [
            (NutrientField::FatContent, self.fat),
            (NutrientField::SaturatedFatContent, self.saturated_fat),
            (NutrientField::CholesterolContent, self.cholesterol),
            (NutrientField::SodiumContent, self.sodium),
            (NutrientField::CarbohydrateContent, self.carbohydrate),
            (NutrientField::FiberContent, self.fiber),
            (NutrientField::SugarContent, self.sugar),
            (NutrientField::ProteinContent, self.protein),
        ]
    }

    /// Breakfast and snack defaults
    #[must_use]
    pub const fn light_defaults() -> Self {
        Self {
            fat: NutrientRange::new(10.0, 30.0),
            saturated_fat: NutrientRange::new(0.0, 4.0),
            cholesterol: NutrientRange::new(0.0, 30.0),
            sodium: NutrientRange::new(0.0, 400.0),
            carbohydrate: NutrientRange::new(40.0, 75.0),
            fiber: NutrientRange::new(4.0, 10.0),
            sugar: NutrientRange::new(0.0, 10.0),
            protein: NutrientRange::new(30.0, 100.0),
        }
    }

    /// Lunch and dinner defaults
    #[must_use]
    pub const fn main_defaults() -> Self {
        Self {
            fat: NutrientRange::new(20.0, 40.0),
            saturated_fat: NutrientRange::new(0.0, 4.0),
            cholesterol: NutrientRange::new(0.0, 30.0),
            sodium: NutrientRange::new(0.0, 400.0),
            carbohydrate: NutrientRange::new(40.0, 75.0),
            fiber: NutrientRange::new(4.0, 20.0),
            sugar: NutrientRange::new(0.0, 10.0),
            protein: NutrientRange::new(50.0, 175.0),
        }
    }

    fn validate(&self, kind: &str) -> Result<(), ConfigError> {
        for (field, range) in self.ranges() {
            range.validate(&format!("{kind}.{field}"))?;
        }
        Ok(())
    }
}

/// Target ranges for both meal kinds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetRangesConfig {
    /// Breakfast and snacks
    pub light: MealTargetRanges,
    /// Lunch and dinner
    pub main: MealTargetRanges,
}

impl Default for TargetRangesConfig {
    fn default() -> Self {
        Self {
            light: MealTargetRanges::light_defaults(),
            main: MealTargetRanges::main_defaults(),
        }
    }
}

impl TargetRangesConfig {
    /// Ranges for a meal kind
    #[must_use]
    pub const fn for_kind(&self, kind: MealKind) -> &MealTargetRanges {
        match kind {
            MealKind::Light => &self.light,
            MealKind::Main => &self.main,
        }
    }

    /// Validate every range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for the first inverted, negative, or non-finite range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.light.validate("light")?;
        self.main.validate("main")
    }
}
