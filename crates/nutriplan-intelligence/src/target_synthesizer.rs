// ABOUTME: Per-meal nutrition target synthesis with randomized macro targets
// ABOUTME: Calories come from the meal share; other nutrients are drawn from meal-kind ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Nutrition target synthesis
//!
//! Each meal target keeps the requested calories exactly and draws the eight
//! remaining nutrients uniformly from closed intervals that depend on whether the
//! meal is a light one (breakfast, snacks) or a main one (lunch, dinner). The random
//! source is injected so callers decide between entropy and a fixed seed.

use crate::config::{ConfigError, TargetRangesConfig};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{MealName, NutrientField, NutritionVector};
use rand::Rng;
use tracing::debug;

/// Builds per-meal target vectors from validated ranges
#[derive(Debug, Clone)]
pub struct TargetSynthesizer {
    ranges: TargetRangesConfig,
}

impl TargetSynthesizer {
    /// Create a synthesizer after validating the ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if any range is inverted, negative, or non-finite
    pub fn new(ranges: TargetRangesConfig) -> Result<Self, ConfigError> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    /// Ranges in use
    #[must_use]
    pub const fn ranges(&self) -> &TargetRangesConfig {
        &self.ranges
    }

    /// Synthesize the target vector for one meal
    ///
    /// Calories equal `meal_calories` exactly.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `meal_calories` is negative or not finite
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        meal: MealName,
        meal_calories: f64,
        rng: &mut R,
    ) -> AppResult<NutritionVector> {
        if !meal_calories.is_finite() || meal_calories < 0.0 {
            return Err(AppError::out_of_range(
                NutrientField::Calories.key(),
                format!("Meal calories must be a non-negative number, got {meal_calories}"),
            ));
        }

        let mut values = [0.0; 9];
        values[NutrientField::Calories.index()] = meal_calories;
        for (field, range) in self.ranges.for_kind(meal.kind()).ranges() {
            values[field.index()] = rng.gen_range(range.min..=range.max);
        }

        debug!(meal = %meal, calories = meal_calories, "Synthesized meal target");
        Ok(NutritionVector::from_array(values))
    }

    /// Synthesize targets for every meal, in the given order
    ///
    /// # Errors
    ///
    /// Returns the first validation error from [`Self::synthesize`]
    pub fn synthesize_plan<R: Rng + ?Sized>(
        &self,
        meal_calories: &[(MealName, f64)],
        rng: &mut R,
    ) -> AppResult<Vec<(MealName, NutritionVector)>> {
        meal_calories
            .iter()
            .map(|&(meal, calories)| Ok((meal, self.synthesize(meal, calories, rng)?)))
            .collect()
    }
}

impl Default for TargetSynthesizer {
    fn default() -> Self {
        Self {
            ranges: TargetRangesConfig::default(),
        }
    }
}
