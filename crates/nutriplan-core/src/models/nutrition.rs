// ABOUTME: Nine-field nutrition vector shared by targets, recipes, and food analysis
// ABOUTME: NutritionVector and NutrientField definitions with scaling and rounding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use crate::constants::nutrients::NUTRIENT_KEYS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine nutrient dimensions, in vector order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientField {
    /// Energy (kcal)
    Calories,
    /// Total fat (g)
    FatContent,
    /// Saturated fat (g)
    SaturatedFatContent,
    /// Cholesterol (mg)
    CholesterolContent,
    /// Sodium (mg)
    SodiumContent,
    /// Carbohydrates (g)
    CarbohydrateContent,
    /// Dietary fiber (g)
    FiberContent,
    /// Sugars (g)
    SugarContent,
    /// Protein (g)
    ProteinContent,
}

impl NutrientField {
    /// All fields in vector order
    pub const ALL: [Self; 9] = [
        Self::Calories,
        Self::FatContent,
        Self::SaturatedFatContent,
        Self::CholesterolContent,
        Self::SodiumContent,
        Self::CarbohydrateContent,
        Self::FiberContent,
        Self::SugarContent,
        Self::ProteinContent,
    ];

    /// Position of this field in the vector
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dataset column name
    #[must_use]
    pub const fn key(self) -> &'static str {
        NUTRIENT_KEYS[self.index()]
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::CholesterolContent | Self::SodiumContent => "mg",
            _ => "g",
        }
    }
}

impl fmt::Display for NutrientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Nutrient amounts for a meal target, a recipe, or a detected food item
///
/// Field names serialize to the dataset column names so vectors can be exchanged
/// with the recommender and the vision model without an extra mapping layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NutritionVector {
    /// Energy (kcal)
    pub calories: f64,
    /// Total fat (g)
    pub fat_content: f64,
    /// Saturated fat (g)
    pub saturated_fat_content: f64,
    /// Cholesterol (mg)
    pub cholesterol_content: f64,
    /// Sodium (mg)
    pub sodium_content: f64,
    /// Carbohydrates (g)
    pub carbohydrate_content: f64,
    /// Dietary fiber (g)
    pub fiber_content: f64,
    /// Sugars (g)
    pub sugar_content: f64,
    /// Protein (g)
    pub protein_content: f64,
}

impl NutritionVector {
    /// Vector with every field set to zero
    pub const ZERO: Self = Self::from_array([0.0; 9]);

    /// Build a vector from values in [`NutrientField::ALL`] order
    #[must_use]
    pub const fn from_array(values: [f64; 9]) -> Self {
        Self {
            calories: values[0],
            fat_content: values[1],
            saturated_fat_content: values[2],
            cholesterol_content: values[3],
            sodium_content: values[4],
            carbohydrate_content: values[5],
            fiber_content: values[6],
            sugar_content: values[7],
            protein_content: values[8],
        }
    }

    /// Build a vector and reject negative or non-finite values
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending nutrient
    pub fn validated(values: [f64; 9]) -> AppResult<Self> {
        for (field, value) in NutrientField::ALL.iter().zip(values) {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::out_of_range(
                    field.key(),
                    format!("{field} must be a non-negative number, got {value}"),
                ));
            }
        }
        Ok(Self::from_array(values))
    }

    /// Values in [`NutrientField::ALL`] order
    #[must_use]
    pub const fn to_array(&self) -> [f64; 9] {
        [
            self.calories,
            self.fat_content,
            self.saturated_fat_content,
            self.cholesterol_content,
            self.sodium_content,
            self.carbohydrate_content,
            self.fiber_content,
            self.sugar_content,
            self.protein_content,
        ]
    }

    /// Value of a single field
    #[must_use]
    pub const fn get(&self, field: NutrientField) -> f64 {
        self.to_array()[field.index()]
    }

    /// Apply `f` to every field
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// Componentwise multiplication by a quantity
    #[must_use]
    pub fn scale(&self, quantity: f64) -> Self {
        self.map(|value| value * quantity)
    }

    /// Round every field to `decimals` places
    #[must_use]
    pub fn rounded(&self, decimals: i32) -> Self {
        self.map(|value| round_to(value, decimals))
    }
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
