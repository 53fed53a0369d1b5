// ABOUTME: Recipe models exchanged with the external recommender
// ABOUTME: FoodType, raw RecipeCandidate rows, and sanitized RecipeResult entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::nutrition::{NutrientField, NutritionVector};
use crate::errors::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Dietary category used as a recommender filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodType {
    /// Vegetarian
    #[serde(rename = "Veg")]
    Veg,
    /// Contains meat, seafood, or animal by-products
    #[serde(rename = "Non-Veg", alias = "NonVeg")]
    NonVeg,
}

impl FoodType {
    /// Label used by the recipe dataset
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
        }
    }
}

impl FromStr for FoodType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Veg" => Ok(Self::Veg),
            "Non-Veg" | "NonVeg" => Ok(Self::NonVeg),
            other => Err(AppError::validation(
                "food_type",
                format!("Unrecognized food type '{other}', expected 'Veg' or 'Non-Veg'"),
            )),
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-recipe nutrient values where any field may be missing
///
/// Upstream rows can carry NaN for nutrients the dataset never recorded; after
/// sanitization those become `None` and serialize as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeNutrients {
    /// Energy (kcal)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: Option<f64>,
    /// Total fat (g)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_content: Option<f64>,
    /// Saturated fat (g)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub saturated_fat_content: Option<f64>,
    /// Cholesterol (mg)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cholesterol_content: Option<f64>,
    /// Sodium (mg)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium_content: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbohydrate_content: Option<f64>,
    /// Dietary fiber (g)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber_content: Option<f64>,
    /// Sugars (g)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar_content: Option<f64>,
    /// Protein (g)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein_content: Option<f64>,
}

impl RecipeNutrients {
    /// Values in [`NutrientField::ALL`] order
    #[must_use]
    pub const fn to_array(&self) -> [Option<f64>; 9] {
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

    /// Build from values in [`NutrientField::ALL`] order
    #[must_use]
    pub const fn from_array(values: [Option<f64>; 9]) -> Self {
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

    /// Value of a single field, if present
    #[must_use]
    pub const fn get(&self, field: NutrientField) -> Option<f64> {
        self.to_array()[field.index()]
    }

    /// Dense vector where absent values count as zero
    #[must_use]
    pub fn to_vector(&self) -> NutritionVector {
        NutritionVector::from_array(self.to_array().map(|value| value.unwrap_or(0.0)))
    }
}

/// Raw recipe row as returned by the recommender, before sanitization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeCandidate {
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// Cooking time in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cook_time: Option<f64>,
    /// Preparation time in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub prep_time: Option<f64>,
    /// Total time in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_time: Option<f64>,
    /// Ingredient names, in recipe order
    #[serde(default)]
    pub recipe_ingredient_parts: Vec<String>,
    /// Preparation steps, in order
    #[serde(default)]
    pub recipe_instructions: Vec<String>,
    /// Dataset food-type label
    #[serde(default, deserialize_with = "lenient_food_type")]
    pub food_type: Option<FoodType>,
    /// Nutrient values
    #[serde(flatten)]
    pub nutrition: RecipeNutrients,
}

/// Sanitized recipe ready for presentation and aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeResult {
    /// Recipe name
    pub name: String,
    /// Cooking time in minutes (0 when the dataset has none)
    pub cook_time: f64,
    /// Preparation time in minutes
    pub prep_time: Option<f64>,
    /// Total time in minutes
    pub total_time: Option<f64>,
    /// Ingredient names, in recipe order
    pub recipe_ingredient_parts: Vec<String>,
    /// Preparation steps, in order
    pub recipe_instructions: Vec<String>,
    /// Dataset food-type label
    pub food_type: Option<FoodType>,
    /// Nutrient values (absent when unknown)
    #[serde(flatten)]
    pub nutrition: RecipeNutrients,
    /// Picture of the dish, or the placeholder image
    #[serde(rename = "image_link")]
    pub image_link: String,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

fn lenient_food_type<'de, D>(deserializer: D) -> Result<Option<FoodType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|label| label.parse().ok()))
}
