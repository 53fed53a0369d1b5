// ABOUTME: Core data models for the NutriPlan engine
// ABOUTME: Re-exports profile, nutrition, recipe, and food analysis types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! # Data Models
//!
//! Strongly typed records shared by the algorithm crate and the orchestration layer.
//!
//! ## Core Models
//!
//! - `PersonProfile`: validated biometrics and preferences for one request
//! - `NutritionVector`: the nine-field nutrient vector used for targets and totals
//! - `RecipeCandidate` / `RecipeResult`: recommender rows before and after sanitization
//! - `AnalyzedFoodItem` / `ClassificationResult`: image analysis output

mod analysis;
mod nutrition;
mod profile;
mod recipe;

// Profile domain
pub use profile::{
    ActivityLevel, Gender, MealKind, MealName, MealsPerDay, PersonProfile, ProfileRequest,
    WeightLossPlan,
};

// Nutrition domain
pub use nutrition::{round_to, NutrientField, NutritionVector};

// Recipe domain
pub use recipe::{FoodType, RecipeCandidate, RecipeNutrients, RecipeResult};

// Analysis domain
pub use analysis::{
    AnalyzedFoodItem, ClassificationResult, HealthStatus, StatusColor, WeightImpact,
};
