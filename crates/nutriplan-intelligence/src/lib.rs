// ABOUTME: Nutrition intelligence algorithms for meal planning and food analysis
// ABOUTME: Biometrics, meal shares, target synthesis, aggregation, and classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![deny(unsafe_code)]

//! # NutriPlan Intelligence
//!
//! Pure, synchronous algorithms. Nothing here performs I/O; every function takes
//! its configuration by reference and randomness is injected by the caller.
//!
//! ## Modules
//!
//! - **biometrics**: BMI, BMR (Mifflin-St Jeor), TDEE, and calorie plans
//! - **meal_plan**: meals-per-day to calorie share policy
//! - **target_synthesizer**: per-meal nutrition target vectors
//! - **aggregator**: order-independent weighted sums
//! - **health_classifier**: health tier and weight impact rules
//! - **food_type**: Veg/Non-Veg labelling from ingredients

/// Algorithm configuration and validation
pub mod config;

/// BMI, BMR, TDEE, and calorie plan calculations
pub mod biometrics;

/// Static meal share policy
pub mod meal_plan;

/// Randomized per-meal target synthesis
pub mod target_synthesizer;

/// Weighted componentwise aggregation
pub mod aggregator;

/// Health status and weight impact classification
pub mod health_classifier;

/// Ingredient keyword food-type inference
pub mod food_type;

pub use biometrics::{
    calculate_bmi, calculate_mifflin_st_jeor, calculate_tdee, calorie_plans, BmiCategory,
    BmiResult, CaloriePlan, EnergyProfile,
};
pub use config::{ConfigError, NutritionConfig};
pub use food_type::infer_food_type;
pub use health_classifier::HealthClassifier;
pub use meal_plan::{meal_calories, meal_shares, MealShare};
pub use target_synthesizer::TargetSynthesizer;
