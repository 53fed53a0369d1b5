// ABOUTME: Biometric calculations using peer-reviewed formulas
// ABOUTME: BMI and category, Mifflin-St Jeor BMR, TDEE, calorie plans, and energy profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Biometric Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization. Body mass index classification for adults.

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{
    round_to, ActivityLevel, Gender, PersonProfile, StatusColor, WeightLossPlan,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO body-mass-index category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obesity,
}

impl BmiCategory {
    /// Categorize a BMI value (lower bounds inclusive)
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    /// Presentation color
    #[must_use]
    pub const fn color(self) -> StatusColor {
        match self {
            Self::Underweight | Self::Obesity => StatusColor::Red,
            Self::Normal => StatusColor::Green,
            Self::Overweight => StatusColor::Yellow,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        })
    }
}

/// BMI value with its category and color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// kg/m², rounded to 2 decimals
    pub value: f64,
    /// WHO category of `value`
    pub category: BmiCategory,
    /// Color of `category`
    pub color: StatusColor,
}

impl BmiResult {
    /// Compute BMI and categorize it
    ///
    /// # Errors
    ///
    /// Returns a validation error if weight or height is not positive
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        let value = calculate_bmi(weight_kg, height_cm)?;
        let category = BmiCategory::from_bmi(value);
        Ok(Self {
            value,
            category,
            color: category.color(),
        })
    }
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)², rounded to 2 decimals
///
/// # Errors
///
/// Returns a validation error if weight or height is not a positive number
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::validation("weight", "Weight must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::validation("height", "Height must be positive"));
    }
    let height_m = height_cm / 100.0;
    Ok(round_to(weight_kg / (height_m * height_m), 2))
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns a validation error if weight or height is not positive
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::validation("weight", "Weight must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::validation("height", "Height must be positive"));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns a validation error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::out_of_range(
            "bmr",
            format!("BMR must be positive, got {bmr}"),
        ));
    }
    Ok(bmr * config.factor(activity_level))
}

/// Daily calories for one weight-loss plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaloriePlan {
    /// Plan identifier
    pub plan: WeightLossPlan,
    /// Display name
    pub name: String,
    /// TDEE x multiplier, rounded to the nearest kcal
    pub calories: i64,
    /// Expected weekly weight change
    pub weekly_delta: String,
}

/// Calorie targets for every plan, in presentation order
///
/// Calories are non-increasing across the returned list.
#[must_use]
pub fn calorie_plans(tdee: f64) -> Vec<CaloriePlan> {
    WeightLossPlan::ALL
        .into_iter()
        .map(|plan| CaloriePlan {
            plan,
            name: plan.label().to_owned(),
            calories: (tdee * plan.multiplier()).round() as i64,
            weekly_delta: plan.weekly_delta().to_owned(),
        })
        .collect()
}

/// Energy expenditure summary that drives meal synthesis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyProfile {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Chosen plan
    pub plan: WeightLossPlan,
    /// TDEE x plan multiplier, unrounded
    pub plan_calories: f64,
}

impl EnergyProfile {
    /// Compute BMR, TDEE, and plan calories for a validated profile
    ///
    /// # Errors
    ///
    /// Returns a validation error if the profile's measurements produce a
    /// non-positive BMR
    pub fn for_person(profile: &PersonProfile, config: &NutritionConfig) -> AppResult<Self> {
        let bmr = calculate_mifflin_st_jeor(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.gender,
            &config.bmr,
        )?;
        let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;
        let plan = profile.weight_loss_plan;
        Ok(Self {
            bmr,
            tdee,
            plan,
            plan_calories: tdee * plan.multiplier(),
        })
    }

    /// Plan calories rounded to the nearest kcal, as shown to users
    #[must_use]
    pub fn rounded_plan_calories(&self) -> i64 {
        self.plan_calories.round() as i64
    }
}
