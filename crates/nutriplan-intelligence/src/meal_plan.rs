// ABOUTME: Static policy splitting daily calories across meals
// ABOUTME: Maps meals-per-day to ordered meal shares that sum to one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{MealName, MealsPerDay};
use serde::{Deserialize, Serialize};

/// Fraction of daily calories assigned to one meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealShare {
    /// Meal slot
    pub meal: MealName,
    /// Fraction of daily calories in (0, 1]
    pub share: f64,
}

impl MealShare {
    const fn new(meal: MealName, share: f64) -> Self {
        Self { meal, share }
    }
}

const THREE_MEALS: [MealShare; 3] = [
    MealShare::new(MealName::Breakfast, 0.35),
    MealShare::new(MealName::Lunch, 0.40),
    MealShare::new(MealName::Dinner, 0.25),
];

const FOUR_MEALS: [MealShare; 4] = [
    MealShare::new(MealName::Breakfast, 0.30),
    MealShare::new(MealName::MorningSnack, 0.05),
    MealShare::new(MealName::Lunch, 0.40),
    MealShare::new(MealName::Dinner, 0.25),
];

const FIVE_MEALS: [MealShare; 5] = [
    MealShare::new(MealName::Breakfast, 0.30),
    MealShare::new(MealName::MorningSnack, 0.05),
    MealShare::new(MealName::Lunch, 0.40),
    MealShare::new(MealName::AfternoonSnack, 0.05),
    MealShare::new(MealName::Dinner, 0.20),
];

/// Ordered meal shares for a meal count
#[must_use]
pub const fn meal_shares(meals_per_day: MealsPerDay) -> &'static [MealShare] {
    match meals_per_day {
        MealsPerDay::Three => &THREE_MEALS,
        MealsPerDay::Four => &FOUR_MEALS,
        MealsPerDay::Five => &FIVE_MEALS,
    }
}

/// Ordered meal shares for a raw meal count
///
/// # Errors
///
/// Returns a validation error for any count other than 3, 4 or 5
pub fn meal_shares_for_count(count: u8) -> AppResult<&'static [MealShare]> {
    Ok(meal_shares(MealsPerDay::try_from(count)?))
}

/// Calories per meal for a daily total, in meal order
#[must_use]
pub fn meal_calories(daily_calories: f64, meals_per_day: MealsPerDay) -> Vec<(MealName, f64)> {
    meal_shares(meals_per_day)
        .iter()
        .map(|share| (share.meal, share.share * daily_calories))
        .collect()
}
