// ABOUTME: Person profile models driving BMR, TDEE, and meal planning
// ABOUTME: Gender, ActivityLevel, WeightLossPlan, MealsPerDay, MealName, and PersonProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::recipe::FoodType;
use crate::constants::profile_limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
///
/// Parsing is strict: only the exact tokens `Male` and `Female` are accepted,
/// because the BMR formula constant differs by 166 kcal between the two branches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(AppError::validation(
                "gender",
                format!("Unrecognized gender '{other}', expected 'Male' or 'Female'"),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

/// Activity level for TDEE calculation, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little/no exercise
    Sedentary,
    /// Light exercise
    LightlyActive,
    /// Moderate exercise (3-5 days/wk)
    ModeratelyActive,
    /// Very active (6-7 days/wk)
    VeryActive,
    /// Extra active (very active & physical job)
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers, least active first
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Label shown to users and accepted from forms
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Little/no exercise",
            Self::LightlyActive => "Light exercise",
            Self::ModeratelyActive => "Moderate exercise (3-5 days/wk)",
            Self::VeryActive => "Very active (6-7 days/wk)",
            Self::ExtraActive => "Extra active (very active & physical job)",
        }
    }

    const fn identifier(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    /// Accepts the form labels or the snake_case identifiers; nothing else
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s || level.identifier() == s)
            .ok_or_else(|| {
                AppError::validation("activity", format!("Unrecognized activity level '{s}'"))
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named calorie plan applied on top of TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightLossPlan {
    /// Maintain current weight
    #[default]
    MaintainWeight,
    /// About 0.25 kg per week
    MildWeightLoss,
    /// About 0.5 kg per week
    WeightLoss,
    /// About 1 kg per week
    ExtremeWeightLoss,
}

impl WeightLossPlan {
    /// All plans, in presentation order
    pub const ALL: [Self; 4] = [
        Self::MaintainWeight,
        Self::MildWeightLoss,
        Self::WeightLoss,
        Self::ExtremeWeightLoss,
    ];

    /// Multiplier applied to TDEE
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::MaintainWeight => 1.0,
            Self::MildWeightLoss => 0.9,
            Self::WeightLoss => 0.8,
            Self::ExtremeWeightLoss => 0.6,
        }
    }

    /// Display name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MaintainWeight => "Maintain weight",
            Self::MildWeightLoss => "Mild weight loss",
            Self::WeightLoss => "Weight loss",
            Self::ExtremeWeightLoss => "Extreme weight loss",
        }
    }

    /// Expected weekly weight change
    #[must_use]
    pub const fn weekly_delta(self) -> &'static str {
        match self {
            Self::MaintainWeight => "-0 kg/wk",
            Self::MildWeightLoss => "-0.25 kg/wk",
            Self::WeightLoss => "-0.5 kg/wk",
            Self::ExtremeWeightLoss => "-1 kg/wk",
        }
    }

    const fn identifier(self) -> &'static str {
        match self {
            Self::MaintainWeight => "maintain_weight",
            Self::MildWeightLoss => "mild_weight_loss",
            Self::WeightLoss => "weight_loss",
            Self::ExtremeWeightLoss => "extreme_weight_loss",
        }
    }
}

impl FromStr for WeightLossPlan {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|plan| plan.label() == s || plan.identifier() == s)
            .ok_or_else(|| AppError::validation("plan", format!("Unrecognized plan '{s}'")))
    }
}

impl fmt::Display for WeightLossPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of meals the daily calories are split across
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealsPerDay {
    /// Breakfast, lunch, dinner
    Three,
    /// Adds a morning snack
    Four,
    /// Adds morning and afternoon snacks
    Five,
}

impl MealsPerDay {
    /// Number of meals
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl TryFrom<u8> for MealsPerDay {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(AppError::out_of_range(
                "meals_per_day",
                format!("Meals per day must be 3, 4 or 5, got {other}"),
            )),
        }
    }
}

impl From<MealsPerDay> for u8 {
    fn from(value: MealsPerDay) -> Self {
        value.count()
    }
}

/// A named meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealName {
    /// First meal
    #[serde(rename = "breakfast")]
    Breakfast,
    /// Snack between breakfast and lunch
    #[serde(rename = "morning snack")]
    MorningSnack,
    /// Midday meal
    #[serde(rename = "lunch")]
    Lunch,
    /// Snack between lunch and dinner
    #[serde(rename = "afternoon snack")]
    AfternoonSnack,
    /// Evening meal
    #[serde(rename = "dinner")]
    Dinner,
}

impl MealName {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MorningSnack => "morning snack",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoon snack",
            Self::Dinner => "dinner",
        }
    }

    /// Nutrition target family this meal belongs to
    #[must_use]
    pub const fn kind(self) -> MealKind {
        match self {
            Self::Lunch | Self::Dinner => MealKind::Main,
            Self::Breakfast | Self::MorningSnack | Self::AfternoonSnack => MealKind::Light,
        }
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target-range family of a meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealKind {
    /// Breakfast and snacks
    Light,
    /// Lunch and dinner
    Main,
}

/// Loosely-typed profile input as delivered by forms, JSON bodies, or CLI flags
///
/// Every entry point deserializes into this shape and converts it with
/// `PersonProfile::try_from`, which is where all validation happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// `Male` or `Female`
    pub gender: String,
    /// `Veg` or `Non-Veg`
    #[serde(rename = "foodType", alias = "food_type")]
    pub food_type: String,
    /// Activity label (see [`ActivityLevel::label`])
    pub activity: String,
    /// 3, 4 or 5
    #[serde(alias = "number_of_meals", alias = "meals")]
    pub meals_per_day: u8,
    /// Plan label (see [`WeightLossPlan::label`])
    #[serde(alias = "weight_loss")]
    pub plan: String,
}

/// Validated biometric and preference record for one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Age in years (2-120)
    pub age: u32,
    /// Height in centimeters (50-300)
    pub height_cm: f64,
    /// Weight in kilograms (10-300)
    pub weight_kg: f64,
    /// Gender for the BMR branch
    pub gender: Gender,
    /// Recommender food-type filter
    pub food_type: FoodType,
    /// Activity tier for TDEE
    pub activity_level: ActivityLevel,
    /// Meal split
    pub meals_per_day: MealsPerDay,
    /// Calorie plan
    pub weight_loss_plan: WeightLossPlan,
}

impl PersonProfile {
    /// Check biometric ranges
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first out-of-range field
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&self.age) {
            return Err(AppError::out_of_range(
                "age",
                format!(
                    "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {}",
                    self.age
                ),
            ));
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(AppError::out_of_range(
                "height",
                format!(
                    "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm, got {}",
                    self.height_cm
                ),
            ));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(AppError::out_of_range(
                "weight",
                format!(
                    "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg, got {}",
                    self.weight_kg
                ),
            ));
        }
        Ok(())
    }
}

impl TryFrom<ProfileRequest> for PersonProfile {
    type Error = AppError;

    fn try_from(request: ProfileRequest) -> Result<Self, Self::Error> {
        let profile = Self {
            age: request.age,
            height_cm: request.height,
            weight_kg: request.weight,
            gender: request.gender.parse()?,
            food_type: request.food_type.parse()?,
            activity_level: request.activity.parse()?,
            meals_per_day: MealsPerDay::try_from(request.meals_per_day)?,
            weight_loss_plan: request.plan.parse()?,
        };
        profile.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ProfileRequest {
        ProfileRequest {
            age: 25,
            height: 170.0,
            weight: 70.0,
            gender: "Male".to_owned(),
            food_type: "Veg".to_owned(),
            activity: "Little/no exercise".to_owned(),
            meals_per_day: 3,
            plan: "Maintain weight".to_owned(),
        }
    }

    #[test]
    fn test_profile_from_request() {
        let profile = PersonProfile::try_from(request()).unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(profile.meals_per_day, MealsPerDay::Three);
        assert_eq!(profile.weight_loss_plan, WeightLossPlan::MaintainWeight);
        assert_eq!(profile.food_type, FoodType::Veg);
    }

    #[test]
    fn test_gender_is_strict() {
        for token in ["male", "M", "Other", ""] {
            let error = token.parse::<Gender>().unwrap_err();
            assert_eq!(error.field(), Some("gender"));
        }
    }

    #[test]
    fn test_unknown_activity_names_field() {
        let mut req = request();
        req.activity = "Couch potato".to_owned();
        let error = PersonProfile::try_from(req).unwrap_err();
        assert_eq!(error.field(), Some("activity"));
    }

    #[test]
    fn test_activity_accepts_labels_and_identifiers() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.label().parse::<ActivityLevel>().unwrap(), level);
        }
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn test_meals_per_day_rejects_unsupported_counts() {
        for count in [0_u8, 1, 2, 6, 10] {
            let error = MealsPerDay::try_from(count).unwrap_err();
            assert_eq!(error.field(), Some("meals_per_day"));
        }
    }

    #[test]
    fn test_out_of_range_biometrics() {
        let mut req = request();
        req.height = 0.0;
        assert_eq!(PersonProfile::try_from(req).unwrap_err().field(), Some("height"));

        let mut req = request();
        req.age = 1;
        assert_eq!(PersonProfile::try_from(req).unwrap_err().field(), Some("age"));

        let mut req = request();
        req.weight = 301.0;
        assert_eq!(PersonProfile::try_from(req).unwrap_err().field(), Some("weight"));
    }

    #[test]
    fn test_request_accepts_original_field_aliases() {
        let json = r#"{"age": 30, "height": 175, "weight": 70, "gender": "Female",
            "foodType": "Non-Veg", "activity": "Light exercise",
            "number_of_meals": 5, "weight_loss": "Weight loss"}"#;
        let req: ProfileRequest = serde_json::from_str(json).unwrap();
        let profile = PersonProfile::try_from(req).unwrap();
        assert_eq!(profile.meals_per_day, MealsPerDay::Five);
        assert_eq!(profile.weight_loss_plan, WeightLossPlan::WeightLoss);
        assert_eq!(profile.food_type, FoodType::NonVeg);
    }
}
