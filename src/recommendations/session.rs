// ABOUTME: Caller-owned plan session holding a profile and its latest recommendation
// ABOUTME: Aggregates the user's per-meal recipe choices against the plan's daily calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::orchestrator::{DietRecommendation, RecommendationOrchestrator};
use crate::errors::{AppError, AppResult};
use crate::intelligence::aggregator;
use crate::models::{MealName, NutritionVector, PersonProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One chosen recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealChoice {
    /// Meal slot
    pub meal: MealName,
    /// Name of the chosen recipe
    pub recipe_name: String,
}

/// Totals of the chosen recipes compared with the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSelectionSummary {
    /// Choices in meal order
    pub choices: Vec<MealChoice>,
    /// Summed nutrition of the chosen recipes (absent nutrients count as 0)
    pub totals: NutritionVector,
    /// Daily calories of the chosen plan, rounded
    pub plan_calories: i64,
    /// Whether the chosen recipes exceed `plan_calories`
    pub exceeds_plan: bool,
}

/// State of one interactive planning flow
///
/// Owned by the caller and dropped when the flow ends.
#[derive(Debug, Clone)]
pub struct PlanSession {
    profile: PersonProfile,
    recommendation: Option<DietRecommendation>,
}

impl PlanSession {
    /// Start a session for a profile
    ///
    /// # Errors
    ///
    /// Returns a validation error if the profile is out of range
    pub fn new(profile: PersonProfile) -> AppResult<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            recommendation: None,
        })
    }

    /// Profile of this session
    #[must_use]
    pub const fn profile(&self) -> &PersonProfile {
        &self.profile
    }

    /// Latest recommendation, if one was generated
    #[must_use]
    pub const fn recommendation(&self) -> Option<&DietRecommendation> {
        self.recommendation.as_ref()
    }

    /// Generate a recommendation, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns a validation error if planning fails
    pub async fn generate<R: Rng + ?Sized>(
        &mut self,
        orchestrator: &RecommendationOrchestrator,
        rng: &mut R,
    ) -> AppResult<&DietRecommendation> {
        let recommendation = orchestrator.recommend(&self.profile, rng).await?;
        Ok(self.recommendation.insert(recommendation))
    }

    /// Aggregate one chosen recipe per meal, given in meal order
    ///
    /// # Errors
    ///
    /// Returns a validation error if no recommendation exists, the number of
    /// choices differs from the number of meals, or a name is not among that
    /// meal's recipes
    pub fn select_meals<S: AsRef<str>>(&self, choices: &[S]) -> AppResult<MealSelectionSummary> {
        let recommendation = self.recommendation.as_ref().ok_or_else(|| {
            AppError::invalid_input("No recommendation has been generated for this session")
        })?;

        if choices.len() != recommendation.meals.len() {
            return Err(AppError::validation(
                "choices",
                format!(
                    "Expected one choice for each of {} meals, got {}",
                    recommendation.meals.len(),
                    choices.len()
                ),
            ));
        }

        let mut selected = Vec::with_capacity(choices.len());
        let mut vectors = Vec::with_capacity(choices.len());
        for (group, choice) in recommendation.meals.iter().zip(choices) {
            let name = choice.as_ref().trim();
            let recipe = group
                .recipes
                .iter()
                .find(|recipe| recipe.name == name)
                .ok_or_else(|| {
                    AppError::validation(
                        "choices",
                        format!("'{name}' is not a recommended {} recipe", group.meal),
                    )
                })?;
            vectors.push(recipe.nutrition.to_vector());
            selected.push(MealChoice {
                meal: group.meal,
                recipe_name: recipe.name.clone(),
            });
        }

        let totals = aggregator::sum(&vectors);
        let plan_calories = recommendation.energy.rounded_plan_calories();
        Ok(MealSelectionSummary {
            choices: selected,
            exceeds_plan: totals.calories > plan_calories as f64,
            totals,
            plan_calories,
        })
    }
}
