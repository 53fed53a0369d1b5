// ABOUTME: Free-form recipe search by an explicit nutrition vector and ingredient filter
// ABOUTME: Parses semicolon-separated ingredient text and validates the requested count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::orchestrator::{Degradation, RecommendationOrchestrator};
use crate::constants::recommendation::INGREDIENT_SEPARATOR;
use crate::errors::{AppError, AppResult};
use crate::external::RecommendationQuery;
use crate::logging::AppLogger;
use crate::models::{FoodType, NutritionVector, RecipeResult};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Search by an explicit nutrition target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRecommendationRequest {
    /// Target nutrient vector
    pub nutrition_target: NutritionVector,
    /// Required ingredients separated by `;` (e.g. `"milk; eggs;butter"`)
    #[serde(default)]
    pub ingredients_text: String,
    /// Number of recipes requested (at least 1)
    pub count: usize,
    /// Optional food-type filter
    #[serde(default)]
    pub food_type: Option<FoodType>,
}

impl CustomRecommendationRequest {
    /// Check the count and the target
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero count or a negative or non-finite nutrient
    pub fn validate(&self) -> AppResult<()> {
        if self.count == 0 {
            return Err(AppError::out_of_range(
                "count",
                "At least one recipe must be requested",
            ));
        }
        NutritionVector::validated(self.nutrition_target.to_array())?;
        Ok(())
    }
}

/// Recipes returned for a custom search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRecommendation {
    /// Request identifier
    pub request_id: Uuid,
    /// Sanitized recipes with images, closest first
    pub recipes: Vec<RecipeResult>,
    /// Whether any collaborator failure was absorbed
    pub degraded: bool,
    /// Absorbed failures
    pub degradations: Vec<Degradation>,
}

/// Split ingredient text on `;`, trimming entries and dropping empty ones
#[must_use]
pub fn parse_ingredient_filter(text: &str) -> Vec<String> {
    text.split(INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_owned)
        .collect()
}

impl RecommendationOrchestrator {
    /// Search recipes closest to an explicit target
    ///
    /// # Errors
    ///
    /// Returns a validation error if the request is invalid. Collaborator
    /// failures yield an empty, degraded result instead.
    pub async fn recommend_custom(
        &self,
        request: &CustomRecommendationRequest,
    ) -> AppResult<CustomRecommendation> {
        request.validate()?;
        let started = Instant::now();
        let request_id = Uuid::new_v4();

        let query = RecommendationQuery::new(
            request.nutrition_target,
            parse_ingredient_filter(&request.ingredients_text),
            request.food_type,
            request.count,
        );
        let (recipes, degradations, _) = self
            .fetch_recipes(vec![(None, query)])
            .await
            .into_iter()
            .next()
            .unwrap_or_default();

        let recommendation = CustomRecommendation {
            request_id,
            degraded: !degradations.is_empty(),
            recipes,
            degradations,
        };
        AppLogger::log_recommendation_generated(
            &request_id.to_string(),
            1,
            recommendation.recipes.len(),
            recommendation.degraded,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(recommendation)
    }
}
