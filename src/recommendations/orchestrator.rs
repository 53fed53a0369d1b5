// ABOUTME: Recommendation orchestrator driving the recommender and image lookup per meal
// ABOUTME: Plans energy and targets, dispatches collaborator calls concurrently, and keeps meal order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Recommendation Orchestrator
//!
//! Planning ([`RecommendationOrchestrator::plan_diet`]) is synchronous and is the
//! only step that touches the random number generator, so a seeded generator
//! always yields the same targets. Fetching
//! ([`RecommendationOrchestrator::recommend_plan`]) runs the recommender calls and
//! then the image lookups, each stage through `buffered(max_concurrency)`, which
//! yields results in submission order whatever order the calls finish in.

use super::sanitize::sanitize_candidate;
use crate::config::environment::OrchestratorConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::{
    call_with_timeout, CollaboratorError, ImageLookup, RecommendationQuery, Recommender,
};
use crate::intelligence::{
    calorie_plans, meal_calories, BmiResult, CaloriePlan, ConfigError, EnergyProfile,
    NutritionConfig, TargetSynthesizer,
};
use crate::logging::AppLogger;
use crate::models::{FoodType, MealName, NutritionVector, PersonProfile, RecipeResult};
use chrono::{DateTime, Utc};
use futures_util::stream::{self, StreamExt};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

/// External collaborator that caused a degradation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Collaborator {
    /// Recipe recommender
    Recommender,
    /// Recipe image lookup
    ImageLookup,
    /// Food vision analyzer
    VisionAnalyzer,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recommender => service_names::RECOMMENDER,
            Self::ImageLookup => service_names::IMAGE_LOOKUP,
            Self::VisionAnalyzer => service_names::VISION_ANALYZER,
        })
    }
}

/// A collaborator failure that was absorbed instead of failing the request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Degradation {
    /// Collaborator that failed
    pub collaborator: Collaborator,
    /// Meal affected, if any
    pub meal: Option<MealName>,
    /// Recipe affected, if any
    pub recipe: Option<String>,
    /// Failure description
    pub reason: String,
}

impl Degradation {
    /// Record `error` against a meal and/or recipe
    #[must_use]
    pub fn from_error(
        collaborator: Collaborator,
        meal: Option<MealName>,
        recipe: Option<String>,
        error: &CollaboratorError,
    ) -> Self {
        Self {
            collaborator,
            meal,
            recipe,
            reason: error.to_string(),
        }
    }
}

/// Recipes recommended for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealGroup {
    /// Meal slot
    pub meal: MealName,
    /// Target the recommender was queried with
    pub target: NutritionVector,
    /// Sanitized recipes, closest first (empty when nothing matched)
    pub recipes: Vec<RecipeResult>,
    /// Whether a collaborator failure affected this meal
    pub degraded: bool,
}

/// Energy figures and per-meal targets computed before any collaborator call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// BMI with category
    pub bmi: BmiResult,
    /// BMR, TDEE, and chosen plan calories
    pub energy: EnergyProfile,
    /// Calories for every plan, for comparison
    pub calorie_plans: Vec<CaloriePlan>,
    /// Recommender food-type filter
    pub food_type: FoodType,
    /// Targets in meal order
    pub targets: Vec<(MealName, NutritionVector)>,
}

/// Complete diet recommendation for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietRecommendation {
    /// Request identifier
    pub request_id: Uuid,
    /// Generation time
    pub generated_at: DateTime<Utc>,
    /// BMI with category
    pub bmi: BmiResult,
    /// BMR, TDEE, and chosen plan calories
    pub energy: EnergyProfile,
    /// Calories for every plan
    pub calorie_plans: Vec<CaloriePlan>,
    /// One group per meal, in meal order
    pub meals: Vec<MealGroup>,
    /// Whether any collaborator failure was absorbed
    pub degraded: bool,
    /// Absorbed failures
    pub degradations: Vec<Degradation>,
}

impl DietRecommendation {
    /// Total number of recipes across all meals
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.meals.iter().map(|group| group.recipes.len()).sum()
    }
}

/// Drives the recommender and image lookup for diet and custom requests
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    recommender: Arc<dyn Recommender>,
    image_lookup: Arc<dyn ImageLookup>,
    synthesizer: TargetSynthesizer,
    nutrition: NutritionConfig,
    config: OrchestratorConfig,
}

impl fmt::Debug for RecommendationOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationOrchestrator")
            .field("synthesizer", &self.synthesizer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RecommendationOrchestrator {
    /// Create an orchestrator
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `nutrition` or `config` is invalid
    pub fn new(
        recommender: Arc<dyn Recommender>,
        image_lookup: Arc<dyn ImageLookup>,
        nutrition: NutritionConfig,
        config: OrchestratorConfig,
    ) -> AppResult<Self> {
        config.validate()?;
        nutrition.validate().map_err(invalid_nutrition_config)?;
        let synthesizer = TargetSynthesizer::new(nutrition.target_ranges.clone())
            .map_err(invalid_nutrition_config)?;
        Ok(Self {
            recommender,
            image_lookup,
            synthesizer,
            nutrition,
            config,
        })
    }

    /// Orchestration limits in use
    #[must_use]
    pub const fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Compute BMI, energy, and per-meal targets for a profile
    ///
    /// Targets are drawn from `rng` sequentially in meal order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the profile is out of range
    pub fn plan_diet<R: Rng + ?Sized>(
        &self,
        profile: &PersonProfile,
        rng: &mut R,
    ) -> AppResult<DietPlan> {
        profile.validate()?;
        let bmi = BmiResult::from_measurements(profile.weight_kg, profile.height_cm)?;
        let energy = EnergyProfile::for_person(profile, &self.nutrition)?;
        let per_meal = meal_calories(energy.plan_calories, profile.meals_per_day);
        let targets = self.synthesizer.synthesize_plan(&per_meal, rng)?;
        Ok(DietPlan {
            bmi,
            energy,
            calorie_plans: calorie_plans(energy.tdee),
            food_type: profile.food_type,
            targets,
        })
    }

    /// Plan and fetch recommendations for a profile
    ///
    /// # Errors
    ///
    /// Returns a validation error if the profile is out of range. Collaborator
    /// failures are recorded as degradations instead.
    pub async fn recommend<R: Rng + ?Sized>(
        &self,
        profile: &PersonProfile,
        rng: &mut R,
    ) -> AppResult<DietRecommendation> {
        let plan = self.plan_diet(profile, rng)?;
        Ok(self.recommend_plan(plan).await)
    }

    /// Fetch recipes and images for an already computed plan
    pub async fn recommend_plan(&self, plan: DietPlan) -> DietRecommendation {
        let started = Instant::now();
        let request_id = Uuid::new_v4();

        let queries: Vec<(Option<MealName>, RecommendationQuery)> = plan
            .targets
            .iter()
            .map(|&(meal, target)| {
                (
                    Some(meal),
                    RecommendationQuery::new(
                        target,
                        Vec::new(),
                        Some(plan.food_type),
                        self.config.neighbors,
                    ),
                )
            })
            .collect();
        let fetched = self.fetch_recipes(queries).await;

        let mut degradations = Vec::new();
        let mut meals = Vec::with_capacity(plan.targets.len());
        for ((meal, target), (recipes, recipe_degradations, query_failed)) in
            plan.targets.into_iter().zip(fetched)
        {
            let degraded = query_failed || !recipe_degradations.is_empty();
            degradations.extend(recipe_degradations);
            meals.push(MealGroup {
                meal,
                target,
                recipes,
                degraded,
            });
        }

        let recommendation = DietRecommendation {
            request_id,
            generated_at: Utc::now(),
            bmi: plan.bmi,
            energy: plan.energy,
            calorie_plans: plan.calorie_plans,
            degraded: !degradations.is_empty(),
            meals,
            degradations,
        };
        AppLogger::log_recommendation_generated(
            &request_id.to_string(),
            recommendation.meals.len(),
            recommendation.recipe_count(),
            recommendation.degraded,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        recommendation
    }

    /// Run every query, then attach images to every returned recipe
    ///
    /// Returns one `(recipes, degradations, query_failed)` entry per query, in
    /// query order.
    pub(super) async fn fetch_recipes(
        &self,
        queries: Vec<(Option<MealName>, RecommendationQuery)>,
    ) -> Vec<(Vec<RecipeResult>, Vec<Degradation>, bool)> {
        let concurrency = self.config.max_concurrency.max(1);

        let query_results: Vec<(Option<MealName>, Vec<RecipeResult>, Option<Degradation>)> =
            stream::iter(
                queries
                    .into_iter()
                    .map(|(meal, query)| self.query_recipes(meal, query)),
            )
            .buffered(concurrency)
            .collect()
            .await;

        let mut counts = Vec::with_capacity(query_results.len());
        let mut query_degradations = Vec::with_capacity(query_results.len());
        let mut pending = Vec::new();
        for (meal, recipes, degradation) in query_results {
            counts.push(recipes.len());
            query_degradations.push(degradation);
            pending.extend(recipes.into_iter().map(|recipe| (meal, recipe)));
        }

        let mut enriched = stream::iter(
            pending
                .into_iter()
                .map(|(meal, recipe)| self.attach_image(meal, recipe)),
        )
        .buffered(concurrency)
        .collect::<Vec<_>>()
        .await
        .into_iter();

        counts
            .into_iter()
            .zip(query_degradations)
            .map(|(count, query_degradation)| {
                let query_failed = query_degradation.is_some();
                let mut degradations: Vec<Degradation> =
                    query_degradation.into_iter().collect();
                let recipes = enriched
                    .by_ref()
                    .take(count)
                    .map(|(recipe, degradation)| {
                        degradations.extend(degradation);
                        recipe
                    })
                    .collect();
                (recipes, degradations, query_failed)
            })
            .collect()
    }

    async fn query_recipes(
        &self,
        meal: Option<MealName>,
        query: RecommendationQuery,
    ) -> (Option<MealName>, Vec<RecipeResult>, Option<Degradation>) {
        let outcome = call_with_timeout(
            service_names::RECOMMENDER,
            "query",
            self.config.recommender_timeout,
            self.recommender.query(&query),
        )
        .await;

        match outcome {
            Ok(candidates) => {
                if candidates.is_empty() {
                    debug!(meal = ?meal, "Recommender returned no matches");
                }
                let recipes = candidates
                    .into_iter()
                    .take(query.neighbors)
                    .map(|candidate| {
                        sanitize_candidate(candidate, &self.config.placeholder_image_url)
                    })
                    .collect();
                (meal, recipes, None)
            }
            Err(error) => {
                warn!(meal = ?meal, error = %error, "Recommender call degraded to empty result");
                (
                    meal,
                    Vec::new(),
                    Some(Degradation::from_error(
                        Collaborator::Recommender,
                        meal,
                        None,
                        &error,
                    )),
                )
            }
        }
    }

    async fn attach_image(
        &self,
        meal: Option<MealName>,
        mut recipe: RecipeResult,
    ) -> (RecipeResult, Option<Degradation>) {
        let outcome = call_with_timeout(
            service_names::IMAGE_LOOKUP,
            "lookup",
            self.config.image_lookup_timeout,
            self.image_lookup.lookup(&recipe.name),
        )
        .await;

        match outcome {
            Ok(Some(link)) => {
                recipe.image_link = link;
                (recipe, None)
            }
            Ok(None) => (recipe, None),
            Err(error) => {
                let degradation = Degradation::from_error(
                    Collaborator::ImageLookup,
                    meal,
                    Some(recipe.name.clone()),
                    &error,
                );
                (recipe, Some(degradation))
            }
        }
    }
}

fn invalid_nutrition_config(error: ConfigError) -> AppError {
    AppError::new(
        ErrorCode::ConfigInvalid,
        format!("Invalid nutrition configuration: {error}"),
    )
    .with_source(error)
}
