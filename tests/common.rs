// ABOUTME: Shared test utilities and mock collaborators for integration tests
// ABOUTME: Provides quiet logging setup, sample profiles, and scripted recommender/image/vision mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriplan`

use async_trait::async_trait;
use nutriplan::config::environment::OrchestratorConfig;
use nutriplan::external::{
    CollaboratorError, ImageLookup, RecommendationQuery, Recommender, VisionAnalyzer,
};
use nutriplan::intelligence::NutritionConfig;
use nutriplan::models::{
    ActivityLevel, AnalyzedFoodItem, FoodType, Gender, MealsPerDay, PersonProfile,
    RecipeCandidate, RecipeNutrients, WeightLossPlan,
};
use nutriplan::recommendations::RecommendationOrchestrator;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30-year-old sedentary male, 70 kg, 175 cm, three meals, maintain weight
pub fn sample_profile() -> PersonProfile {
    PersonProfile {
        age: 30,
        height_cm: 175.0,
        weight_kg: 70.0,
        gender: Gender::Male,
        food_type: FoodType::Veg,
        activity_level: ActivityLevel::Sedentary,
        meals_per_day: MealsPerDay::Three,
        weight_loss_plan: WeightLossPlan::MaintainWeight,
    }
}

/// Recipe row with only a name and calories
pub fn candidate(name: &str, calories: f64) -> RecipeCandidate {
    RecipeCandidate {
        name: name.to_owned(),
        cook_time: Some(10.0),
        recipe_ingredient_parts: vec!["rice".to_owned(), "lentils".to_owned()],
        food_type: Some(FoodType::Veg),
        nutrition: RecipeNutrients {
            calories: Some(calories),
            protein_content: Some(12.0),
            ..RecipeNutrients::default()
        },
        ..RecipeCandidate::default()
    }
}

/// Orchestrator over the given mocks with default limits
pub fn orchestrator(
    recommender: Arc<dyn Recommender>,
    image_lookup: Arc<dyn ImageLookup>,
) -> RecommendationOrchestrator {
    orchestrator_with(recommender, image_lookup, OrchestratorConfig::default())
}

/// Orchestrator over the given mocks with custom limits
pub fn orchestrator_with(
    recommender: Arc<dyn Recommender>,
    image_lookup: Arc<dyn ImageLookup>,
    config: OrchestratorConfig,
) -> RecommendationOrchestrator {
    RecommendationOrchestrator::new(
        recommender,
        image_lookup,
        NutritionConfig::default(),
        config,
    )
    .unwrap()
}

// ============================================================================
// Recommender mocks
// ============================================================================

/// Returns the same candidates for every query and records the queries
#[derive(Default)]
pub struct StaticRecommender {
    candidates: Vec<RecipeCandidate>,
    queries: Mutex<Vec<RecommendationQuery>>,
}

impl StaticRecommender {
    pub fn new(candidates: Vec<RecipeCandidate>) -> Self {
        Self {
            candidates,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<RecommendationQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Recommender for StaticRecommender {
    async fn query(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.candidates.clone())
    }
}

/// Always fails as unavailable
pub struct FailingRecommender;

#[async_trait]
impl Recommender for FailingRecommender {
    async fn query(
        &self,
        _query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError> {
        Err(CollaboratorError::Unavailable {
            service: "recommender",
            message: "connection refused".to_owned(),
        })
    }
}

/// Sleeps before answering with one recipe
pub struct SlowRecommender {
    pub delay: Duration,
}

#[async_trait]
impl Recommender for SlowRecommender {
    async fn query(
        &self,
        _query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError> {
        tokio::time::sleep(self.delay).await;
        Ok(vec![candidate("Too Late Stew", 400.0)])
    }
}

/// Answers with a recipe named after the target calories, finishing queries
/// with larger targets first
pub struct ReverseOrderRecommender;

#[async_trait]
impl Recommender for ReverseOrderRecommender {
    async fn query(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError> {
        let calories = query.nutrition_target.calories;
        let delay_ms = (5000.0 / calories.max(1.0) * 20.0) as u64;
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(vec![candidate(&format!("Recipe {calories:.0}"), calories)])
    }
}

/// Fails only for queries whose calorie target exceeds a threshold
pub struct PartiallyFailingRecommender {
    pub max_calories: f64,
}

#[async_trait]
impl Recommender for PartiallyFailingRecommender {
    async fn query(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError> {
        if query.nutrition_target.calories > self.max_calories {
            return Err(CollaboratorError::InvalidResponse {
                service: "recommender",
                message: "malformed row".to_owned(),
            });
        }
        Ok(vec![candidate("Light Salad", query.nutrition_target.calories)])
    }
}

// ============================================================================
// Image lookup mocks
// ============================================================================

/// Resolves names from a fixed table
#[derive(Default)]
pub struct StaticImageLookup {
    links: HashMap<String, String>,
}

impl StaticImageLookup {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            links: pairs
                .iter()
                .map(|(name, link)| ((*name).to_owned(), (*link).to_owned()))
                .collect(),
        }
    }
}

#[async_trait]
impl ImageLookup for StaticImageLookup {
    async fn lookup(&self, recipe_name: &str) -> Result<Option<String>, CollaboratorError> {
        Ok(self.links.get(recipe_name).cloned())
    }
}

/// Always fails as unavailable
pub struct FailingImageLookup;

#[async_trait]
impl ImageLookup for FailingImageLookup {
    async fn lookup(&self, _recipe_name: &str) -> Result<Option<String>, CollaboratorError> {
        Err(CollaboratorError::Unavailable {
            service: "image_lookup",
            message: "HTTP 503 Service Unavailable".to_owned(),
        })
    }
}

// ============================================================================
// Vision analyzer mocks
// ============================================================================

/// Returns fixed items
pub struct StaticVisionAnalyzer {
    pub items: Vec<AnalyzedFoodItem>,
}

#[async_trait]
impl VisionAnalyzer for StaticVisionAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<Vec<AnalyzedFoodItem>, CollaboratorError> {
        Ok(self.items.clone())
    }
}

/// Always fails as unavailable
pub struct FailingVisionAnalyzer;

#[async_trait]
impl VisionAnalyzer for FailingVisionAnalyzer {
    async fn analyze(&self, _image: &[u8]) -> Result<Vec<AnalyzedFoodItem>, CollaboratorError> {
        Err(CollaboratorError::Unavailable {
            service: "vision_analyzer",
            message: "quota exceeded".to_owned(),
        })
    }
}
