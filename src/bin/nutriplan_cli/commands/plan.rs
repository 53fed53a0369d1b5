// ABOUTME: Planning commands for nutriplan-cli
// ABOUTME: Handles calculate, recommend, and custom operations against the configured recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use anyhow::{anyhow, Context, Result};
use nutriplan::config::environment::ServerConfig;
use nutriplan::external::{HttpImageLookup, HttpRecommender, ImageLookup, NoImageLookup, Recommender};
use nutriplan::intelligence::{
    calorie_plans, meal_calories, BmiResult, CaloriePlan, EnergyProfile,
};
use nutriplan::models::{FoodType, MealName, NutritionVector, PersonProfile, ProfileRequest};
use nutriplan::recommendations::{
    CustomRecommendationRequest, PlanSession, RecommendationOrchestrator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::{
    display_custom_recommendation, display_diet_recommendation, display_energy_summary,
    display_meal_selection, print_json,
};

/// Energy figures for a profile
#[derive(Debug, Serialize)]
pub struct EnergySummary {
    pub bmi: BmiResult,
    pub energy: EnergyProfile,
    pub calorie_plans: Vec<CaloriePlan>,
    pub meal_calories: Vec<(MealName, f64)>,
}

/// Show BMI, BMR, TDEE, calorie plans, and per-meal calories
pub fn calculate(request: ProfileRequest, json: bool) -> Result<()> {
    let profile = PersonProfile::try_from(request)?;
    let nutrition = ServerConfig::from_env()?.load_nutrition_config()?;

    let energy = EnergyProfile::for_person(&profile, &nutrition)?;
    let summary = EnergySummary {
        bmi: BmiResult::from_measurements(profile.weight_kg, profile.height_cm)?,
        calorie_plans: calorie_plans(energy.tdee),
        meal_calories: meal_calories(energy.plan_calories, profile.meals_per_day),
        energy,
    };

    if json {
        print_json(&summary)
    } else {
        display_energy_summary(&summary);
        Ok(())
    }
}

/// Recommend recipes for every meal, optionally summarizing chosen recipes
pub async fn recommend(
    request: ProfileRequest,
    seed: Option<u64>,
    choices: &[String],
    json: bool,
) -> Result<()> {
    let profile = PersonProfile::try_from(request)?;
    let orchestrator = build_orchestrator(&ServerConfig::from_env()?)?;
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut session = PlanSession::new(profile)?;
    let recommendation = session.generate(&orchestrator, &mut rng).await?;
    info!(
        request_id = %recommendation.request_id,
        degraded = recommendation.degraded,
        "Recommendation ready"
    );
    if json {
        print_json(recommendation)?;
    } else {
        display_diet_recommendation(recommendation);
    }

    if !choices.is_empty() {
        let summary = session.select_meals(choices)?;
        if json {
            print_json(&summary)?;
        } else {
            display_meal_selection(&summary);
        }
    }
    Ok(())
}

/// Recommend recipes closest to an explicit nutrition vector
pub async fn custom(
    target: [f64; 9],
    ingredients: String,
    count: usize,
    food_type: Option<&str>,
    json: bool,
) -> Result<()> {
    let request = CustomRecommendationRequest {
        nutrition_target: NutritionVector::validated(target)?,
        ingredients_text: ingredients,
        count,
        food_type: food_type.map(str::parse::<FoodType>).transpose()?,
    };
    let orchestrator = build_orchestrator(&ServerConfig::from_env()?)?;
    let recommendation = orchestrator.recommend_custom(&request).await?;

    if json {
        print_json(&recommendation)
    } else {
        display_custom_recommendation(&recommendation);
        Ok(())
    }
}

fn build_orchestrator(config: &ServerConfig) -> Result<RecommendationOrchestrator> {
    let base_url = config
        .recommender
        .base_url
        .as_ref()
        .ok_or_else(|| anyhow!("RECOMMENDER_URL must be set to request recommendations"))?;
    let recommender: Arc<dyn Recommender> = Arc::new(
        HttpRecommender::new(base_url, config.recommender.timeout())
            .context("Failed to create recommender client")?,
    );

    let image_lookup: Arc<dyn ImageLookup> = match &config.image_lookup.url_template {
        Some(template) => Arc::new(
            HttpImageLookup::new(template.clone(), config.image_lookup.timeout())
                .context("Failed to create image lookup client")?,
        ),
        None => Arc::new(NoImageLookup),
    };

    Ok(RecommendationOrchestrator::new(
        recommender,
        image_lookup,
        config.load_nutrition_config()?,
        config.orchestrator.clone(),
    )?)
}
