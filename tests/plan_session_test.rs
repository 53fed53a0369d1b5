// ABOUTME: Integration tests for interactive plan sessions and meal selection totals
// ABOUTME: Covers generation, aggregation of chosen recipes, plan overrun, and selection errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{candidate, init_test_logging, orchestrator, sample_profile, StaticRecommender};
use nutriplan::errors::ErrorCode;
use nutriplan::external::NoImageLookup;
use nutriplan::models::{MealName, PersonProfile};
use nutriplan::recommendations::{PlanSession, RecommendationOrchestrator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

fn menu_orchestrator() -> RecommendationOrchestrator {
    orchestrator(
        Arc::new(StaticRecommender::new(vec![
            candidate("Light Bowl", 500.0),
            candidate("Hearty Thali", 900.0),
        ])),
        Arc::new(NoImageLookup),
    )
}

async fn generated_session() -> PlanSession {
    init_test_logging();
    let mut session = PlanSession::new(sample_profile()).unwrap();
    session
        .generate(&menu_orchestrator(), &mut ChaCha8Rng::seed_from_u64(11))
        .await
        .unwrap();
    session
}

#[test]
fn test_session_rejects_invalid_profile() {
    let profile = PersonProfile {
        age: 130,
        ..sample_profile()
    };
    let error = PlanSession::new(profile).unwrap_err();
    assert_eq!(error.field(), Some("age"));
}

#[test]
fn test_selection_before_generation_is_rejected() {
    let session = PlanSession::new(sample_profile()).unwrap();
    assert!(session.recommendation().is_none());
    let error = session.select_meals(&["Light Bowl"]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_generate_stores_recommendation() {
    let session = generated_session().await;
    let recommendation = session.recommendation().unwrap();
    assert_eq!(recommendation.meals.len(), 3);
    assert_eq!(recommendation.recipe_count(), 6);
}

#[tokio::test]
async fn test_selection_within_plan() {
    let session = generated_session().await;
    let summary = session
        .select_meals(&["Light Bowl", " Light Bowl ", "Hearty Thali"])
        .unwrap();

    assert!((summary.totals.calories - 1900.0).abs() < 1e-9);
    assert!((summary.totals.protein_content - 36.0).abs() < 1e-9);
    assert_eq!(summary.plan_calories, 1979);
    assert!(!summary.exceeds_plan);
    assert_eq!(summary.choices[1].meal, MealName::Lunch);
    assert_eq!(summary.choices[1].recipe_name, "Light Bowl");
}

#[tokio::test]
async fn test_selection_over_plan_is_flagged() {
    let session = generated_session().await;
    let summary = session
        .select_meals(&["Hearty Thali", "Hearty Thali", "Light Bowl"])
        .unwrap();
    assert!((summary.totals.calories - 2300.0).abs() < 1e-9);
    assert!(summary.exceeds_plan);
}

#[tokio::test]
async fn test_wrong_choice_count_is_rejected() {
    let session = generated_session().await;
    let error = session.select_meals(&["Light Bowl"]).unwrap_err();
    assert_eq!(error.field(), Some("choices"));
}

#[tokio::test]
async fn test_unknown_recipe_is_rejected() {
    let session = generated_session().await;
    let error = session
        .select_meals(&["Light Bowl", "Pizza", "Light Bowl"])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.field(), Some("choices"));
    assert!(error.message.contains("Pizza"));
}
