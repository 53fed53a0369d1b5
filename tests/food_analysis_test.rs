// ABOUTME: Integration tests for food image analysis reports
// ABOUTME: Covers item scaling, rounding, grand totals, classification, and could-not-analyze outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, FailingVisionAnalyzer, StaticVisionAnalyzer};
use nutriplan::analysis::{FoodAnalysisOutcome, FoodAnalysisService, NO_ITEMS_REASON};
use nutriplan::external::RecordedReplyAnalyzer;
use nutriplan::intelligence::HealthClassifier;
use nutriplan::models::{AnalyzedFoodItem, HealthStatus, NutritionVector, WeightImpact};
use std::sync::Arc;
use std::time::Duration;

fn banana() -> AnalyzedFoodItem {
    AnalyzedFoodItem {
        item_name: "Banana".to_owned(),
        quantity: 2.0,
        serving_size: "1 medium".to_owned(),
        nutrition_per_unit: NutritionVector {
            calories: 105.0,
            fat_content: 0.39,
            fiber_content: 3.1,
            sugar_content: 14.44,
            ..NutritionVector::ZERO
        },
    }
}

fn toast() -> AnalyzedFoodItem {
    AnalyzedFoodItem {
        item_name: "Toast".to_owned(),
        quantity: 1.0,
        serving_size: "1 slice".to_owned(),
        nutrition_per_unit: NutritionVector {
            calories: 150.04,
            fat_content: 2.0,
            sugar_content: 3.0,
            ..NutritionVector::ZERO
        },
    }
}

fn service(items: Vec<AnalyzedFoodItem>) -> FoodAnalysisService {
    FoodAnalysisService::new(
        Arc::new(StaticVisionAnalyzer { items }),
        HealthClassifier::default(),
        Duration::from_secs(5),
    )
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_items_are_scaled_rounded_and_classified() {
    init_test_logging();
    let outcome = service(vec![banana(), toast()]).analyze(b"jpeg").await;
    let report = outcome.report().unwrap();

    assert_eq!(report.items.len(), 2);
    let banana = &report.items[0];
    assert_eq!(banana.item_name, "Banana");
    assert!((banana.total_nutrition.calories - 210.0).abs() < 1e-9);
    assert!((banana.total_nutrition.sugar_content - 28.9).abs() < 1e-9);
    assert!((banana.nutrition_per_unit.fat_content - 0.4).abs() < 1e-9);
    assert_eq!(banana.classification.health_status, HealthStatus::Moderate);
    assert_eq!(
        banana.classification.weight_impact,
        WeightImpact::SupportsWeightLoss
    );

    let toast = &report.items[1];
    assert!((toast.nutrition_per_unit.calories - 150.0).abs() < 1e-9);
    assert_eq!(toast.classification.health_status, HealthStatus::Healthy);
}

#[tokio::test]
async fn test_grand_total_sums_rounded_item_totals() {
    init_test_logging();
    let outcome = service(vec![banana(), toast()]).analyze(b"jpeg").await;
    let report = outcome.report().unwrap();

    assert!((report.grand_total.calories - 360.0).abs() < 1e-9);
    assert!((report.grand_total.sugar_content - 31.9).abs() < 1e-9);
    assert!((report.grand_total.fat_content - 2.8).abs() < 1e-9);
    assert!((report.grand_total.fiber_content - 6.2).abs() < 1e-9);
    assert_eq!(report.overall.health_status, HealthStatus::Moderate);
    assert_eq!(
        report.overall.weight_impact,
        WeightImpact::SupportsWeightMaintenance
    );
}

#[test]
fn test_report_serializes_with_status_tag_and_flat_classification() {
    let outcome = service(Vec::new()).enrich(&[toast()]);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "analyzed");
    assert_eq!(json["items"][0]["health_status"], "Healthy");
    assert_eq!(json["items"][0]["health_color"], "green");
    assert_eq!(json["grand_total"]["Calories"], 150.0);
}

// ============================================================================
// Could Not Analyze
// ============================================================================

#[tokio::test]
async fn test_no_detected_items_could_not_analyze() {
    init_test_logging();
    let outcome = service(Vec::new()).analyze(b"jpeg").await;
    assert_eq!(
        outcome,
        FoodAnalysisOutcome::CouldNotAnalyze {
            reason: NO_ITEMS_REASON.to_owned()
        }
    );
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "could_not_analyze");
}

#[tokio::test]
async fn test_analyzer_failure_could_not_analyze() {
    init_test_logging();
    let service = FoodAnalysisService::new(
        Arc::new(FailingVisionAnalyzer),
        HealthClassifier::default(),
        Duration::from_secs(5),
    );
    match service.analyze(b"jpeg").await {
        FoodAnalysisOutcome::CouldNotAnalyze { reason } => {
            assert!(reason.contains("quota exceeded"));
        }
        FoodAnalysisOutcome::Analyzed(report) => panic!("unexpected report: {report:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_reply_could_not_analyze() {
    init_test_logging();
    let service = FoodAnalysisService::new(
        Arc::new(RecordedReplyAnalyzer::new("I see a tasty sandwich!")),
        HealthClassifier::default(),
        Duration::from_secs(5),
    );
    match service.analyze(b"jpeg").await {
        FoodAnalysisOutcome::CouldNotAnalyze { reason } => {
            assert!(reason.contains("not valid JSON"));
        }
        FoodAnalysisOutcome::Analyzed(report) => panic!("unexpected report: {report:?}"),
    }
}

#[tokio::test]
async fn test_recorded_reply_is_analyzed() {
    init_test_logging();
    let reply = r#"```json
[{"item_name": "Apple", "quantity": 1, "serving_size": "1 medium",
  "nutrition_per_unit": {"Calories": 95, "SugarContent": 19, "FiberContent": 4.4}}]
```"#;
    let service = FoodAnalysisService::new(
        Arc::new(RecordedReplyAnalyzer::new(reply)),
        HealthClassifier::default(),
        Duration::from_secs(5),
    );
    let outcome = service.analyze(b"jpeg").await;
    let report = outcome.report().unwrap();
    assert_eq!(report.items[0].item_name, "Apple");
    assert_eq!(report.overall.health_status, HealthStatus::Healthy);
    assert_eq!(
        report.overall.weight_impact,
        WeightImpact::SupportsWeightMaintenance
    );
}
