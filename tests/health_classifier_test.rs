// ABOUTME: Tests for rule-based health and weight-impact classification
// ABOUTME: Covers strict threshold boundaries, quantity scaling, and threshold validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::intelligence::config::HealthThresholdsConfig;
use nutriplan::intelligence::HealthClassifier;
use nutriplan::models::{HealthStatus, NutritionVector, StatusColor, WeightImpact};

fn vector(calories: f64, fat: f64, sugar: f64, fiber: f64) -> NutritionVector {
    NutritionVector {
        calories,
        fat_content: fat,
        sugar_content: sugar,
        fiber_content: fiber,
        ..NutritionVector::ZERO
    }
}

// ============================================================================
// Health Status
// ============================================================================

#[test]
fn test_low_values_are_healthy() {
    let classifier = HealthClassifier::default();
    let result = classifier.classify(&vector(400.0, 10.0, 24.99, 2.0), 1.0);
    assert_eq!(result.health_status, HealthStatus::Healthy);
    assert_eq!(result.health_color, StatusColor::Green);
}

#[test]
fn test_values_just_below_every_threshold_are_healthy() {
    let classifier = HealthClassifier::default();
    let healthy = classifier.classify(&vector(499.0, 19.0, 24.0, 0.0), 1.0);
    assert_eq!(healthy.health_status, HealthStatus::Healthy);

    let sugar_at_limit = classifier.classify(&vector(499.0, 19.0, 25.0, 0.0), 1.0);
    assert_ne!(sugar_at_limit.health_status, HealthStatus::Healthy);
}

#[test]
fn test_sugar_at_threshold_is_moderate() {
    let classifier = HealthClassifier::default();
    let result = classifier.classify(&vector(400.0, 10.0, 25.0, 2.0), 1.0);
    assert_eq!(result.health_status, HealthStatus::Moderate);
    assert_eq!(result.health_color, StatusColor::Yellow);
}

#[test]
fn test_fat_at_threshold_is_moderate() {
    let classifier = HealthClassifier::default();
    let result = classifier.classify(&vector(400.0, 20.0, 5.0, 2.0), 1.0);
    assert_eq!(result.health_status, HealthStatus::Moderate);
}

#[test]
fn test_calorie_boundaries() {
    let classifier = HealthClassifier::default();
    assert_eq!(
        classifier
            .classify(&vector(500.0, 5.0, 5.0, 0.0), 1.0)
            .health_status,
        HealthStatus::Moderate
    );
    assert_eq!(
        classifier
            .classify(&vector(999.9, 5.0, 5.0, 0.0), 1.0)
            .health_status,
        HealthStatus::Moderate
    );
    let result = classifier.classify(&vector(1000.0, 5.0, 5.0, 0.0), 1.0);
    assert_eq!(result.health_status, HealthStatus::Unhealthy);
    assert_eq!(result.health_color, StatusColor::Red);
}

#[test]
fn test_high_sugar_is_unhealthy() {
    let classifier = HealthClassifier::default();
    let result = classifier.classify(&vector(200.0, 5.0, 50.0, 0.0), 1.0);
    assert_eq!(result.health_status, HealthStatus::Unhealthy);
}

// ============================================================================
// Weight Impact
// ============================================================================

#[test]
fn test_low_calorie_high_fiber_supports_weight_loss() {
    let classifier = HealthClassifier::default();
    let result = classifier.classify(&vector(250.0, 3.0, 4.0, 6.0), 1.0);
    assert_eq!(result.weight_impact, WeightImpact::SupportsWeightLoss);
}

#[test]
fn test_weight_loss_calorie_limit_is_exclusive() {
    let classifier = HealthClassifier::default();
    let below = classifier.classify(&vector(299.0, 3.0, 4.0, 6.0), 1.0);
    assert_eq!(below.weight_impact, WeightImpact::SupportsWeightLoss);

    let at_limit = classifier.classify(&vector(300.0, 3.0, 4.0, 6.0), 1.0);
    assert_eq!(
        at_limit.weight_impact,
        WeightImpact::SupportsWeightMaintenance
    );
}

#[test]
fn test_weight_loss_requires_fiber_above_threshold() {
    let classifier = HealthClassifier::default();
    let at_fiber = classifier.classify(&vector(250.0, 3.0, 4.0, 5.0), 1.0);
    assert_eq!(at_fiber.weight_impact, WeightImpact::SupportsWeightMaintenance);

    let at_calories = classifier.classify(&vector(300.0, 3.0, 4.0, 8.0), 1.0);
    assert_eq!(
        at_calories.weight_impact,
        WeightImpact::SupportsWeightMaintenance
    );
}

#[test]
fn test_calorie_dense_supports_weight_gain() {
    let classifier = HealthClassifier::default();
    let at_threshold = classifier.classify(&vector(600.0, 3.0, 4.0, 0.0), 1.0);
    assert_eq!(
        at_threshold.weight_impact,
        WeightImpact::SupportsWeightMaintenance
    );

    let above = classifier.classify(&vector(600.5, 3.0, 4.0, 0.0), 1.0);
    assert_eq!(above.weight_impact, WeightImpact::SupportsWeightGain);
}

// ============================================================================
// Quantity Scaling
// ============================================================================

#[test]
fn test_quantity_scales_before_classification() {
    let classifier = HealthClassifier::default();
    let per_unit = vector(280.0, 12.0, 15.0, 6.0);

    let single = classifier.classify(&per_unit, 1.0);
    assert_eq!(single.health_status, HealthStatus::Healthy);
    assert_eq!(single.weight_impact, WeightImpact::SupportsWeightLoss);

    let triple = classifier.classify(&per_unit, 3.0);
    assert_eq!(triple.health_status, HealthStatus::Moderate);
    assert_eq!(triple.weight_impact, WeightImpact::SupportsWeightGain);
}

// ============================================================================
// Threshold Configuration
// ============================================================================

#[test]
fn test_custom_thresholds_apply() {
    let thresholds = HealthThresholdsConfig {
        healthy_max_calories: 200.0,
        ..HealthThresholdsConfig::default()
    };
    let classifier = HealthClassifier::new(thresholds).unwrap();
    let result = classifier.classify(&vector(250.0, 3.0, 4.0, 0.0), 1.0);
    assert_eq!(result.health_status, HealthStatus::Moderate);
}

#[test]
fn test_negative_threshold_rejected() {
    let thresholds = HealthThresholdsConfig {
        healthy_max_fat_g: -1.0,
        ..HealthThresholdsConfig::default()
    };
    assert!(HealthClassifier::new(thresholds).is_err());
}

#[test]
fn test_healthy_above_moderate_rejected() {
    let thresholds = HealthThresholdsConfig {
        healthy_max_sugar_g: 60.0,
        ..HealthThresholdsConfig::default()
    };
    assert!(HealthClassifier::new(thresholds).is_err());
}
