// ABOUTME: Tests for environment-driven configuration and nutrition config file loading
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::environment::{
    DEFAULT_IMAGE_LOOKUP_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENCY, DEFAULT_RECOMMENDER_TIMEOUT_SECS,
    DEFAULT_VISION_TIMEOUT_SECS,
};
use nutriplan::config::{OrchestratorConfig, ServerConfig};
use nutriplan::constants::recommendation::{DEFAULT_NEIGHBORS, PLACEHOLDER_IMAGE_URL};
use nutriplan::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const ALL_KEYS: [&str; 10] = [
    "RECOMMENDER_URL",
    "RECOMMENDER_TIMEOUT_SECS",
    "IMAGE_LOOKUP_URL_TEMPLATE",
    "IMAGE_LOOKUP_TIMEOUT_SECS",
    "VISION_TIMEOUT_SECS",
    "RECOMMENDATION_NEIGHBORS",
    "ORCHESTRATOR_MAX_CONCURRENCY",
    "PLACEHOLDER_IMAGE_URL",
    "NUTRITION_CONFIG_PATH",
    "RUST_LOG",
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert!(config.recommender.base_url.is_none());
    assert_eq!(config.recommender.timeout_secs, DEFAULT_RECOMMENDER_TIMEOUT_SECS);
    assert!(config.image_lookup.url_template.is_none());
    assert_eq!(config.vision.timeout_secs, DEFAULT_VISION_TIMEOUT_SECS);
    assert_eq!(config.orchestrator.neighbors, DEFAULT_NEIGHBORS);
    assert_eq!(config.orchestrator.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    assert_eq!(
        config.orchestrator.image_lookup_timeout,
        Duration::from_secs(DEFAULT_IMAGE_LOOKUP_TIMEOUT_SECS)
    );
    assert_eq!(config.orchestrator.placeholder_image_url, PLACEHOLDER_IMAGE_URL);
    assert!(config.nutrition_config_path.is_none());
}

#[test]
fn test_default_orchestrator_config_is_valid() {
    assert!(OrchestratorConfig::default().validate().is_ok());
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("RECOMMENDER_URL", "http://localhost:8080/api");
    env::set_var("RECOMMENDER_TIMEOUT_SECS", "12");
    env::set_var(
        "IMAGE_LOOKUP_URL_TEMPLATE",
        "https://images.test/search?q={name}",
    );
    env::set_var("VISION_TIMEOUT_SECS", "90");
    env::set_var("RECOMMENDATION_NEIGHBORS", "8");
    env::set_var("ORCHESTRATOR_MAX_CONCURRENCY", "2");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.recommender.base_url.as_ref().map(url::Url::as_str),
        Some("http://localhost:8080/api")
    );
    assert_eq!(config.orchestrator.recommender_timeout, Duration::from_secs(12));
    assert_eq!(
        config.image_lookup.url_template.as_deref(),
        Some("https://images.test/search?q={name}")
    );
    assert_eq!(config.vision.timeout(), Duration::from_secs(90));
    assert_eq!(config.orchestrator.neighbors, 8);
    assert_eq!(config.orchestrator.max_concurrency, 2);
}

#[test]
#[serial]
fn test_malformed_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var("RECOMMENDER_TIMEOUT_SECS", "soon");
    env::set_var("RECOMMENDATION_NEIGHBORS", "-3");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.recommender.timeout_secs, DEFAULT_RECOMMENDER_TIMEOUT_SECS);
    assert_eq!(config.orchestrator.neighbors, DEFAULT_NEIGHBORS);
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
#[serial]
fn test_invalid_recommender_url_is_rejected() {
    clear_env();
    env::set_var("RECOMMENDER_URL", "not a url");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.field(), Some("RECOMMENDER_URL"));
}

#[test]
#[serial]
fn test_template_without_placeholder_is_rejected() {
    clear_env();
    env::set_var("IMAGE_LOOKUP_URL_TEMPLATE", "https://images.test/search");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.field(), Some("IMAGE_LOOKUP_URL_TEMPLATE"));
}

#[test]
#[serial]
fn test_zero_neighbors_is_rejected() {
    clear_env();
    env::set_var("RECOMMENDATION_NEIGHBORS", "0");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.field(), Some("RECOMMENDATION_NEIGHBORS"));
}

#[test]
#[serial]
fn test_zero_timeouts_are_rejected() {
    for key in [
        "RECOMMENDER_TIMEOUT_SECS",
        "IMAGE_LOOKUP_TIMEOUT_SECS",
        "VISION_TIMEOUT_SECS",
    ] {
        clear_env();
        env::set_var(key, "0");
        let error = ServerConfig::from_env().unwrap_err();
        clear_env();

        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert_eq!(error.field(), Some(key));
    }
}

#[test]
fn test_zero_duration_orchestrator_config_is_rejected() {
    let config = OrchestratorConfig {
        image_lookup_timeout: Duration::ZERO,
        ..OrchestratorConfig::default()
    };
    let error = config.validate().unwrap_err();
    assert_eq!(error.field(), Some("IMAGE_LOOKUP_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_invalid_placeholder_is_rejected() {
    clear_env();
    env::set_var("PLACEHOLDER_IMAGE_URL", "placeholder.png");
    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.field(), Some("PLACEHOLDER_IMAGE_URL"));
}

// ============================================================================
// Nutrition Config File
// ============================================================================

#[test]
#[serial]
fn test_nutrition_config_defaults_without_path() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();
    let nutrition = config.load_nutrition_config().unwrap();
    assert!((nutrition.activity_factors.sedentary - 1.2).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_nutrition_config_file_overrides_sections() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"bmr": {{"msj_weight_coef": 10.0, "msj_height_coef": 6.25, "msj_age_coef": -5.0,
             "msj_male_constant": 5.0, "msj_female_constant": -150.0}}}}"#
    )
    .unwrap();
    env::set_var("NUTRITION_CONFIG_PATH", file.path());

    let config = ServerConfig::from_env().unwrap();
    clear_env();
    let nutrition = config.load_nutrition_config().unwrap();

    assert!((nutrition.bmr.msj_female_constant + 150.0).abs() < f64::EPSILON);
    assert!((nutrition.health_thresholds.healthy_max_sugar_g - 25.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_malformed_nutrition_config_file_is_rejected() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    env::set_var("NUTRITION_CONFIG_PATH", file.path());

    let config = ServerConfig::from_env().unwrap();
    clear_env();
    let error = config.load_nutrition_config().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_missing_nutrition_config_file_is_an_error() {
    clear_env();
    env::set_var("NUTRITION_CONFIG_PATH", "/nonexistent/nutriplan/config.json");
    let config = ServerConfig::from_env().unwrap();
    clear_env();
    assert!(config.load_nutrition_config().is_err());
}
