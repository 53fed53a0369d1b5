// ABOUTME: Environment configuration management for collaborator endpoints and limits
// ABOUTME: Parses env vars into typed configs and validates URLs and numeric bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `RECOMMENDER_URL` | unset |
//! | `RECOMMENDER_TIMEOUT_SECS` | 30 |
//! | `IMAGE_LOOKUP_URL_TEMPLATE` | unset |
//! | `IMAGE_LOOKUP_TIMEOUT_SECS` | 10 |
//! | `VISION_TIMEOUT_SECS` | 60 |
//! | `RECOMMENDATION_NEIGHBORS` | 5 |
//! | `ORCHESTRATOR_MAX_CONCURRENCY` | 4 |
//! | `PLACEHOLDER_IMAGE_URL` | placeholder image |
//! | `NUTRITION_CONFIG_PATH` | unset (built-in defaults) |

use crate::constants::recommendation::{DEFAULT_NEIGHBORS, PLACEHOLDER_IMAGE_URL};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::NutritionConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Default recommender request timeout in seconds
pub const DEFAULT_RECOMMENDER_TIMEOUT_SECS: u64 = 30;
/// Default image lookup timeout in seconds
pub const DEFAULT_IMAGE_LOOKUP_TIMEOUT_SECS: u64 = 10;
/// Default vision analysis timeout in seconds
pub const DEFAULT_VISION_TIMEOUT_SECS: u64 = 60;
/// Default number of concurrent collaborator calls per request
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Placeholder that `IMAGE_LOOKUP_URL_TEMPLATE` must contain
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Recipe recommender endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Base URL of the recommender service (`/predict/` is appended)
    pub base_url: Option<Url>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl RecommenderConfig {
    /// Load recommender configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `RECOMMENDER_URL` is not a valid URL
    pub fn from_env() -> AppResult<Self> {
        let base_url = env::var("RECOMMENDER_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_url("RECOMMENDER_URL", &value))
            .transpose()?;
        Ok(Self {
            base_url,
            timeout_secs: env_parse_or("RECOMMENDER_TIMEOUT_SECS", DEFAULT_RECOMMENDER_TIMEOUT_SECS),
        })
    }

    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Recipe image lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageLookupConfig {
    /// URL template containing `{name}`, e.g. `https://images.example/lookup?q={name}`
    pub url_template: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ImageLookupConfig {
    /// Load image lookup configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the template lacks `{name}` or is not a valid URL
    pub fn from_env() -> AppResult<Self> {
        let url_template = env::var("IMAGE_LOOKUP_URL_TEMPLATE")
            .ok()
            .filter(|value| !value.trim().is_empty());
        if let Some(template) = &url_template {
            validate_url_template("IMAGE_LOOKUP_URL_TEMPLATE", template)?;
        }
        Ok(Self {
            url_template,
            timeout_secs: env_parse_or(
                "IMAGE_LOOKUP_TIMEOUT_SECS",
                DEFAULT_IMAGE_LOOKUP_TIMEOUT_SECS,
            ),
        })
    }

    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Vision analyzer limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisionConfig {
    /// Per-image timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_VISION_TIMEOUT_SECS,
        }
    }
}

impl VisionConfig {
    /// Load vision configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env_parse_or("VISION_TIMEOUT_SECS", DEFAULT_VISION_TIMEOUT_SECS),
        }
    }

    /// Per-image timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the timeout is positive
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming `VISION_TIMEOUT_SECS`
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_secs == 0 {
            return Err(invalid_setting(
                "VISION_TIMEOUT_SECS",
                "Vision timeout must be at least 1 second",
            ));
        }
        Ok(())
    }
}

/// Limits and defaults applied by the recommendation orchestrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Recipes requested per meal
    pub neighbors: usize,
    /// Maximum in-flight collaborator calls per stage
    pub max_concurrency: usize,
    /// Recommender call timeout
    pub recommender_timeout: Duration,
    /// Image lookup call timeout
    pub image_lookup_timeout: Duration,
    /// Image used when no picture is available
    pub placeholder_image_url: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            recommender_timeout: Duration::from_secs(DEFAULT_RECOMMENDER_TIMEOUT_SECS),
            image_lookup_timeout: Duration::from_secs(DEFAULT_IMAGE_LOOKUP_TIMEOUT_SECS),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_owned(),
        }
    }
}

impl OrchestratorConfig {
    /// Check that counts and timeouts are positive and the placeholder is a URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending setting
    pub fn validate(&self) -> AppResult<()> {
        if self.neighbors == 0 {
            return Err(invalid_setting(
                "RECOMMENDATION_NEIGHBORS",
                "Recommendation neighbors must be at least 1",
            ));
        }
        if self.max_concurrency == 0 {
            return Err(invalid_setting(
                "ORCHESTRATOR_MAX_CONCURRENCY",
                "Orchestrator concurrency must be at least 1",
            ));
        }
        if self.recommender_timeout.is_zero() {
            return Err(invalid_setting(
                "RECOMMENDER_TIMEOUT_SECS",
                "Recommender timeout must be positive",
            ));
        }
        if self.image_lookup_timeout.is_zero() {
            return Err(invalid_setting(
                "IMAGE_LOOKUP_TIMEOUT_SECS",
                "Image lookup timeout must be positive",
            ));
        }
        parse_url("PLACEHOLDER_IMAGE_URL", &self.placeholder_image_url)?;
        Ok(())
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Recommender endpoint
    pub recommender: RecommenderConfig,
    /// Image lookup endpoint
    pub image_lookup: ImageLookupConfig,
    /// Vision analyzer limits
    pub vision: VisionConfig,
    /// Orchestration limits
    pub orchestrator: OrchestratorConfig,
    /// Optional JSON file overriding algorithm constants
    pub nutrition_config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a URL is malformed or a count or timeout is zero
    pub fn from_env() -> AppResult<Self> {
        let recommender = RecommenderConfig::from_env()?;
        let image_lookup = ImageLookupConfig::from_env()?;
        let orchestrator = OrchestratorConfig {
            neighbors: env_parse_or("RECOMMENDATION_NEIGHBORS", DEFAULT_NEIGHBORS),
            max_concurrency: env_parse_or("ORCHESTRATOR_MAX_CONCURRENCY", DEFAULT_MAX_CONCURRENCY),
            recommender_timeout: recommender.timeout(),
            image_lookup_timeout: image_lookup.timeout(),
            placeholder_image_url: env::var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|_| PLACEHOLDER_IMAGE_URL.to_owned()),
        };
        orchestrator.validate()?;
        let vision = VisionConfig::from_env();
        vision.validate()?;

        let config = Self {
            recommender,
            image_lookup,
            vision,
            orchestrator,
            nutrition_config_path: env::var("NUTRITION_CONFIG_PATH").ok().map(PathBuf::from),
        };
        config.log_summary();
        Ok(config)
    }

    /// Algorithm constants from `NUTRITION_CONFIG_PATH`, or the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read, parsed, or validated
    pub fn load_nutrition_config(&self) -> AppResult<NutritionConfig> {
        let Some(path) = &self.nutrition_config_path else {
            return Ok(NutritionConfig::default());
        };
        let document = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "Failed to read nutrition config {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;
        NutritionConfig::from_json(&document).map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid nutrition config {}: {e}", path.display()),
            )
            .with_source(e)
        })
    }

    fn log_summary(&self) {
        info!(
            recommender.configured = self.recommender.base_url.is_some(),
            recommender.timeout_secs = self.recommender.timeout_secs,
            image_lookup.configured = self.image_lookup.url_template.is_some(),
            orchestrator.neighbors = self.orchestrator.neighbors,
            orchestrator.max_concurrency = self.orchestrator.max_concurrency,
            "Configuration loaded"
        );
    }
}

/// Parse an environment variable, falling back to `default` when unset or malformed
fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn invalid_setting(key: &str, message: impl Into<String>) -> AppError {
    AppError::new(ErrorCode::ConfigInvalid, message).with_details(json!({ "field": key }))
}

fn parse_url(key: &str, value: &str) -> AppResult<Url> {
    Url::parse(value.trim()).map_err(|e| {
        invalid_setting(key, format!("{key} is not a valid URL ({value}): {e}")).with_source(e)
    })
}

fn validate_url_template(key: &str, template: &str) -> AppResult<()> {
    if !template.contains(NAME_PLACEHOLDER) {
        return Err(invalid_setting(
            key,
            format!("{key} must contain the {NAME_PLACEHOLDER} placeholder"),
        ));
    }
    parse_url(key, &template.replace(NAME_PLACEHOLDER, "recipe")).map(|_| ())
}
