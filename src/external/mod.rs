// ABOUTME: External collaborator boundaries (recommender, image lookup, vision analyzer)
// ABOUTME: Async traits, the shared CollaboratorError, and HTTP adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! External Collaborators
//!
//! The engine never talks to a model directly. Recommendation, image lookup, and
//! vision analysis sit behind `async_trait` interfaces held as `Arc<dyn ...>`, so
//! tests and alternative deployments can swap them freely. Failures are reported
//! as [`CollaboratorError`], which callers degrade on instead of aborting.

pub mod image_client;
pub mod recommender_client;
pub mod vision;

pub use image_client::{HttpImageLookup, NoImageLookup};
pub use recommender_client::{replace_non_finite_tokens, HttpRecommender};
pub use vision::{parse_detected_items, RecordedReplyAnalyzer, VisionParseError};

use crate::errors::{AppError, ErrorCode};
use crate::logging::AppLogger;
use crate::models::{AnalyzedFoodItem, FoodType, NutritionVector, RecipeCandidate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Failure of an external collaborator call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or answered with an error status
    #[error("{service} unavailable: {message}")]
    Unavailable {
        /// Collaborator name
        service: &'static str,
        /// Failure description
        message: String,
    },
    /// The call did not finish within its deadline
    #[error("{service} timed out after {timeout_ms} ms")]
    Timeout {
        /// Collaborator name
        service: &'static str,
        /// Deadline that elapsed
        timeout_ms: u64,
    },
    /// The collaborator answered with data that could not be interpreted
    #[error("{service} returned an invalid response: {message}")]
    InvalidResponse {
        /// Collaborator name
        service: &'static str,
        /// Failure description
        message: String,
    },
}

impl CollaboratorError {
    /// Name of the collaborator that failed
    #[must_use]
    pub const fn service(&self) -> &'static str {
        match self {
            Self::Unavailable { service, .. }
            | Self::Timeout { service, .. }
            | Self::InvalidResponse { service, .. } => service,
        }
    }

    /// Whether the failure was a timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl From<CollaboratorError> for AppError {
    fn from(error: CollaboratorError) -> Self {
        let code = match error {
            CollaboratorError::Unavailable { .. } | CollaboratorError::Timeout { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            CollaboratorError::InvalidResponse { .. } => ErrorCode::ExternalServiceError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// One nearest-neighbor recipe search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    /// Target nutrient vector
    pub nutrition_target: NutritionVector,
    /// Required ingredients (empty means no filter)
    pub ingredients: Vec<String>,
    /// Food-type filter (`None` means no filter)
    pub food_type: Option<FoodType>,
    /// Number of recipes requested
    pub neighbors: usize,
    /// Whether distances should be returned
    pub return_distance: bool,
}

impl RecommendationQuery {
    /// Query without distances
    #[must_use]
    pub const fn new(
        nutrition_target: NutritionVector,
        ingredients: Vec<String>,
        food_type: Option<FoodType>,
        neighbors: usize,
    ) -> Self {
        Self {
            nutrition_target,
            ingredients,
            food_type,
            neighbors,
            return_distance: false,
        }
    }
}

/// Nearest-neighbor recipe recommender
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Recipes closest to the query target; an empty list means no matches
    async fn query(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError>;
}

/// Recipe picture lookup
#[async_trait]
pub trait ImageLookup: Send + Sync {
    /// Image URL for a recipe, or `None` when no picture exists
    async fn lookup(&self, recipe_name: &str) -> Result<Option<String>, CollaboratorError>;
}

/// Vision model that detects food items in an image
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    /// Items detected in the image; an empty list means nothing was recognized
    async fn analyze(&self, image: &[u8]) -> Result<Vec<AnalyzedFoodItem>, CollaboratorError>;
}

/// Await a collaborator call under a deadline and log its outcome
///
/// An elapsed deadline becomes [`CollaboratorError::Timeout`]; the inner future
/// is dropped, which cancels the call.
///
/// # Errors
///
/// Returns the collaborator's own error, or `Timeout` when `timeout` elapses first
pub async fn call_with_timeout<T, F>(
    service: &'static str,
    operation: &str,
    timeout: Duration,
    call: F,
) -> Result<T, CollaboratorError>
where
    F: Future<Output = Result<T, CollaboratorError>>,
{
    let started = Instant::now();
    let result = tokio::time::timeout(timeout, call)
        .await
        .unwrap_or_else(|_| {
            Err(CollaboratorError::Timeout {
                service,
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            })
        });
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let detail = result.as_ref().err().map(ToString::to_string);
    AppLogger::log_collaborator_call(
        service,
        operation,
        result.is_ok(),
        duration_ms,
        detail.as_deref(),
    );
    result
}
