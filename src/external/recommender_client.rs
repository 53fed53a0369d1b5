// ABOUTME: HTTP client for the nearest-neighbor recipe recommender service
// ABOUTME: Posts nutrition targets to /predict/ and tolerates NaN and Infinity in responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Recommender HTTP Client
//!
//! The recommender answers `POST {base}/predict/` with
//! `{"output": [recipe, ...] | null}`. Recipe rows come straight from a
//! dataframe, so unrecorded nutrients may arrive as bare `NaN` tokens, which
//! are not JSON. [`replace_non_finite_tokens`] rewrites them to `null` before
//! parsing.

use super::{CollaboratorError, RecommendationQuery, Recommender};
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::models::{FoodType, RecipeCandidate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;
use tracing::debug;
use url::Url;

const PREDICT_PATH: &str = "predict/";
const NON_FINITE_TOKENS: [&str; 4] = ["-Infinity", "Infinity", "-NaN", "NaN"];

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    nutrition_input: [f64; 9],
    ingredients: &'a [String],
    params: PredictionParams,
    food_type: Option<FoodType>,
}

#[derive(Debug, Serialize)]
struct PredictionParams {
    n_neighbors: usize,
    return_distance: bool,
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    output: Option<Vec<RecipeCandidate>>,
}

/// Recommender reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpRecommender {
    endpoint: Url,
    http_client: reqwest::Client,
    timeout: Duration,
}

impl HttpRecommender {
    /// Create a client for the service rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the predict endpoint cannot be derived
    /// from `base_url` or the HTTP client cannot be built
    pub fn new(base_url: &Url, timeout: Duration) -> AppResult<Self> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(PREDICT_PATH).map_err(|e| {
            AppError::config(format!("Invalid recommender URL {base_url}: {e}")).with_source(e)
        })?;
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to build recommender HTTP client: {e}"))
                    .with_source(e)
            })?;
        Ok(Self {
            endpoint,
            http_client,
            timeout,
        })
    }

    /// Full URL of the predict endpoint
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn transport_error(&self, error: &reqwest::Error) -> CollaboratorError {
        if error.is_timeout() {
            CollaboratorError::Timeout {
                service: service_names::RECOMMENDER,
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            CollaboratorError::Unavailable {
                service: service_names::RECOMMENDER,
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl Recommender for HttpRecommender {
    async fn query(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<RecipeCandidate>, CollaboratorError> {
        let request = PredictionRequest {
            nutrition_input: query.nutrition_target.to_array(),
            ingredients: &query.ingredients,
            params: PredictionParams {
                n_neighbors: query.neighbors,
                return_distance: query.return_distance,
            },
            food_type: query.food_type,
        };

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Unavailable {
                service: service_names::RECOMMENDER,
                message: format!(
                    "HTTP {status}: {}",
                    response.text().await.unwrap_or_default()
                ),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(&e))?;
        let parsed: PredictionResponse = serde_json::from_str(&replace_non_finite_tokens(&body))
            .map_err(|e| CollaboratorError::InvalidResponse {
                service: service_names::RECOMMENDER,
                message: format!("JSON parse error: {e}"),
            })?;

        let recipes = parsed.output.unwrap_or_default();
        debug!(
            endpoint = %self.endpoint,
            neighbors = query.neighbors,
            returned = recipes.len(),
            "Recommender query completed"
        );
        Ok(recipes)
    }
}

/// Replace bare `NaN`, `Infinity`, and `-Infinity` tokens with `null`
///
/// Tokens inside string literals are left untouched. Returns the input
/// unchanged (borrowed) when nothing needs rewriting.
#[must_use]
pub fn replace_non_finite_tokens(body: &str) -> Cow<'_, str> {
    let bytes = body.as_bytes();
    let mut rewritten: Option<String> = None;
    let mut copied_until = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            index += 1;
            continue;
        }
        if byte == b'"' {
            in_string = true;
            index += 1;
            continue;
        }
        if let Some(token) = NON_FINITE_TOKENS
            .iter()
            .find(|token| bytes[index..].starts_with(token.as_bytes()))
        {
            let buffer = rewritten.get_or_insert_with(|| String::with_capacity(body.len()));
            buffer.push_str(&body[copied_until..index]);
            buffer.push_str("null");
            index += token.len();
            copied_until = index;
            continue;
        }
        index += 1;
    }

    match rewritten {
        Some(mut buffer) => {
            buffer.push_str(&body[copied_until..]);
            Cow::Owned(buffer)
        }
        None => Cow::Borrowed(body),
    }
}
