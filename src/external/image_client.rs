// ABOUTME: HTTP client that resolves a recipe name to a picture URL
// ABOUTME: Substitutes the percent-encoded name into a configured URL template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use super::{CollaboratorError, ImageLookup};
use crate::config::environment::NAME_PLACEHOLDER;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ImageLookupResponse {
    #[serde(default)]
    image_link: Option<String>,
}

/// Image lookup reached over HTTP
///
/// The service is called with `GET` on the configured template after `{name}`
/// is replaced, and answers `{"image_link": "<url>" | null}`.
#[derive(Debug, Clone)]
pub struct HttpImageLookup {
    url_template: String,
    http_client: reqwest::Client,
    timeout: Duration,
}

impl HttpImageLookup {
    /// Create a client for a template such as `https://images.example/find?q={name}`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the template lacks `{name}` or the HTTP
    /// client cannot be built
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let url_template = url_template.into();
        if !url_template.contains(NAME_PLACEHOLDER) {
            return Err(AppError::config(format!(
                "Image lookup template must contain {NAME_PLACEHOLDER}: {url_template}"
            )));
        }
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to build image lookup HTTP client: {e}"))
                    .with_source(e)
            })?;
        Ok(Self {
            url_template,
            http_client,
            timeout,
        })
    }

    /// URL queried for `recipe_name`
    #[must_use]
    pub fn lookup_url(&self, recipe_name: &str) -> String {
        self.url_template
            .replace(NAME_PLACEHOLDER, &urlencoding::encode(recipe_name))
    }
}

#[async_trait]
impl ImageLookup for HttpImageLookup {
    async fn lookup(&self, recipe_name: &str) -> Result<Option<String>, CollaboratorError> {
        let url = self.lookup_url(recipe_name);
        let response = self.http_client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                CollaboratorError::Timeout {
                    service: service_names::IMAGE_LOOKUP,
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                }
            } else {
                CollaboratorError::Unavailable {
                    service: service_names::IMAGE_LOOKUP,
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Unavailable {
                service: service_names::IMAGE_LOOKUP,
                message: format!("HTTP {status}"),
            });
        }

        let parsed: ImageLookupResponse =
            response
                .json()
                .await
                .map_err(|e| CollaboratorError::InvalidResponse {
                    service: service_names::IMAGE_LOOKUP,
                    message: format!("JSON parse error: {e}"),
                })?;

        let link = parsed
            .image_link
            .map(|link| link.trim().to_owned())
            .filter(|link| !link.is_empty());
        debug!(recipe = recipe_name, found = link.is_some(), "Image lookup completed");
        Ok(link)
    }
}

/// Image lookup used when no lookup service is configured
///
/// Every recipe gets the placeholder image.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImageLookup;

#[async_trait]
impl ImageLookup for NoImageLookup {
    async fn lookup(&self, _recipe_name: &str) -> Result<Option<String>, CollaboratorError> {
        Ok(None)
    }
}
