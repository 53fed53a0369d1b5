// ABOUTME: Food analysis command for nutriplan-cli
// ABOUTME: Replays a saved vision model reply through the analysis service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

use anyhow::{Context, Result};
use nutriplan::analysis::FoodAnalysisService;
use nutriplan::config::environment::ServerConfig;
use nutriplan::external::RecordedReplyAnalyzer;
use nutriplan::intelligence::HealthClassifier;
use std::path::Path;
use std::sync::Arc;

use crate::helpers::display::{display_food_analysis, print_json};

/// Classify the items described in a saved vision reply
pub async fn run(reply_path: &Path, image_path: Option<&Path>, json: bool) -> Result<()> {
    let config = ServerConfig::from_env()?;
    let nutrition = config.load_nutrition_config()?;

    let reply = tokio::fs::read_to_string(reply_path)
        .await
        .with_context(|| format!("Failed to read vision reply {}", reply_path.display()))?;
    let image = match image_path {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image {}", path.display()))?,
        None => Vec::new(),
    };

    let service = FoodAnalysisService::new(
        Arc::new(RecordedReplyAnalyzer::new(reply)),
        HealthClassifier::new(nutrition.health_thresholds)?,
        config.vision.timeout(),
    );
    let outcome = service.analyze(&image).await;

    if json {
        print_json(&outcome)
    } else {
        display_food_analysis(&outcome);
        Ok(())
    }
}
