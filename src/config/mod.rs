// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Loads collaborator endpoints, timeouts, and orchestration limits from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Configuration module for NutriPlan
//!
//! - **Environment**: collaborator endpoints and orchestration settings from environment variables
//! - **Algorithms**: `NutritionConfig` from `nutriplan-intelligence`, optionally loaded from a JSON file

/// Environment and collaborator configuration
pub mod environment;

pub use environment::{
    ImageLookupConfig, OrchestratorConfig, RecommenderConfig, ServerConfig, VisionConfig,
};
