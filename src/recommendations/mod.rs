// ABOUTME: Recommendation module turning biometric profiles into per-meal recipe lists
// ABOUTME: Orchestrator, upstream-row sanitization, custom searches, and plan sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Recommendations
//!
//! ```text
//! PersonProfile -> EnergyProfile -> meal shares -> targets -> Recommender -> sanitize -> ImageLookup
//! ```
//!
//! Collaborator failures never fail a request. They are recorded as
//! [`Degradation`]s and the affected meal or recipe falls back to an empty list or
//! the placeholder image.

pub mod custom;
pub mod orchestrator;
pub mod sanitize;
pub mod session;

pub use custom::{parse_ingredient_filter, CustomRecommendation, CustomRecommendationRequest};
pub use orchestrator::{
    Collaborator, Degradation, DietPlan, DietRecommendation, MealGroup,
    RecommendationOrchestrator,
};
pub use sanitize::sanitize_candidate;
pub use session::{MealChoice, MealSelectionSummary, PlanSession};
