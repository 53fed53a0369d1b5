// ABOUTME: Main library entry point for the NutriPlan nutrition engine
// ABOUTME: Orchestrates biometric targets, recipe recommendation, and food image analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![deny(unsafe_code)]

//! # NutriPlan
//!
//! Converts a person's biometrics into per-meal nutrition targets, drives a
//! pluggable recipe recommender with those targets, and classifies analyzed
//! food into health and weight-impact categories.
//!
//! ## Architecture
//!
//! - **`nutriplan-core`**: errors, constants, and strongly typed models
//! - **`nutriplan-intelligence`**: pure algorithms (BMR, TDEE, targets, classification)
//! - **external**: collaborator traits and their HTTP adapters
//! - **recommendations**: the orchestrator, custom searches, and plan sessions
//! - **analysis**: enrichment of vision-detected food items
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::environment::ServerConfig;
//! use nutriplan::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Requesting {} recipes per meal", config.orchestrator.neighbors);
//!     Ok(())
//! }
//! ```

/// Unified error handling (re-exported from `nutriplan-core`)
pub use nutriplan_core::errors;

/// Domain constants (re-exported from `nutriplan-core`)
pub use nutriplan_core::constants;

/// Domain models (re-exported from `nutriplan-core`)
pub use nutriplan_core::models;

/// Pure nutrition algorithms (re-exported `nutriplan-intelligence` crate)
pub use nutriplan_intelligence as intelligence;

/// Environment configuration
pub mod config;

/// Logging configuration and structured application events
pub mod logging;

/// External collaborator traits and HTTP adapters
pub mod external;

/// Recommendation orchestration, custom searches, and plan sessions
pub mod recommendations;

/// Food image analysis enrichment
pub mod analysis;
