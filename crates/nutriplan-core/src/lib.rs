// ABOUTME: Core types and constants for the NutriPlan nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

#![deny(unsafe_code)]

//! # NutriPlan Core
//!
//! Foundation crate providing shared types and constants for the NutriPlan engine.
//! It has no async or network dependencies so the algorithm crate and the
//! orchestration layer can both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Constants organized by domain
//! - **models**: Profiles, nutrition vectors, recipes, and analysis results

/// Unified error handling system with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Core data models (profile, nutrition, recipes, analysis)
pub mod models;
