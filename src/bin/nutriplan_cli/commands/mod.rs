// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides access to planning and food analysis commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

pub mod analyze;
pub mod plan;
