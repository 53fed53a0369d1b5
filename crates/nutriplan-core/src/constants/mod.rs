// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrient keys, profile limits, service names, and presentation defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than being kept in a single flat list.

/// Service names used in structured logs and error messages
pub mod service_names {
    /// Name of the engine for logging
    pub const NUTRIPLAN: &str = "nutriplan";
    /// External recipe recommender
    pub const RECOMMENDER: &str = "recommender";
    /// External recipe image lookup
    pub const IMAGE_LOOKUP: &str = "image_lookup";
    /// External vision analyzer
    pub const VISION_ANALYZER: &str = "vision_analyzer";
}

/// Wire names of the nine nutrient columns, in vector order
pub mod nutrients {
    /// Column names as they appear in the recipe dataset and vision payloads
    pub const NUTRIENT_KEYS: [&str; 9] = [
        "Calories",
        "FatContent",
        "SaturatedFatContent",
        "CholesterolContent",
        "SodiumContent",
        "CarbohydrateContent",
        "FiberContent",
        "SugarContent",
        "ProteinContent",
    ];
}

/// Accepted biometric input ranges (inclusive)
pub mod profile_limits {
    /// Minimum age in years
    pub const MIN_AGE_YEARS: u32 = 2;
    /// Maximum age in years
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Minimum height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 10.0;
    /// Maximum weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 300.0;
}

/// Recommendation request defaults
pub mod recommendation {
    /// Neighbors requested per meal when the caller does not specify a count
    pub const DEFAULT_NEIGHBORS: usize = 5;
    /// Image shown when no picture can be found for a recipe
    pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+Image";
    /// Separator used by free-text ingredient filters
    pub const INGREDIENT_SEPARATOR: char = ';';
}

/// Presentation labels used by analysis reports
pub mod analysis {
    /// Name used for detected items the vision model did not name
    pub const UNKNOWN_ITEM_NAME: &str = "Unknown";
    /// Serving size used when the vision model did not report one
    pub const UNKNOWN_SERVING_SIZE: &str = "N/A";
    /// Decimal places kept in analysis report totals
    pub const REPORT_DECIMALS: i32 = 1;
}
